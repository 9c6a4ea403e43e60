//! Loading the users and profile fixtures, either over HTTP or from a local directory.
//!
//! Each fixture is fetched once on a background thread; the UI thread polls a
//! [`PendingFetch`] every frame and never blocks on it.

use crate::{Profile, User, statics};
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
};
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Upper bound for a fixture response body (1 MB).
const MAX_FIXTURE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("GET {url} failed")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("reading {path:?} failed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{location} is not a valid fixture")]
    Parse {
        location: String,
        #[source]
        source: json5::Error,
    },
    #[error("fetch of {location} ended without a result")]
    Interrupted { location: String },
}

/// Where fixture documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    /// Base URL; fixture paths are appended to it and fetched with GET.
    Http { base_url: String },
    /// Directory; fixture paths are resolved against it.
    Dir { root: PathBuf },
}

impl FixtureSource {
    /// `http://` and `https://` strings (any case) are URLs; anything else is a directory.
    pub fn parse(source: &str) -> Self {
        let is_url = source.split_once("://").is_some_and(|(scheme, _)| {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        });
        if is_url {
            FixtureSource::Http {
                base_url: source.trim_end_matches('/').to_string(),
            }
        } else {
            FixtureSource::Dir {
                root: PathBuf::from(source),
            }
        }
    }

    pub fn location(&self, rel_path: &str) -> String {
        let rel_path = rel_path.trim_start_matches('/');
        match self {
            FixtureSource::Http { base_url } => format!("{base_url}/{rel_path}"),
            FixtureSource::Dir { root } => root.join(rel_path).display().to_string(),
        }
    }

    fn read_text(&self, rel_path: &str) -> Result<String, FixtureError> {
        match self {
            FixtureSource::Http { .. } => {
                let url = self.location(rel_path);
                http_get_text(&url).map_err(|source| FixtureError::Http { url, source })
            }
            FixtureSource::Dir { root } => {
                let path = root.join(rel_path.trim_start_matches('/'));
                fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })
            }
        }
    }

    /// Fetch and deserialize one fixture document.
    pub fn load<T: DeserializeOwned>(&self, rel_path: &str) -> Result<T, FixtureError> {
        let text = self.read_text(rel_path)?;
        json5::from_str(&text).map_err(|source| FixtureError::Parse {
            location: self.location(rel_path),
            source,
        })
    }
}

fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder().tls_config(tls_config).build().into()
}

fn http_get_text(url: &str) -> Result<String, ureq::Error> {
    agent()
        .get(url)
        .header("User-Agent", statics::USER_AGENT)
        .call()?
        .into_body()
        .with_config()
        .limit(MAX_FIXTURE_SIZE)
        .read_to_string()
}

/// The fixture source plus the two document paths inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    pub source: FixtureSource,
    pub users_path: String,
    pub profile_path: String,
}

impl Fixtures {
    pub fn new(source: FixtureSource) -> Self {
        Self {
            source,
            users_path: statics::FIXTURE_USERS_PATH.to_string(),
            profile_path: statics::FIXTURE_PROFILE_PATH.to_string(),
        }
    }

    pub fn fetch_users(&self) -> Result<Vec<User>, FixtureError> {
        self.source.load(&self.users_path)
    }

    pub fn fetch_profile(&self) -> Result<Profile, FixtureError> {
        self.source.load(&self.profile_path)
    }

    /// Start both fetches on their own threads. `notify` runs after each one finishes.
    pub fn spawn_all<N>(&self, notify: N) -> (PendingFetch<Vec<User>>, PendingFetch<Profile>)
    where
        N: Fn() + Clone + Send + 'static,
    {
        let users = {
            let fixtures = self.clone();
            PendingFetch::spawn(
                self.source.location(&self.users_path),
                move || fixtures.fetch_users(),
                notify.clone(),
            )
        };
        let profile = {
            let fixtures = self.clone();
            PendingFetch::spawn(
                self.source.location(&self.profile_path),
                move || fixtures.fetch_profile(),
                notify,
            )
        };
        (users, profile)
    }
}

/// One in-flight fixture load. Yields its result exactly once.
#[derive(Debug)]
pub struct PendingFetch<T> {
    location: String,
    receiver: Option<Receiver<Result<T, FixtureError>>>,
}

impl<T: Send + 'static> PendingFetch<T> {
    pub fn spawn<F, N>(location: String, fetch: F, notify: N) -> Self
    where
        F: FnOnce() -> Result<T, FixtureError> + Send + 'static,
        N: FnOnce() + Send + 'static,
    {
        log::info!("fetching {location}");
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(fetch());
            notify();
        });
        Self {
            location,
            receiver: Some(rx),
        }
    }

    /// A fetch that never yields anything.
    pub fn idle() -> Self {
        Self {
            location: String::new(),
            receiver: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Non-blocking check for the result.
    pub fn poll(&mut self) -> Option<Result<T, FixtureError>> {
        let receiver = self.receiver.as_ref()?;
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(FixtureError::Interrupted {
                location: self.location.clone(),
            }),
        };
        self.receiver = None;
        Some(result)
    }
}
