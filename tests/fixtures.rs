use pretty_assertions::assert_eq;

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::{Duration, Instant};

use control_panel::{
    ControlPanel, FixtureError, FixtureSource, Fixtures, PendingFetch, Profile, ProfileEditor,
    User, UserId, statics,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn write_fixture(root: &Path, rel: &str, body: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body.as_bytes())?;
    Ok(())
}

fn wait_for<T: Send + 'static>(
    fetch: &mut PendingFetch<T>,
) -> std::result::Result<T, FixtureError> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(result) = fetch.poll() {
            return result;
        }
        assert!(Instant::now() < deadline, "fetch of {} timed out", fetch.location());
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn directory_source_loads_both_documents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixture(
        dir.path(),
        statics::FIXTURE_USERS_PATH,
        r#"[{"id": 1, "name": "Ada"}, {"id": "two", "name": "Grace"}]"#,
    )?;
    write_fixture(
        dir.path(),
        statics::FIXTURE_PROFILE_PATH,
        r#"{"name": "Ada", "about": "engineer", "locale": "US"}"#,
    )?;

    let fixtures = Fixtures::new(FixtureSource::Dir {
        root: dir.path().to_path_buf(),
    });

    assert_eq!(
        fixtures.fetch_users()?,
        vec![
            User {
                id: UserId::Number(1),
                name: "Ada".to_string()
            },
            User {
                id: UserId::Text("two".to_string()),
                name: "Grace".to_string()
            },
        ]
    );
    assert_eq!(
        fixtures.fetch_profile()?,
        Profile {
            name: "Ada".to_string(),
            about: "engineer".to_string(),
            locale: "US".to_string(),
        }
    );
    Ok(())
}

#[test]
fn missing_fixture_is_an_io_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let fixtures = Fixtures::new(FixtureSource::Dir {
        root: dir.path().to_path_buf(),
    });

    let err = fixtures.fetch_users().unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }), "{err:?}");
    Ok(())
}

#[test]
fn malformed_fixture_is_a_parse_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixture(dir.path(), statics::FIXTURE_PROFILE_PATH, r#"{"name": "Ada""#)?;
    write_fixture(dir.path(), statics::FIXTURE_USERS_PATH, r#"{"id": 1}"#)?;
    let fixtures = Fixtures::new(FixtureSource::Dir {
        root: dir.path().to_path_buf(),
    });

    assert!(matches!(
        fixtures.fetch_profile(),
        Err(FixtureError::Parse { .. })
    ));
    // Well-formed JSON with the wrong shape.
    assert!(matches!(
        fixtures.fetch_users(),
        Err(FixtureError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn background_fetches_fill_the_panel() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_fixture(
        dir.path(),
        "data/people.json",
        r#"[{"id": 7, "name": "Linus"}]"#,
    )?;
    write_fixture(
        dir.path(),
        "data/me.json",
        r#"{"name": "Ada", "about": "", "locale": "NO"}"#,
    )?;

    let fixtures = Fixtures {
        source: FixtureSource::Dir {
            root: dir.path().to_path_buf(),
        },
        users_path: "data/people.json".to_string(),
        profile_path: "/data/me.json".to_string(),
    };

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    let (mut users, mut profile) = fixtures.spawn_all(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(users.is_pending());
    assert!(profile.is_pending());

    let mut panel = ControlPanel::new();
    // Apply in the opposite order from spawning; completion order does not matter.
    panel.apply_profile(wait_for(&mut profile));
    panel.apply_users(wait_for(&mut users));

    assert_eq!(panel.users().len(), 1);
    assert_eq!(panel.users()[0].name, "Linus");
    assert_eq!(
        panel.profile().committed().map(|p| p.locale.as_str()),
        Some("NO")
    );
    assert!(!users.is_pending());
    assert!(users.poll().is_none());

    // Each thread notifies after sending, so give the second one a moment.
    let deadline = Instant::now() + Duration::from_secs(5);
    while notified.load(Ordering::SeqCst) < 2 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(notified.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn failed_background_fetch_leaves_panel_empty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let fixtures = Fixtures::new(FixtureSource::Dir {
        root: dir.path().to_path_buf(),
    });
    let (mut users, mut profile) = fixtures.spawn_all(|| {});

    let mut panel = ControlPanel::new();
    panel.apply_users(wait_for(&mut users));
    panel.apply_profile(wait_for(&mut profile));

    assert!(panel.users().is_empty());
    assert_eq!(panel.profile(), &ProfileEditor::Empty);
    Ok(())
}

#[test]
fn bundled_demo_fixtures_load() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let fixtures = Fixtures::new(FixtureSource::Dir { root });

    // Not asserting exact contents; just that the shipped files match the expected shapes.
    assert!(!fixtures.fetch_users()?.is_empty());
    let profile = fixtures.fetch_profile()?;
    assert!(statics::locale_option(&profile.locale).is_some());
    Ok(())
}

/// Serve `routes` over plain HTTP on an ephemeral port for `connections` requests.
/// Unknown paths get a 404. Returns the base URL.
fn serve_fixtures(routes: &'static [(&'static str, &'static str)], connections: usize) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base_url = format!("http://{}", listener.local_addr()?);

    std::thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let Ok(mut stream) = stream else {
                continue;
            };
            let mut reader = BufReader::new(&stream);
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain headers up to the blank line.
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 2).unwrap_or(false) {
                line.clear();
            }
            drop(reader);

            let path = request_line.split_whitespace().nth(1).unwrap_or("");
            let response = match routes.iter().find(|(route, _)| *route == path) {
                Some((_, body)) => format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                ),
                None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string(),
            };
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    Ok(base_url)
}

#[test]
fn http_source_fetches_profile_and_reports_missing_users() -> Result<()> {
    let base_url = serve_fixtures(
        &[(
            "/fixtures/profile.json",
            r#"{"name": "Ada", "about": "engineer", "locale": "US"}"#,
        )],
        2,
    )?;
    let fixtures = Fixtures::new(FixtureSource::parse(&base_url));
    assert!(matches!(fixtures.source, FixtureSource::Http { .. }));

    assert_eq!(
        fixtures.fetch_profile()?,
        Profile {
            name: "Ada".to_string(),
            about: "engineer".to_string(),
            locale: "US".to_string(),
        }
    );

    let err = fixtures.fetch_users().unwrap_err();
    match err {
        FixtureError::Http { url, source } => {
            assert_eq!(url, format!("{base_url}/{}", statics::FIXTURE_USERS_PATH));
            assert!(matches!(source, ureq::Error::StatusCode(404)), "{source:?}");
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
    Ok(())
}
