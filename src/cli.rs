//! Command-line configuration.

use crate::{ControlMode, FixtureSource, Fixtures, statics};
use anyhow::ensure;
use clap::{Parser, ValueEnum};

/// Side panel with a user list and an editable profile
#[derive(Parser, Debug)]
#[command(name = "control-panel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fixture source: an http(s) base URL or a local directory
    #[arg(long, value_name = "SOURCE", default_value = statics::DEFAULT_FIXTURE_SOURCE)]
    pub fixtures: String,

    /// Users fixture path, relative to the source
    #[arg(long, value_name = "PATH", default_value = statics::FIXTURE_USERS_PATH)]
    pub users_path: String,

    /// Profile fixture path, relative to the source
    #[arg(long, value_name = "PATH", default_value = statics::FIXTURE_PROFILE_PATH)]
    pub profile_path: String,

    /// Start with the panel open in this mode
    #[arg(long, value_enum, value_name = "MODE")]
    pub open: Option<StartMode>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    Users,
    Profile,
}

impl From<StartMode> for ControlMode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Users => ControlMode::UserList,
            StartMode::Profile => ControlMode::Profile,
        }
    }
}

/// Everything the GUI needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fixtures: Fixtures,
    pub start_open: Option<ControlMode>,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<AppConfig> {
        let source = FixtureSource::parse(&self.fixtures);
        if let FixtureSource::Dir { root } = &source {
            ensure!(root.is_dir(), "fixture directory {root:?} does not exist");
        }
        Ok(AppConfig {
            fixtures: Fixtures {
                source,
                users_path: self.users_path,
                profile_path: self.profile_path,
            },
            start_open: self.open.map(ControlMode::from),
        })
    }
}
