use crate::{ControlMode, FixtureError, Profile, ProfileEditor, User, statics};

/// What the panel body shows for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBody<'a> {
    UserList(&'a [User]),
    Profile(&'a ProfileEditor),
}

/// State behind the side panel: open flag, mode, and the loaded data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlPanel {
    mode: ControlMode,
    open: bool,
    users: Vec<User>,
    profile: ProfileEditor,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger button: switch mode and open the panel.
    pub fn select(&mut self, mode: ControlMode) {
        if mode != self.mode {
            log::debug!("control mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ControlMode::UserList => statics::EN_TITLE_USER_LIST,
            ControlMode::Profile => statics::EN_TITLE_PROFILE,
        }
    }

    pub fn body(&self) -> PanelBody<'_> {
        match self.mode {
            ControlMode::UserList => PanelBody::UserList(&self.users),
            ControlMode::Profile => PanelBody::Profile(&self.profile),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn profile(&self) -> &ProfileEditor {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileEditor {
        &mut self.profile
    }

    /// Apply a finished users fetch. Failures keep the empty list.
    pub fn apply_users(&mut self, result: Result<Vec<User>, FixtureError>) {
        match result {
            Ok(users) => {
                log::info!("loaded {} users", users.len());
                self.users = users;
            }
            Err(e) => log::warn!("users fixture: {:#}", anyhow::Error::from(e)),
        }
    }

    /// Apply a finished profile fetch. Failures keep the profile empty.
    pub fn apply_profile(&mut self, result: Result<Profile, FixtureError>) {
        match result {
            Ok(profile) => {
                log::info!("loaded profile {:?}", profile.name);
                self.profile.load(profile);
            }
            Err(e) => log::warn!("profile fixture: {:#}", anyhow::Error::from(e)),
        }
    }
}
