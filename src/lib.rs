//! Core library for the control panel: a side panel that switches between a user list
//! and an editable profile card, both loaded once from fixture documents.

pub mod cli;
mod editor;
mod fixtures;
mod gui;
mod model;
mod panel;
pub mod statics;

pub use cli::AppConfig;
pub use editor::{EditError, ProfileEditor};
pub use fixtures::{FixtureError, FixtureSource, Fixtures, PendingFetch};
pub use gui::run_gui;
pub use model::{ControlMode, Profile, User, UserId};
pub use panel::{ControlPanel, PanelBody};
