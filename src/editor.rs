use crate::{Profile, statics};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no profile has been loaded yet")]
    NotLoaded,
    #[error("the profile is already being edited")]
    AlreadyEditing,
    #[error("the profile is not being edited")]
    NotEditing,
    #[error("unknown locale code {0:?}")]
    UnknownLocale(String),
}

/// View/edit state of the profile card.
///
/// Outside of `Editing` only the committed profile exists, so the edit buffer
/// can never be stale or shown by accident.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileEditor {
    /// The profile fixture has not arrived (or failed to load).
    #[default]
    Empty,
    Viewing {
        profile: Profile,
    },
    Editing {
        committed: Profile,
        buffer: Profile,
    },
}

impl ProfileEditor {
    pub fn load(&mut self, profile: Profile) {
        *self = ProfileEditor::Viewing { profile };
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self, ProfileEditor::Empty)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ProfileEditor::Editing { .. })
    }

    /// The last saved profile.
    pub fn committed(&self) -> Option<&Profile> {
        match self {
            ProfileEditor::Empty => None,
            ProfileEditor::Viewing { profile } => Some(profile),
            ProfileEditor::Editing { committed, .. } => Some(committed),
        }
    }

    /// The in-progress copy; `None` unless editing.
    pub fn buffer(&self) -> Option<&Profile> {
        match self {
            ProfileEditor::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut Profile> {
        match self {
            ProfileEditor::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    pub fn begin_edit(&mut self) -> Result<(), EditError> {
        match std::mem::take(self) {
            ProfileEditor::Viewing { profile } => {
                log::debug!("profile: viewing -> editing");
                *self = ProfileEditor::Editing {
                    buffer: profile.clone(),
                    committed: profile,
                };
                Ok(())
            }
            other => {
                let err = match other {
                    ProfileEditor::Empty => EditError::NotLoaded,
                    _ => EditError::AlreadyEditing,
                };
                *self = other;
                Err(err)
            }
        }
    }

    /// Commit the buffer and return to viewing. Any values are accepted.
    pub fn save(&mut self) -> Result<(), EditError> {
        match std::mem::take(self) {
            ProfileEditor::Editing { buffer, .. } => {
                log::debug!("profile: editing -> viewing (save)");
                *self = ProfileEditor::Viewing { profile: buffer };
                Ok(())
            }
            other => {
                *self = other;
                Err(EditError::NotEditing)
            }
        }
    }

    /// Drop the buffer and return to viewing the committed profile.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        match std::mem::take(self) {
            ProfileEditor::Editing { committed, .. } => {
                log::debug!("profile: editing -> viewing (cancel)");
                *self = ProfileEditor::Viewing { profile: committed };
                Ok(())
            }
            other => {
                *self = other;
                Err(EditError::NotEditing)
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EditError> {
        let buffer = self.buffer_mut().ok_or(EditError::NotEditing)?;
        buffer.name = name.into();
        Ok(())
    }

    pub fn set_about(&mut self, about: impl Into<String>) -> Result<(), EditError> {
        let buffer = self.buffer_mut().ok_or(EditError::NotEditing)?;
        buffer.about = about.into();
        Ok(())
    }

    /// Only codes from [`statics::LOCALES`] are accepted.
    pub fn set_locale(&mut self, code: &str) -> Result<(), EditError> {
        let buffer = self.buffer_mut().ok_or(EditError::NotEditing)?;
        let option =
            statics::locale_option(code).ok_or_else(|| EditError::UnknownLocale(code.to_string()))?;
        buffer.locale = option.code.to_string();
        Ok(())
    }
}
