// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

pub const EN_APP_TITLE: &str = "Control Panel";

// Trigger buttons (glyph + hover text).
pub const EN_GLYPH_USERS: &str = "👥";
pub const EN_GLYPH_PROFILE: &str = "👤";
pub const EN_BTN_USERS: &str = "Users";
pub const EN_BTN_PROFILE: &str = "Profile";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

// Panel titles, one per control mode.
pub const EN_TITLE_USER_LIST: &str = "User List";
pub const EN_TITLE_PROFILE: &str = "Profile";

pub const EN_GLYPH_CLOSE: &str = "✖";
pub const EN_BTN_CLOSE: &str = "Close";

pub const EN_HOME_INSTRUCTIONS: &str = "Use the buttons above to open the users or profile panel.";

pub const EN_COL_NAME: &str = "Name";

// Profile card.
pub const EN_HEADING_PROFILE: &str = "Profile";
pub const EN_GLYPH_EDIT: &str = "✏";
pub const EN_GLYPH_SAVE: &str = "✔";
pub const EN_GLYPH_CANCEL: &str = "✖";
pub const EN_BTN_EDIT_PROFILE: &str = "Edit profile";
pub const EN_BTN_SAVE_CHANGES: &str = "Save changes";
pub const EN_BTN_CANCEL_EDITING: &str = "Cancel editing";

pub const EN_LABEL_NAME: &str = "Name";
pub const EN_LABEL_ABOUT: &str = "About";
pub const EN_LABEL_COUNTRY: &str = "Country";
pub const EN_HINT_SELECT_LOCALE: &str = "Select locale";

// Default fixture locations, relative to the fixture source.
pub const FIXTURE_USERS_PATH: &str = "fixtures/users.json";
pub const FIXTURE_PROFILE_PATH: &str = "fixtures/profile.json";
pub const DEFAULT_FIXTURE_SOURCE: &str = "http://127.0.0.1:3000";

pub const USER_AGENT: &str = concat!("control-panel/", env!("CARGO_PKG_VERSION"));

/// One selectable country in the profile's locale field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Every locale the profile editor offers, in selector order.
pub const LOCALES: &[LocaleOption] = &[
    LocaleOption { code: "US", label: "United States" },
    LocaleOption { code: "ES", label: "Spain" },
    LocaleOption { code: "DE", label: "Germany" },
    LocaleOption { code: "FR", label: "France" },
    LocaleOption { code: "IT", label: "Italy" },
    LocaleOption { code: "UK", label: "United Kingdom" },
    LocaleOption { code: "NL", label: "Netherlands" },
    LocaleOption { code: "BE", label: "Belgium" },
    LocaleOption { code: "PT", label: "Portugal" },
    LocaleOption { code: "SE", label: "Sweden" },
    LocaleOption { code: "NO", label: "Norway" },
];

pub fn locale_option(code: &str) -> Option<&'static LocaleOption> {
    LOCALES.iter().find(|l| l.code == code)
}

pub fn locale_label(code: &str) -> Option<&'static str> {
    locale_option(code).map(|l| l.label)
}

/// `"US (United States)"` for known codes, the bare code otherwise.
pub fn locale_display(code: &str) -> String {
    match locale_label(code) {
        Some(label) => format!("{code} ({label})"),
        None => code.to_string(),
    }
}
