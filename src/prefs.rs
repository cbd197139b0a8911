//! Presentational preferences (theme and language).
//!
//! These are persisted as independent entries next to the task list but are
//! not part of the task store's invariants.

use crate::error::{Error, Result};
use crate::storage::Storage;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Load the persisted theme, falling back to the default.
    pub fn load(storage: &Storage) -> Self {
        storage
            .read_theme()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, storage: &Storage) -> Result<()> {
        storage.write_theme(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::InvalidArgument(format!(
                "unknown theme '{other}' (expected light|dark)"
            ))),
        }
    }
}

/// Interface language preference. Arabic is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Load the persisted language, falling back to the default.
    pub fn load(storage: &Storage) -> Self {
        storage
            .read_lang()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, storage: &Storage) -> Result<()> {
        storage.write_lang(self.as_str())
    }
}

impl std::str::FromStr for Lang {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "ar" => Ok(Lang::Ar),
            "en" => Ok(Lang::En),
            other => Err(Error::InvalidArgument(format!(
                "unknown language '{other}' (expected ar|en)"
            ))),
        }
    }
}
