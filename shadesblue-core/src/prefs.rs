//! Accessibility and theme preferences.
//!
//! The accessibility record and the color theme are persisted under separate
//! keys: the theme must stay resolvable even when the record is corrupt, and
//! its default comes from the environment rather than a constant.

use crate::config::{PREFS_KEY, THEME_KEY};
use crate::storage::PreferenceStorage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive text size choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
    #[serde(rename = "xlarge")]
    ExtraLarge,
}

impl TextSize {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Large, Self::ExtraLarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
            Self::ExtraLarge => "xlarge",
        }
    }

    /// Human-readable name used in labels and announcements.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
            Self::ExtraLarge => "extra large",
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The persisted accessibility preference record.
///
/// Fields missing from stored JSON are filled from [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    pub text_size: TextSize,
    pub underline_links: bool,
    pub high_contrast: bool,
    pub reduce_motion: bool,
}

impl PreferenceRecord {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a JSON object with correctly typed fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Light,
    Dark,
}

impl ColorTheme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// A saved, recognised value wins; otherwise follow the system color scheme.
    #[must_use]
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        saved.and_then(Self::parse).unwrap_or(if system_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("stored preferences are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write-through store for the preference record and the color theme.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored record, reporting why it could not be used.
    ///
    /// A missing key is not an error and yields the default record.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the stored JSON is malformed.
    pub fn try_load(&self) -> Result<PreferenceRecord, PreferenceError> {
        let raw = self
            .storage
            .get_item(PREFS_KEY)
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        match raw {
            Some(json) => Ok(PreferenceRecord::from_json(&json)?),
            None => Ok(PreferenceRecord::default()),
        }
    }

    /// Read the stored record; never fails.
    #[must_use]
    pub fn load(&self) -> PreferenceRecord {
        self.try_load().unwrap_or_else(|err| {
            log::warn!("discarding stored accessibility preferences: {err}");
            PreferenceRecord::default()
        })
    }

    /// Serialize and write the full record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend refuses the write.
    pub fn try_save(&self, record: &PreferenceRecord) -> Result<(), PreferenceError> {
        let json = record.to_json()?;
        self.storage
            .set_item(PREFS_KEY, &json)
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }

    /// Best-effort write; a refused write is logged and swallowed.
    pub fn save(&self, record: &PreferenceRecord) {
        if let Err(err) = self.try_save(record) {
            log::warn!("accessibility preferences not persisted: {err}");
        }
    }

    /// Rewrite the defaults. The defaults are returned even when the write
    /// is refused, so a stale stored record never outlives a reset.
    #[must_use]
    pub fn reset(&self) -> PreferenceRecord {
        let defaults = PreferenceRecord::default();
        self.save(&defaults);
        defaults
    }

    #[must_use]
    pub fn load_theme(&self, system_prefers_dark: bool) -> ColorTheme {
        let saved = self.storage.get_item(THEME_KEY).unwrap_or_else(|err| {
            log::warn!("theme preference unreadable: {err}");
            None
        });
        ColorTheme::resolve(saved.as_deref(), system_prefers_dark)
    }

    pub fn save_theme(&self, theme: ColorTheme) {
        if let Err(err) = self.storage.set_item(THEME_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
    }
}
