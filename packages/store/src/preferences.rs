//! # User preferences — port, schema and coercion
//!
//! Client-local settings owned by the device. They are created with defaults on
//! first read, changed only by an explicit save, and never synced to the backend.
//!
//! ## Schema
//!
//! ```json
//! {"theme": "dark", "locale": "en"}
//! ```
//!
//! | Field | Values | Default |
//! |-------|--------|---------|
//! | `theme` | `"system"`, `"light"`, `"dark"` | `"system"` |
//! | `locale` | language tag such as `"en"` or `"pt-BR"` | `"en"` |
//!
//! ## Loading never fails
//!
//! [`PreferencesRepository::load`] always yields a well-formed value. Stored text
//! is parsed as JSON and passed through [`coerce_preferences`], which keeps every
//! valid field and replaces missing or invalid ones with their default. Absent or
//! unparsable text yields [`UserPreferences::default`].
//!
//! Saving overwrites the whole value; there is no merge and no versioning.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::kv::KeyValueStore;

/// The well-known storage key for preferences.
pub const PREFERENCES_KEY: &str = "user_preferences";

const DEFAULT_LOCALE: &str = "en";
const MAX_LOCALE_LEN: usize = 35;

/// Colour scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system / browser setting.
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value for a `data-theme` attribute, `None` to leave it to the platform.
    pub fn data_attribute(&self) -> Option<&'static str> {
        match self {
            Self::System => None,
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
        }
    }
}

/// Client-local user settings.
///
/// [`UserPreferences::new`] and [`UserPreferences::with_locale`] normalize the
/// locale the same way loading does, so whatever they build survives a
/// save/load round trip. Setting `locale` directly skips that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: Theme,
    pub locale: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl UserPreferences {
    /// A trimmed, valid locale is kept; anything else becomes the default `"en"`.
    pub fn new(theme: Theme, locale: impl AsRef<str>) -> Self {
        Self {
            theme,
            locale: normalize_locale(locale.as_ref()).unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        }
    }

    /// Builder method to set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Builder method to set the locale, normalized like [`UserPreferences::new`].
    pub fn with_locale(mut self, locale: impl AsRef<str>) -> Self {
        self.locale =
            normalize_locale(locale.as_ref()).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        self
    }
}

fn normalize_locale(locale: &str) -> Option<String> {
    let locale = locale.trim();
    is_valid_locale(locale).then(|| locale.to_string())
}

fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= MAX_LOCALE_LEN
        && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Build preferences from an arbitrary JSON value, filling gaps with defaults.
///
/// Field-wise: a valid `theme` survives next to an invalid `locale` and vice
/// versa. Unknown fields are ignored. Anything other than a JSON object
/// (including `None`) gives the full default.
pub fn coerce_preferences(raw: Option<&Value>) -> UserPreferences {
    let defaults = UserPreferences::default();
    let Some(Value::Object(fields)) = raw else {
        return defaults;
    };

    let theme = fields
        .get("theme")
        .and_then(Value::as_str)
        .and_then(Theme::from_name)
        .unwrap_or(defaults.theme);

    let locale = fields
        .get("locale")
        .and_then(Value::as_str)
        .and_then(normalize_locale)
        .unwrap_or(defaults.locale);

    UserPreferences { theme, locale }
}

/// Parse stored text and coerce it. Unparsable text gives the default.
pub fn parse_preferences(text: &str) -> UserPreferences {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => coerce_preferences(Some(&value)),
        Err(e) => {
            warn!("stored preferences are not valid JSON, using defaults: {e}");
            UserPreferences::default()
        }
    }
}

/// Storage-agnostic access to the user's preferences.
///
/// Neither operation reports errors; implementations absorb storage failures.
pub trait PreferencesRepository {
    fn load(&self) -> impl std::future::Future<Output = UserPreferences>;
    fn save(&self, preferences: &UserPreferences) -> impl std::future::Future<Output = ()>;
}

/// Preferences kept as JSON under [`PREFERENCES_KEY`] in a key-value store.
#[derive(Clone, Debug, Default)]
pub struct StoredPreferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoredPreferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> PreferencesRepository for StoredPreferences<S> {
    async fn load(&self) -> UserPreferences {
        match self.store.get(PREFERENCES_KEY).await {
            Some(raw) => parse_preferences(&raw),
            None => {
                debug!("no stored preferences, using defaults");
                UserPreferences::default()
            }
        }
    }

    async fn save(&self, preferences: &UserPreferences) {
        match serde_json::to_string(preferences) {
            Ok(raw) => {
                debug!(theme = preferences.theme.as_str(), locale = %preferences.locale, "saving preferences");
                self.store.set(PREFERENCES_KEY, raw).await;
            }
            Err(e) => warn!("failed to serialize preferences: {e}"),
        }
    }
}
