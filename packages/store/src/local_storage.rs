//! # Browser localStorage store — web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. Values
//! go straight into `window.localStorage`, optionally under a prefix so several
//! users of the same browser profile do not share preferences.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (disabled storage, private mode) or full.
//! Reads degrade to `None`, writes are logged and dropped.

use tracing::warn;
use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    prefix: Option<String>,
}

impl LocalStorage {
    /// Unprefixed store: keys are used as-is.
    pub fn new() -> Self {
        Self::with_namespace(None)
    }

    /// Store scoped to an optional namespace.
    ///
    /// - `Some("user-id")` → key `"user-id:user_preferences"`
    /// - `None` → key `"user_preferences"`
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        Self {
            prefix: namespace.map(|ns| format!("{ns}:")),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&self.full_key(key)).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        let Some(storage) = Self::storage() else {
            warn!("localStorage unavailable, dropping write");
            return;
        };
        if let Err(e) = storage.set_item(&self.full_key(key), &value) {
            warn!(key, "localStorage write failed: {e:?}");
        }
    }
}
