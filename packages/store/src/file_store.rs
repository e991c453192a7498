//! # Filesystem-backed key-value stores
//!
//! [`FileStore`] persists each key as a single file under a base directory. It is
//! used on desktop and as the local-storage slot on mobile. [`SecureFileStore`]
//! is the same layout with owner-only permissions, standing in for the
//! platform secure store.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # raw value text, overwritten on every write
//! ```
//!
//! ## Platform data directories
//!
//! Callers usually build the base from [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/playroom/` |
//! | Linux | `~/.local/share/playroom/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\playroom\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::kv::{is_valid_key, KeyValueStore};

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn value_path(&self, key: &str) -> Option<PathBuf> {
        if is_valid_key(key) {
            Some(self.base.join(key))
        } else {
            warn!(key, "rejected invalid storage key");
            None
        }
    }

    async fn write_value(&self, key: &str, value: &str) -> Option<PathBuf> {
        let path = self.value_path(key)?;
        if let Err(e) = fs::create_dir_all(&self.base).await {
            warn!(base = %self.base.display(), "failed to create store directory: {e}");
            return None;
        }
        if let Err(e) = fs::write(&path, value).await {
            warn!(path = %path.display(), "failed to write stored value: {e}");
            return None;
        }
        Some(path)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.value_path(key)?).await.ok()
    }

    async fn set(&self, key: &str, value: String) {
        self.write_value(key, &value).await;
    }
}

/// Filesystem store for values that should not be readable by other users.
///
/// Lives in its own directory; on Unix every written file is restricted to
/// `0o600` and the directory to `0o700`.
#[derive(Clone, Debug)]
pub struct SecureFileStore {
    inner: FileStore,
}

impl SecureFileStore {
    pub fn new(base: PathBuf) -> Self {
        Self {
            inner: FileStore::new(base),
        }
    }

    pub fn base(&self) -> &Path {
        self.inner.base()
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await {
        warn!(path = %path.display(), "failed to restrict permissions: {e}");
    }
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path, _mode: u32) {}

impl KeyValueStore for SecureFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(path) = self.inner.write_value(key, &value).await {
            restrict_permissions(self.inner.base(), 0o700).await;
            restrict_permissions(&path, 0o600).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{PreferencesRepository, StoredPreferences, Theme, UserPreferences};

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("playroom"));

        assert!(store.get("user_preferences").await.is_none());
        store.set("user_preferences", "{}".to_string()).await;

        // Re-open from same directory
        let reopened = FileStore::new(dir.path().join("playroom"));
        assert_eq!(reopened.get("user_preferences").await.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_file_io_yields_to_the_runtime() {
        use std::future::{poll_fn, Future};
        use std::task::Poll;

        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("playroom"));

        // Disk work runs on the blocking pool, so the first poll cannot finish it.
        let mut write = std::pin::pin!(store.set("user_preferences", "{}".to_string()));
        let first = poll_fn(|cx| Poll::Ready(write.as_mut().poll(cx))).await;
        assert!(first.is_pending());
        write.await;

        assert_eq!(store.get("user_preferences").await.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("inner"));

        store.set("../outside", "x".to_string()).await;

        assert!(!dir.path().join("outside").exists());
        assert!(store.get("../outside").await.is_none());
    }

    #[tokio::test]
    async fn test_preferences_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPreferences::new(Theme::Dark, "de");

        StoredPreferences::new(FileStore::new(dir.path().to_path_buf()))
            .save(&prefs)
            .await;

        let loaded = StoredPreferences::new(FileStore::new(dir.path().to_path_buf()))
            .load()
            .await;
        assert_eq!(loaded, prefs);
    }

    #[tokio::test]
    async fn test_unwritable_base_is_absorbed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        // base is a file, so every write fails
        let repo = StoredPreferences::new(FileStore::new(blocker.join("nested")));
        repo.save(&UserPreferences::new(Theme::Light, "fr")).await;

        assert_eq!(repo.load().await, UserPreferences::default());
    }

    #[tokio::test]
    async fn test_secure_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SecureFileStore::new(dir.path().join("secure"));

        store.set("user_preferences", "{\"theme\":\"dark\"}".to_string()).await;

        assert_eq!(
            store.get("user_preferences").await.as_deref(),
            Some("{\"theme\":\"dark\"}")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_secure_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = SecureFileStore::new(dir.path().join("secure"));
        store.set("user_preferences", "{}".to_string()).await;

        let file_mode = std::fs::metadata(store.base().join("user_preferences"))
            .unwrap()
            .permissions()
            .mode();
        let dir_mode = std::fs::metadata(store.base()).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);
        assert_eq!(dir_mode & 0o777, 0o700);
    }
}
