pub mod kv;
pub mod preferences;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::{FileStore, SecureFileStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use kv::KeyValueStore;
pub use preferences::{
    coerce_preferences, parse_preferences, PreferencesRepository, StoredPreferences, Theme,
    UserPreferences, PREFERENCES_KEY,
};
