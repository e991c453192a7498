//! # Key-value storage abstraction
//!
//! [`KeyValueStore`] is the storage medium underneath every client-local value.
//! Values are opaque text blobs addressed by fixed, well-known keys; the caller
//! decides how to encode them (preferences use JSON).
//!
//! Implementations live in sibling modules:
//!
//! | Store | Platform | Medium |
//! |-------|----------|--------|
//! | [`crate::MemoryStore`] | any | process memory (tests, fallback) |
//! | `FileStore` | desktop / mobile | one file per key under a data directory |
//! | `SecureFileStore` | mobile | like `FileStore`, owner-only file permissions |
//! | `LocalStorage` | web (`web` feature) | `window.localStorage` |
//!
//! Like the rest of this crate, stores never return errors: a failed read is
//! `None`, a failed write is logged and dropped.

/// Async trait for reading and writing text values by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
}

/// Whether `key` is usable as a storage key.
///
/// Keys double as file names for the filesystem stores, so only
/// `[A-Za-z0-9_.-]` is accepted, and a key may not start with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(is_valid_key("user_preferences"));
        assert!(is_valid_key("playroom.last-room"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../escape"));
        assert!(!is_valid_key(".hidden"));
        assert!(!is_valid_key("with space"));
        assert!(!is_valid_key("nested/key"));
    }
}
