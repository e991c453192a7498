//! Preferences context for the component tree.
//!
//! [`PreferencesProvider`] loads the stored preferences once on mount and keeps
//! them in a signal; [`save_preferences`] updates the signal and writes the
//! whole value back. The storage medium is picked per platform by
//! [`make_preferences`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Mobile** (`secure-store` feature): owner-only files via [`store::SecureFileStore`]
//! - **Desktop**: files via [`store::FileStore`]

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::{PreferencesRepository, UserPreferences};

use crate::theme::apply_theme;

pub type PreferencesSignal = Signal<UserPreferences>;

/// Create the platform-appropriate preferences repository.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_preferences() -> impl PreferencesRepository {
    store::StoredPreferences::new(store::LocalStorage::new())
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_preferences() -> impl PreferencesRepository {
    store::StoredPreferences::new(store::MemoryStore::new())
}

#[cfg(all(not(target_arch = "wasm32"), feature = "secure-store"))]
pub fn make_preferences() -> impl PreferencesRepository {
    store::StoredPreferences::new(store::SecureFileStore::new(data_dir().join("secure")))
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "secure-store")))]
pub fn make_preferences() -> impl PreferencesRepository {
    store::StoredPreferences::new(store::FileStore::new(data_dir()))
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("playroom")
}

/// Get the current preferences.
/// Returns a signal that updates once stored preferences are loaded and on every save.
pub fn use_preferences() -> PreferencesSignal {
    use_context::<PreferencesSignal>()
}

/// Replace the preferences and persist them. The stored value is overwritten, not merged.
pub fn save_preferences(preferences: PreferencesSignal, updated: UserPreferences) {
    save_preferences_to(preferences, make_preferences(), updated);
}

/// [`save_preferences`] against an explicit repository.
///
/// The write runs in a root-level task, so it completes even if the calling
/// component unmounts right after (a settings screen closed on selection).
pub fn save_preferences_to<R>(
    mut preferences: PreferencesSignal,
    repository: R,
    updated: UserPreferences,
) where
    R: PreferencesRepository + 'static,
{
    preferences.set(updated.clone());
    spawn_forever(async move {
        repository.save(&updated).await;
    });
}

/// Provider component that loads preferences and applies the selected theme.
/// Wrap your app with this component to enable [`use_preferences`].
#[component]
pub fn PreferencesProvider(children: Element) -> Element {
    let mut preferences: PreferencesSignal =
        use_context_provider(|| Signal::new(UserPreferences::default()));

    use_future(move || async move {
        let stored = make_preferences().load().await;
        tracing::debug!(theme = stored.theme.as_str(), locale = %stored.locale, "preferences loaded");
        preferences.set(stored);
    });

    use_effect(move || {
        apply_theme(preferences.read().theme);
    });

    rsx! { {children} }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use store::{KeyValueStore, MemoryStore, StoredPreferences, Theme, PREFERENCES_KEY};

    use super::*;

    #[component]
    fn Host() -> Element {
        let show_saver = use_signal(|| true);
        use_context_provider(|| Signal::new(UserPreferences::default()));

        rsx! {
            if show_saver() {
                Saver { show_saver }
            }
        }
    }

    /// Saves on mount and immediately asks its parent to unmount it.
    #[component]
    fn Saver(mut show_saver: Signal<bool>) -> Element {
        let store = use_context::<MemoryStore>();
        let preferences = use_preferences();

        use_hook(move || {
            save_preferences_to(
                preferences,
                StoredPreferences::new(store),
                UserPreferences::new(Theme::Dark, "fr"),
            );
            show_saver.set(false);
        });

        rsx! {}
    }

    #[tokio::test]
    async fn test_save_outlives_unmounted_caller() {
        let store = MemoryStore::new();
        let mut dom = VirtualDom::new(Host).with_root_context(store.clone());

        dom.rebuild_in_place();
        // Unmounts Saver before its save task has been polled.
        dom.render_immediate_to_vec();
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }

        let repo = StoredPreferences::new(store.clone());
        assert_eq!(repo.load().await, UserPreferences::new(Theme::Dark, "fr"));
        assert!(store.get(PREFERENCES_KEY).await.is_some());
    }
}
