//! This crate contains all shared UI for the workspace.

pub mod views;

mod preferences;
pub use preferences::{
    make_preferences, save_preferences, save_preferences_to, use_preferences, PreferencesProvider,
    PreferencesSignal,
};

mod backend;
pub use backend::{use_backend, use_query, Backend, BackendProvider};

mod theme;
pub use theme::apply_theme;

mod player_badge;
pub use player_badge::{AvatarPicker, PlayerBadge};
