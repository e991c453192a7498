use dioxus::prelude::*;
use store::Theme;

/// Reflect `theme` on the root element as a `data-theme` attribute.
///
/// `Theme::System` removes the attribute so stylesheets fall back to
/// `prefers-color-scheme`.
pub fn apply_theme(theme: Theme) {
    let script = match theme.data_attribute() {
        Some(name) => format!("document.documentElement.setAttribute('data-theme', '{name}');"),
        None => "document.documentElement.removeAttribute('data-theme');".to_string(),
    };
    let _ = document::eval(&script);
}
