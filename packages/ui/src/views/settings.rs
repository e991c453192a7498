use dioxus::prelude::*;
use store::Theme;

use crate::{save_preferences, use_preferences, AvatarPicker};

const LOCALES: [(&str, &str); 5] = [
    ("en", "English"),
    ("fr", "Français"),
    ("es", "Español"),
    ("de", "Deutsch"),
    ("pt-BR", "Português (Brasil)"),
];

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::System => "System",
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}

/// Shared settings view.
///
/// Platform packages control which sections are visible via props.
#[component]
pub fn SettingsView(
    /// Show the avatar picker (needs a signed-in player).
    #[props(default = true)]
    show_avatars: bool,
) -> Element {
    let preferences = use_preferences();
    let current = preferences();

    rsx! {
        div {
            class: "settings",

            h1 { "Settings" }

            section {
                class: "settings-section",
                h2 { "Theme" }
                div {
                    class: "theme-options",
                    for theme in Theme::ALL {
                        button {
                            key: "{theme.as_str()}",
                            class: if current.theme == theme { "theme-option active" } else { "theme-option" },
                            onclick: move |_| {
                                let updated = preferences().with_theme(theme);
                                save_preferences(preferences, updated);
                            },
                            "{theme_label(theme)}"
                        }
                    }
                }
            }

            section {
                class: "settings-section",
                h2 { "Language" }
                select {
                    value: "{current.locale}",
                    onchange: move |evt: FormEvent| {
                        let updated = preferences().with_locale(evt.value());
                        save_preferences(preferences, updated);
                    },
                    for (code, label) in LOCALES {
                        option { key: "{code}", value: "{code}", "{label}" }
                    }
                }
            }

            if show_avatars {
                section {
                    class: "settings-section",
                    h2 { "Avatar" }
                    AvatarPicker {}
                }
            }
        }
    }
}
