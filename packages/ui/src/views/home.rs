use dioxus::prelude::*;

use crate::PlayerBadge;

/// Landing view shared by all platforms.
#[component]
pub fn HomeView(on_open_settings: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "home",
            header {
                class: "home-header",
                PlayerBadge {}
                button {
                    class: "home-settings",
                    onclick: move |_| on_open_settings.call(()),
                    "Settings"
                }
            }
        }
    }
}
