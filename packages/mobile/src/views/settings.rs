use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        button {
            class: "back",
            onclick: move |_| {
                nav.replace(Route::Home {});
            },
            "Back"
        }
        ui::views::SettingsView {}
    }
}
