use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::HomeView {
            on_open_settings: move |_| {
                nav.push(Route::Settings {});
            },
        }
    }
}
