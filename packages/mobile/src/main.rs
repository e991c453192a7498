use dioxus::prelude::*;

use views::{Home, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings {},
}

fn main() {
    dioxus::logger::initialize_default();

    let config = api::BackendConfig::from_env()
        .expect("PLAYROOM_BACKEND_URL must be set to the backend deployment URL");
    tracing::info!(url = config.url(), "starting mobile client");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<api::BackendConfig>();

    rsx! {
        ui::BackendProvider {
            config,
            ui::PreferencesProvider {
                Router::<Route> {}
            }
        }
    }
}
