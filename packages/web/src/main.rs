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

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();

    // Baked in at build time on the web; there is no runtime environment.
    let config = api::BackendConfig::from_env()
        .expect("PLAYROOM_BACKEND_URL must be set when building the web client");
    tracing::info!(url = config.url(), "starting web client");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<api::BackendConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::BackendProvider {
            config,
            ui::PreferencesProvider {
                Router::<Route> {}
            }
        }
    }
}
