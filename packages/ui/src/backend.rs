//! Backend handle and reactive queries for the component tree.
//!
//! The composition root validates the backend config at startup and hands it to
//! [`BackendProvider`], which connects once and shares the handle as context.
//! Components never reach for a global client.

use api::{ApiError, BackendConfig, FunctionReference};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The backend handle shared through context.
pub type Backend = api::ClientCell;

/// Get the backend handle provided by [`BackendProvider`].
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

/// Provider component that connects to the backend once.
#[component]
pub fn BackendProvider(config: BackendConfig, children: Element) -> Element {
    use_context_provider(move || {
        tracing::info!(url = config.url(), "connecting to backend");
        Backend::connect(config)
    });

    rsx! { {children} }
}

/// Run a query and surface its result as a reactive value.
///
/// `args` is called each time the query runs; any signal it reads makes the
/// query run again with the new arguments when that signal changes. The
/// resource is `None` while the call is in flight. Errors are handed over
/// untouched; call `restart()` on the resource to fetch again.
pub fn use_query<A, O>(
    reference: FunctionReference<A, O>,
    mut args: impl FnMut() -> Option<A> + 'static,
) -> Resource<Result<O, ApiError>>
where
    A: Serialize + 'static,
    O: DeserializeOwned + 'static,
{
    let backend = use_backend();
    use_resource(move || {
        let backend = backend.clone();
        let args = args();
        async move { api::query(&backend, reference, args.as_ref()).await }
    })
}
