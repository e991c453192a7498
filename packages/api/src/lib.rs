//! # API crate — typed access to the game backend
//!
//! Every read and write the web and mobile frontends make against the hosted
//! backend goes through this crate. It does not know what the functions do; it
//! only keeps their path and argument shape intact on the way out and decodes
//! the result on the way back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend URL from `PLAYROOM_BACKEND_URL` (`.env` honoured), validated non-blank |
//! | [`function`] | [`FunctionReference`]: kind + `"module:function"` path, typed by args and output |
//! | [`transport`] | [`Transport`] seam and the `reqwest`-based [`HttpTransport`] |
//! | [`client`] | [`BackendClient`] and the first-wins [`ClientCell`] |
//! | [`functions`] | The functions this client calls |
//! | [`models`] | Backend documents mirrored read-only (`User`) |
//!
//! ## Facade
//!
//! [`query`] and [`mutation`] take the composition root's [`ClientCell`]. Using
//! them before the cell is initialized fails with [`ApiError::NotInitialized`];
//! every other failure comes back exactly as the client produced it.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod client;
pub mod config;
pub mod error;
pub mod function;
pub mod functions;
pub mod models;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{BackendClient, ClientCell};
pub use config::{BackendConfig, BACKEND_URL_VAR};
pub use error::ApiError;
pub use function::{FunctionCall, FunctionKind, FunctionReference, NoArgs};
pub use models::{AvatarChoice, User};
pub use transport::{HttpTransport, Transport};

/// Run a query through the initialized client in `cell`.
pub async fn query<T, A, O>(
    cell: &ClientCell<T>,
    reference: FunctionReference<A, O>,
    args: Option<&A>,
) -> Result<O, ApiError>
where
    T: Transport,
    A: Serialize,
    O: DeserializeOwned,
{
    cell.client()?.query(reference, args).await
}

/// Run a mutation through the initialized client in `cell`.
pub async fn mutation<T, A, O>(
    cell: &ClientCell<T>,
    reference: FunctionReference<A, O>,
    args: Option<&A>,
) -> Result<O, ApiError>
where
    T: Transport,
    A: Serialize,
    O: DeserializeOwned,
{
    cell.client()?.mutation(reference, args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::users;
    use crate::testing::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_before_init_is_config_error() {
        let cell: ClientCell<RecordingTransport> = ClientCell::new();

        let err = query(&cell, users::VIEWER, None).await.unwrap_err();

        assert_eq!(err, ApiError::NotInitialized);
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_mutation_before_init_is_config_error() {
        let cell: ClientCell<RecordingTransport> = ClientCell::new();
        let args = users::SelectAvatarArgs {
            avatar_id: "a1".to_string(),
        };

        let err = mutation(&cell, users::SELECT_AVATAR, Some(&args))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::NotInitialized);
    }

    #[tokio::test]
    async fn test_viewer_query() {
        let transport = RecordingTransport::replying(Ok(json!({"_id": "u1", "name": "Ada"})));
        let cell = ClientCell::new();
        cell.init_with("https://backend.test", |_| transport.clone())
            .unwrap();

        let user = query(&cell, users::VIEWER, None).await.unwrap().unwrap();

        assert_eq!(user.display_name(), "Ada");
        assert_eq!(transport.calls()[0].1.path, "users:viewer");
    }

    #[tokio::test]
    async fn test_signed_out_viewer_is_none() {
        let cell = ClientCell::new();
        cell.init_with("https://backend.test", |_| {
            RecordingTransport::replying(Ok(json!(null)))
        })
        .unwrap();

        assert_eq!(query(&cell, users::VIEWER, None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_select_avatar_args_shape() {
        let transport = RecordingTransport::default();
        let cell = ClientCell::new();
        cell.init_with("https://backend.test", |_| transport.clone())
            .unwrap();
        let args = users::SelectAvatarArgs {
            avatar_id: "a2".to_string(),
        };

        mutation(&cell, users::SELECT_AVATAR, Some(&args))
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, FunctionKind::Mutation);
        assert_eq!(calls[0].1.path, "users:selectAvatar");
        assert_eq!(calls[0].1.args, json!({"avatarId": "a2"}));
    }

    #[tokio::test]
    async fn test_second_init_keeps_first_transport() {
        let first = RecordingTransport::default();
        let second = RecordingTransport::default();
        let cell = ClientCell::new();
        cell.init_with("https://first.test", |_| first.clone())
            .unwrap();
        cell.init_with("https://second.test", |_| second.clone())
            .unwrap();

        query(&cell, users::VIEWER, None).await.unwrap();

        assert_eq!(first.calls().len(), 1);
        assert!(second.calls().is_empty());
    }
}
