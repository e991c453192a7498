//! # Backend client and its first-wins initialization cell
//!
//! [`BackendClient`] can only be built from a validated [`BackendConfig`], so any
//! code holding one already satisfies "initialize before use". Composition roots
//! construct it and inject it into the UI tree.
//!
//! [`ClientCell`] is for code that has to hand out the client before the URL is
//! known. It is an explicit value, not a global: the composition root owns it and
//! passes clones around. The first successful [`ClientCell::init`] wins; later
//! calls, whatever URL they carry, return the client that is already there.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::function::{FunctionCall, FunctionKind, FunctionReference};
use crate::transport::{HttpTransport, Transport};

/// A connected handle to the backend.
#[derive(Debug)]
pub struct BackendClient<T = HttpTransport> {
    config: BackendConfig,
    transport: T,
}

impl BackendClient<HttpTransport> {
    /// Client talking HTTP to the configured deployment.
    pub fn connect(config: BackendConfig) -> Self {
        let transport = HttpTransport::new(config.clone());
        Self::with_transport(config, transport)
    }
}

impl<T> BackendClient<T> {
    pub fn with_transport(config: BackendConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        self.config.url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> BackendClient<T> {
    /// Run a read-only backend function.
    pub async fn query<A, O>(
        &self,
        reference: FunctionReference<A, O>,
        args: Option<&A>,
    ) -> Result<O, ApiError>
    where
        A: Serialize,
        O: DeserializeOwned,
    {
        self.dispatch(FunctionKind::Query, reference, args).await
    }

    /// Run a backend function that may write.
    pub async fn mutation<A, O>(
        &self,
        reference: FunctionReference<A, O>,
        args: Option<&A>,
    ) -> Result<O, ApiError>
    where
        A: Serialize,
        O: DeserializeOwned,
    {
        self.dispatch(FunctionKind::Mutation, reference, args).await
    }

    async fn dispatch<A, O>(
        &self,
        expected: FunctionKind,
        reference: FunctionReference<A, O>,
        args: Option<&A>,
    ) -> Result<O, ApiError>
    where
        A: Serialize,
        O: DeserializeOwned,
    {
        if reference.kind() != expected {
            return Err(ApiError::config(format!(
                "{} is a {}, not a {}",
                reference.path(),
                reference.kind().as_str(),
                expected.as_str()
            )));
        }

        let call = FunctionCall::new(reference.path(), args)?;
        debug!(kind = expected.as_str(), path = reference.path(), "forwarding backend call");

        let value = self.transport.call(expected, call).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::decode(format!("{}: {e}", reference.path())))
    }
}

/// Lazily initialized, shareable slot for a [`BackendClient`].
#[derive(Debug)]
pub struct ClientCell<T = HttpTransport> {
    inner: Arc<OnceCell<BackendClient<T>>>,
}

impl<T> ClientCell<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(OnceCell::new()),
        }
    }

    /// A cell that already holds `client`.
    pub fn from_client(client: BackendClient<T>) -> Self {
        Self {
            inner: Arc::new(OnceCell::new_with(Some(client))),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized()
    }

    /// The client, or [`ApiError::NotInitialized`] if nobody called `init` yet.
    pub fn client(&self) -> Result<&BackendClient<T>, ApiError> {
        self.inner.get().ok_or(ApiError::NotInitialized)
    }

    /// Initialize with `url`, building the transport with `make_transport`.
    ///
    /// If a client is already present it is returned and `url` is ignored.
    /// A blank `url` on an empty cell is a configuration error and leaves the
    /// cell empty.
    pub fn init_with<F>(&self, url: &str, make_transport: F) -> Result<&BackendClient<T>, ApiError>
    where
        F: FnOnce(&BackendConfig) -> T,
    {
        if let Some(existing) = self.inner.get() {
            if existing.url() != url.trim().trim_end_matches('/') {
                debug!(
                    retained = existing.url(),
                    ignored = url,
                    "backend client already initialized"
                );
            }
            return Ok(existing);
        }

        let config = BackendConfig::new(url)?;
        let transport = make_transport(&config);
        if self
            .inner
            .set(BackendClient::with_transport(config, transport))
            .is_ok()
        {
            info!(url = url.trim(), "backend client initialized");
        }
        // Either ours or the one that won the race.
        self.client()
    }
}

impl ClientCell<HttpTransport> {
    /// A cell holding an HTTP client for an already validated config.
    pub fn connect(config: BackendConfig) -> Self {
        Self::from_client(BackendClient::connect(config))
    }

    /// Initialize with an HTTP client for `url`. First call wins.
    pub fn init(&self, url: &str) -> Result<&BackendClient<HttpTransport>, ApiError> {
        self.init_with(url, |config| HttpTransport::new(config.clone()))
    }
}

impl<T> Default for ClientCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ClientCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Two cells are equal when they are the same slot.
impl<T> PartialEq for ClientCell<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
