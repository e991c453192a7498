//! Backend configuration from the environment.

use crate::error::ApiError;
use crate::function::FunctionKind;

/// Environment variable holding the backend deployment URL.
pub const BACKEND_URL_VAR: &str = "PLAYROOM_BACKEND_URL";

/// Validated backend configuration.
///
/// Holding one proves the URL is non-blank; trailing slashes are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>) -> Result<Self, ApiError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ApiError::config(format!("{BACKEND_URL_VAR} must not be blank")));
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    /// Read the backend URL from the environment.
    ///
    /// Looks at the runtime environment (after loading `.env`), then at the value
    /// baked in at build time, which is the only source on the web.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let url = std::env::var(BACKEND_URL_VAR)
            .ok()
            .or_else(|| option_env!("PLAYROOM_BACKEND_URL").map(str::to_string))
            .ok_or_else(|| ApiError::config(format!("{BACKEND_URL_VAR} not set")))?;

        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP endpoint for one kind of function call.
    pub fn endpoint(&self, kind: FunctionKind) -> String {
        format!("{}/api/{}", self.url, kind.as_str())
    }
}
