//! Typed references to backend functions.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Whether a function only reads (query) or may write (mutation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Query,
    Mutation,
}

impl FunctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A backend function identified by its `"module:function"` path.
///
/// `Args` is what the function accepts, `Output` what it returns. Both only
/// exist at the type level; the reference itself is a kind plus a path.
pub struct FunctionReference<Args, Output> {
    kind: FunctionKind,
    path: &'static str,
    _marker: PhantomData<fn(Args) -> Output>,
}

impl<Args, Output> FunctionReference<Args, Output> {
    pub const fn query(path: &'static str) -> Self {
        Self {
            kind: FunctionKind::Query,
            path,
            _marker: PhantomData,
        }
    }

    pub const fn mutation(path: &'static str) -> Self {
        Self {
            kind: FunctionKind::Mutation,
            path,
            _marker: PhantomData,
        }
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl<Args, Output> Clone for FunctionReference<Args, Output> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Args, Output> Copy for FunctionReference<Args, Output> {}

impl<Args, Output> PartialEq for FunctionReference<Args, Output> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.path == other.path
    }
}

impl<Args, Output> fmt::Debug for FunctionReference<Args, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.as_str(), self.path)
    }
}

/// Argument type for functions that take nothing. Encodes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoArgs {}

/// One call as it crosses the backend boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub path: String,
    pub args: Value,
}

impl FunctionCall {
    /// Encode `args` for `path`. Missing args become an empty object.
    pub fn new<A: Serialize>(path: &str, args: Option<&A>) -> Result<Self, ApiError> {
        let args = match args {
            Some(args) => serde_json::to_value(args)
                .map_err(|e| ApiError::decode(format!("{path}: cannot encode args: {e}")))?,
            None => Value::Object(Map::new()),
        };
        Ok(Self {
            path: path.to_string(),
            args,
        })
    }
}
