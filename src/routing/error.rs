//! Routing error definitions.

use thiserror::Error;

use crate::routing::handler::HandlerError;

/// A single malformed route declaration on a controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// A generic `route` declaration named a verb outside the supported set.
    #[error("method `{method}` declares unknown verb `{verb}`")]
    UnknownVerb { method: String, verb: String },

    /// The declared path can never match a request path.
    #[error("method `{method}` declares malformed path `{path}`: {reason}")]
    MalformedPath {
        method: String,
        path: String,
        reason: &'static str,
    },
}

/// Errors produced while registering or resolving routes.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Route metadata on a controller could not be read.
    #[error("route discovery failed on `{controller}`: {source}")]
    Discovery {
        controller: &'static str,
        #[source]
        source: DiscoveryError,
    },

    /// The request verb is not one of the supported five.
    #[error("unsupported request method `{0}`")]
    UnsupportedMethod(String),

    /// Nothing registered for this method and path, or the target is unreachable.
    #[error("no route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// The matched handler returned an error.
    #[error("handler failed: {0}")]
    Handler(#[source] HandlerError),
}

impl RouterError {
    /// True for the routine "no such route" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouterError::RouteNotFound { .. })
    }

    /// Short stable name of the error kind, used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RouterError::Discovery { .. } => "discovery",
            RouterError::UnsupportedMethod(_) => "unsupported_method",
            RouterError::RouteNotFound { .. } => "route_not_found",
            RouterError::Handler(_) => "handler",
        }
    }
}

/// Result type for routing operations.
pub type RouterResult<T> = Result<T, RouterError>;
