//! Request resolution and handler dispatch.
//!
//! # Data Flow
//! ```text
//! (method string, URI)
//!     → split at first `?` (path, QueryParams)
//!     → parse verb (UnsupportedMethod on failure)
//!     → exact table lookup (RouteNotFound on miss)
//!     → invoke closure, or instantiate controller and call method
//! ```
//!
//! # Design Decisions
//! - Pure function of the table and the request; no router state involved
//! - A missing controller method is reported as RouteNotFound, same as a miss

use serde_json::Value;

use crate::routing::error::{RouterError, RouterResult};
use crate::routing::handler::{Handler, HandlerResult};
use crate::routing::method::HttpMethod;
use crate::routing::query::{split_uri, QueryParams};
use crate::routing::registry::RouteTable;

/// Resolve `(method, uri)` against `table` and run the matching handler.
pub fn dispatch(table: &RouteTable, method: &str, uri: &str) -> RouterResult<Value> {
    let (path, params) = split_uri(uri);
    let verb: HttpMethod = method.parse()?;

    let not_found = || RouterError::RouteNotFound {
        method: verb.to_string(),
        path: path.to_string(),
    };

    let handler = table.lookup(verb, path).ok_or_else(not_found)?;
    tracing::debug!(method = %verb, path, handler = %handler, "Route matched");

    invoke(handler, &params)
        .ok_or_else(not_found)?
        .map_err(RouterError::Handler)
}

/// Run a handler. `None` means the referenced controller method does not exist.
fn invoke(handler: &Handler, params: &QueryParams) -> Option<HandlerResult> {
    match handler {
        Handler::Func(f) => Some(f(params)),
        Handler::Method { controller, method } => {
            let mut instance = controller.instantiate();
            let result = instance.invoke(method, params);
            if result.is_none() {
                tracing::error!(
                    controller = controller.name(),
                    method = %method,
                    "Route points at a method the controller does not have"
                );
            }
            result
        }
    }
}
