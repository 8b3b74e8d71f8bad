//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     controller types
//!     → scanner.rs (describe_routes + validation)
//!     → router.rs (commit batch into a new table)
//!     → registry.rs (method → path → handler)
//!
//! Incoming Request (method, URI):
//!     → router.rs (load table snapshot)
//!     → dispatch.rs (split URI, parse verb, exact lookup)
//!     → handler.rs (closure call, or fresh controller instance + method call)
//!     → Return: handler value, or RouteNotFound / UnsupportedMethod
//! ```
//!
//! # Design Decisions
//! - Exact path matching only; no patterns, no trailing-slash tolerance
//! - Last registration for a (method, path) wins
//! - Register once at startup, resolve many times; resolution never locks

pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod macros;
pub mod method;
pub mod query;
pub mod registry;
pub mod router;
pub mod scanner;

pub use descriptor::{MethodRoute, RouteDescriptor};
pub use error::{DiscoveryError, RouterError, RouterResult};
pub use handler::{Controller, ControllerType, Handler, HandlerError, HandlerFn, HandlerResult};
pub use method::HttpMethod;
pub use query::QueryParams;
pub use registry::RouteTable;
pub use router::Router;
