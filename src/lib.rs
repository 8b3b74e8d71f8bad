//! Verb Router Library
//!
//! Resolves `(method, URI)` pairs to handlers declared on controller types.

pub mod config;
pub mod controllers;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::handle_request;
pub use routing::{Controller, ControllerType, Handler, HttpMethod, QueryParams, Router, RouterError};
