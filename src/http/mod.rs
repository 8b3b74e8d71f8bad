//! Request boundary.
//!
//! # Data Flow
//! ```text
//! (method, URI) from the caller
//!     → entrypoint.rs (request ID, resolve via Router)
//!     → EntrypointResponse (status + body)
//! ```
//!
//! # Design Decisions
//! - Transport is the caller's business; this layer only maps outcomes
//! - Not-found and every other failure are handled differently

pub mod entrypoint;

pub use entrypoint::{handle_request, EntrypointResponse};
