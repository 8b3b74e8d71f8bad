//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + http entrypoint produce:
//!     → logging.rs (structured events via tracing)
//!     → metrics.rs (registration and resolution counters)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every event of a request
//! - Metrics are cheap counter increments through the `metrics` facade

pub mod logging;
pub mod metrics;
