//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → logging init + request entrypoint
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file uses `AppConfig::default()`
//! - Validation separates syntactic (serde) from semantic checks
//! - Routes are declared in code, not in config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, EntrypointConfig, LogConfig, LogFormat};
