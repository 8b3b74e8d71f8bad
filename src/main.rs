//! Verb Router (v1)
//!
//! Command-line bootstrap for the request router.
//!
//! # Architecture Overview
//!
//! ```text
//!   (METHOD, URI)
//!   ─────────────▶ ┌────────────┐    ┌──────────────┐    ┌──────────────┐
//!                  │ entrypoint │───▶│    Router    │───▶│   dispatch   │
//!                  │ request id │    │  (singleton) │    │ exact lookup │
//!                  └─────┬──────┘    └──────┬───────┘    └──────┬───────┘
//!                        │                  │ startup           │
//!                        │                  ▼                   ▼
//!                        │           ┌──────────────┐    ┌──────────────┐
//!   status + body        │           │   scanner    │    │  controller  │
//!   ◀────────────────────┘           │ route tables │    │   method     │
//!                                    └──────────────┘    └──────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use verb_router::config::{load_config, AppConfig};
use verb_router::controllers::User;
use verb_router::http::handle_request;
use verb_router::observability::logging;
use verb_router::Router;

#[derive(Parser)]
#[command(name = "verb-router")]
#[command(about = "Resolve requests against annotated controller routes", long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one request and print the response body
    Resolve {
        /// Request method (case-insensitive)
        method: String,
        /// Request URI, `path[?query]`
        uri: String,
    },
    /// List registered routes
    Routes,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    logging::init(&config.log)?;

    tracing::info!(
        format = ?config.log.format,
        diagnostics = config.entrypoint.diagnostics,
        "Configuration loaded"
    );

    let router = Router::instance().register::<User>()?;

    match cli.command {
        Commands::Resolve { method, uri } => {
            let response = handle_request(router, &config.entrypoint, &method, &uri);
            println!("{}", response.body);
            if response.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Routes => {
            for (method, path, handler) in router.routes().entries() {
                println!("{method:<7} {path:<32} {handler}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
