//! # dialectic
//!
//! Command engine for aspects of a dialectical state graph.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                apps/dialectic (THE BINARY)             │
//! │                                                        │
//! │   ┌─────────────┐   ┌─────────────┐   ┌────────────┐   │
//! │   │    CLI      │   │  HTTP API   │   │   config   │   │
//! │   │   (clap)    │   │   (axum)    │   │   (toml)   │   │
//! │   └──────┬──────┘   └──────┬──────┘   └─────┬──────┘   │
//! │          └─────────────────┼────────────────┘          │
//! │                            ▼                           │
//! │                  ┌──────────────────┐                  │
//! │                  │  dialectic-core  │                  │
//! │                  │ registry, engine │                  │
//! │                  └──────────────────┘                  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! dialectic server --host 0.0.0.0 --port 8080
//! dialectic registry list
//! dialectic evaluate '@relative/being/quality/being/becoming-ir#becomingIR' becoming-1
//! dialectic aspect create --type system.Aspect --name "First"
//! ```

use clap::Parser;
use dialectic::cli;
use dialectic::config::{AppConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // The config file may choose the log format, so it is read before tracing
    // starts; a failure is reported once tracing is up.
    let config = AppConfig::discover(cli.config.as_deref());
    let log_format = config
        .as_ref()
        .map(AppConfig::log_format)
        .unwrap_or_else(|_| AppConfig::default().log_format());
    init_tracing(log_format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing; `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dialectic=info,dialectic_core=info,tower_http=debug".into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
