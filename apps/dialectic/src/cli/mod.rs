//! # Dialectic CLI Module
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `registry list|show|keys` - Inspect the IR registry
//! - `load` - Print one IR aggregate
//! - `check` - Content integrity and state graph consistency
//! - `evaluate` - Run the evaluation command for one state
//! - `aspect ...` - Aspect commands (create, describe, delete, set-core, set-state, patch-state)
//! - `command` - Send a raw `{kind, payload, meta}` envelope
//! - `export` - Write an IR snapshot to a file
//! - `events` - Command kinds and the events they emit

mod commands;

use crate::config::{AppConfig, BackendKind};
use clap::{Parser, Subcommand};
use dialectic_core::DialecticError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Dialectic - aspect command engine over a dialectical state graph.
#[derive(Parser, Debug)]
#[command(name = "dialectic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML config file (default: ./dialectic.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the aspect database
    #[arg(short = 'D', long, global = true)]
    pub database: Option<PathBuf>,

    /// Aspect storage backend
    #[arg(short = 'B', long, global = true, value_enum)]
    pub backend: Option<BackendKind>,

    /// Directory of additional IR modules (<module>/<export>.json or .ir)
    #[arg(long, global = true)]
    pub corpus_dir: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Flags that override the config file.
    #[must_use]
    pub fn overrides(&self) -> AppConfig {
        AppConfig {
            backend: self.backend,
            database: self.database.clone(),
            corpus_dir: self.corpus_dir.clone(),
            ..AppConfig::default()
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Inspect the IR registry
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },

    /// Print the IR aggregate behind a registry key
    Load {
        /// Registry key (`module#export`)
        key: String,
    },

    /// Check content integrity and state graph consistency
    Check {
        /// Only check the aggregate behind this key
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show the projections of one state and where its transitions lead
    Inspect {
        /// Registry key (`module#export`)
        key: String,

        /// State id within the aggregate
        state_id: String,

        /// Transition depth of the walk
        #[arg(short, long, default_value_t = DEFAULT_WALK_DEPTH)]
        depth: usize,

        /// Also report the shortest transition path to this state
        #[arg(long)]
        to: Option<String>,
    },

    /// Show a bundled content chunk (one-based) and its logical operations
    Chunk { index: usize },

    /// Evaluate one state of an aggregate into an aspect
    Evaluate {
        /// Registry key (`module#export`)
        key: String,

        /// State id within the aggregate
        state_id: String,

        /// Evaluation context as a JSON object (e.g. '{"groundId": "..."}')
        #[arg(long)]
        context: Option<String>,
    },

    /// Aspect commands
    Aspect {
        #[command(subcommand)]
        action: AspectAction,
    },

    /// Send a raw command envelope
    Command {
        /// Envelope JSON: {"kind": ..., "payload": ..., "meta": ...}
        #[arg(required_unless_present = "file")]
        envelope: Option<String>,

        /// Read the envelope from a file instead
        #[arg(short, long, conflicts_with = "envelope")]
        file: Option<PathBuf>,
    },

    /// Export an aggregate as a binary snapshot
    Export {
        /// Registry key (`module#export`)
        key: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List command kinds and the events they emit
    Events,
}

#[derive(Subcommand, Debug)]
pub enum RegistryAction {
    /// List every registry entry
    List,
    /// Show one entry
    Show { key: String },
    /// Keys that carry a logical id
    Keys { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AspectAction {
    /// Create an aspect
    Create {
        /// Explicit id (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Aspect type
        #[arg(short = 't', long = "type")]
        kind: String,

        #[arg(short, long)]
        name: Option<String>,

        /// Initial state as a JSON object
        #[arg(long)]
        state: Option<String>,
    },
    /// Show an aspect summary
    Describe { id: String },
    /// Delete an aspect
    Delete { id: String },
    /// Change name and/or type
    SetCore {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Replace the state with a JSON object
    SetState { id: String, state: String },
    /// Merge a JSON object into the state
    PatchState { id: String, patch: String },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli, config: AppConfig) -> Result<(), DialecticError> {
    let config = config.merged(cli.overrides());
    let out = Output {
        json: cli.json_mode,
        verbose: cli.verbose,
    };

    match cli.command {
        Some(Commands::Server { host, port }) => {
            if !cli.quiet {
                print_banner();
            }
            let config = config.merged(AppConfig {
                host,
                port,
                ..AppConfig::default()
            });
            cmd_server(&config).await
        }
        Some(Commands::Registry { action }) => cmd_registry(&config, out, action),
        Some(Commands::Load { key }) => cmd_load(&config, &key),
        Some(Commands::Check { key }) => cmd_check(&config, out, key.as_deref()),
        Some(Commands::Inspect {
            key,
            state_id,
            depth,
            to,
        }) => cmd_inspect(&config, out, &key, &state_id, depth, to.as_deref()),
        Some(Commands::Chunk { index }) => cmd_chunk(out, index),
        Some(Commands::Evaluate {
            key,
            state_id,
            context,
        }) => cmd_evaluate(&config, out, &key, &state_id, context.as_deref()),
        Some(Commands::Aspect { action }) => cmd_aspect(&config, out, action),
        Some(Commands::Command { envelope, file }) => {
            cmd_command(&config, out, envelope.as_deref(), file.as_deref())
        }
        Some(Commands::Export { key, output }) => cmd_export(&config, out, &key, &output),
        Some(Commands::Events) => cmd_events(out),
        // No subcommand - list the registry by default
        None => cmd_registry(&config, out, RegistryAction::List),
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r"
  dialectic v{}

  being -> nothing -> becoming
",
        env!("CARGO_PKG_VERSION")
    );
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::parse_from(["dialectic", "-B", "memory", "--corpus-dir", "c", "events"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.backend, Some(BackendKind::Memory));
        assert_eq!(overrides.corpus_dir, Some(PathBuf::from("c")));
        assert!(overrides.database.is_none());
        assert!(matches!(cli.command, Some(Commands::Events)));
    }

    #[test]
    fn aspect_create_reads_type_flag() {
        let cli = Cli::parse_from([
            "dialectic", "aspect", "create", "--type", "system.Aspect", "--name", "First",
        ]);
        let Some(Commands::Aspect {
            action: AspectAction::Create { kind, name, id, .. },
        }) = cli.command
        else {
            unreachable!("parsed as aspect create");
        };
        assert_eq!(kind, "system.Aspect");
        assert_eq!(name.as_deref(), Some("First"));
        assert!(id.is_none());
    }

    #[test]
    fn command_needs_envelope_or_file() {
        assert!(Cli::try_parse_from(["dialectic", "command"]).is_err());
        assert!(Cli::try_parse_from(["dialectic", "command", "-f", "x.json"]).is_ok());
    }
}
