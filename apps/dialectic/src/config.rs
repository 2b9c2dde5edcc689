//! # Configuration
//!
//! Optional TOML file with the settings shared by the CLI and the server.
//!
//! ```toml
//! backend = "redb"          # or "memory"
//! database = "dialectic.db"
//! corpus_dir = "./corpus"   # <module>/<export>.json|.ir files
//! host = "127.0.0.1"
//! port = 8080
//! log_format = "json"       # or "text"
//! ```
//!
//! Every field is optional. Command-line flags win over the file, the file
//! wins over the built-in defaults. Server security settings (API key, CORS,
//! rate limit) stay in the environment.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "dialectic.toml";

pub const DEFAULT_DATABASE: &str = "dialectic.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable selecting the log format; wins over the file.
pub const LOG_FORMAT_ENV: &str = "DIALECTIC_LOG_FORMAT";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

// =============================================================================
// VALUES
// =============================================================================

/// Where aspects are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Process-local map, lost on exit.
    Memory,
    /// redb database file.
    #[default]
    Redb,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Redb => f.write_str("redb"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` selects JSON; anything else is text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub backend: Option<BackendKind>,
    pub database: Option<PathBuf>,
    /// Root of a directory resolver consulted after the bundled corpus.
    pub corpus_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_format: Option<LogFormat>,
}

impl AppConfig {
    /// Parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Load `explicit` when given, else [`DEFAULT_CONFIG_FILE`] when it exists,
    /// else the defaults. An explicit path that cannot be read is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Field-wise merge: values set in `overrides` win.
    #[must_use]
    pub fn merged(self, overrides: AppConfig) -> Self {
        Self {
            backend: overrides.backend.or(self.backend),
            database: overrides.database.or(self.database),
            corpus_dir: overrides.corpus_dir.or(self.corpus_dir),
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            log_format: overrides.log_format.or(self.log_format),
        }
    }

    #[must_use]
    pub fn backend(&self) -> BackendKind {
        self.backend.unwrap_or_default()
    }

    #[must_use]
    pub fn database(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// `DIALECTIC_LOG_FORMAT` when set, else the file value, else text.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .map(|v| LogFormat::parse(&v))
            .or(self.log_format)
            .unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn full_file_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            backend = "memory"
            database = "/tmp/x.db"
            corpus_dir = "corpus"
            host = "0.0.0.0"
            port = 9000
            log_format = "json"
            "#,
        )
        .expect("parse");

        assert_eq!(config.backend(), BackendKind::Memory);
        assert_eq!(config.database(), PathBuf::from("/tmp/x.db"));
        assert_eq!(config.corpus_dir, Some(PathBuf::from("corpus")));
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend(), BackendKind::Redb);
        assert_eq!(config.database(), PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[test]
    fn unknown_keys_and_backends_are_rejected() {
        assert!(toml::from_str::<AppConfig>("colour = \"red\"").is_err());
        assert!(toml::from_str::<AppConfig>("backend = \"sqlite\"").is_err());
    }

    #[test]
    fn overrides_win_field_by_field() {
        let file = AppConfig {
            backend: Some(BackendKind::Redb),
            port: Some(9000),
            host: Some("0.0.0.0".to_string()),
            ..AppConfig::default()
        };
        let flags = AppConfig {
            backend: Some(BackendKind::Memory),
            ..AppConfig::default()
        };

        let merged = file.merged(flags);
        assert_eq!(merged.backend(), BackendKind::Memory);
        assert_eq!(merged.port(), 9000);
        assert_eq!(merged.host(), "0.0.0.0");
    }

    #[test]
    fn load_reports_path_on_failure() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = dir.path().join("missing.toml");
        let err = AppConfig::load(&missing).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), missing.as_path());

        let broken = dir.path().join("broken.toml");
        let mut file = std::fs::File::create(&broken).expect("create");
        file.write_all(b"port = [").expect("write");
        let err = AppConfig::load(&broken).expect_err("invalid toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dialectic.toml");
        std::fs::write(&path, "backend = \"memory\"\nport = 7000\n").expect("write");

        let config = AppConfig::discover(Some(&path)).expect("discover");
        assert_eq!(config.backend(), BackendKind::Memory);
        assert_eq!(config.port(), 7000);
    }

    #[test]
    fn log_format_parse_is_lenient() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }
}
