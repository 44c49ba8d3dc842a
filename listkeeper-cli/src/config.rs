//! Config file handling
//!
//! Optional TOML file at `~/.listkeeper/config.toml` (or `$LISTKEEPER_CONFIG`).
//! Command-line flags and environment variables override file values; file
//! values override built-in defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listkeeper_server::ServerConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListkeeperConfig {
    pub server: ServerSection,
}

/// `[server]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
    pub session_ttl_secs: u64,
    pub cookie_secure: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: defaults.bind_addr,
            cors_permissive: defaults.cors_permissive,
            session_ttl_secs: defaults.session_ttl.as_secs(),
            cookie_secure: defaults.cookie_secure,
        }
    }
}

impl ListkeeperConfig {
    /// Default config file path: `$LISTKEEPER_CONFIG` or ~/.listkeeper/config.toml
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LISTKEEPER_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".listkeeper/config.toml")
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            cors_permissive: self.server.cors_permissive,
            session_ttl: Duration::from_secs(self.server.session_ttl_secs),
            cookie_secure: self.server.cookie_secure,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, path: &Path) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = ListkeeperConfig::load(path)?;
            let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
            print!("{}", rendered);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ListkeeperConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, ListkeeperConfig::default());
        assert_eq!(config.server.bind.port(), 4567);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:8080\"\nsession_ttl_secs = 600").unwrap();

        let config = ListkeeperConfig::load(file.path()).unwrap();
        let server = config.server_config();
        assert_eq!(server.bind_addr.port(), 8080);
        assert_eq!(server.session_ttl, Duration::from_secs(600));
        assert!(!server.cors_permissive);
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 80").unwrap();
        assert!(ListkeeperConfig::load(file.path()).is_err());
    }
}
