//! HTTP server command
//!
//! Runs the todo list web server until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use listkeeper_server::{run_server, ServerConfig};

use crate::config::ListkeeperConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config; default 127.0.0.1:4567)
    #[arg(long, short = 'b', env = "LISTKEEPER_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Seconds of inactivity before a session and its lists are dropped
    #[arg(long, env = "LISTKEEPER_SESSION_TTL")]
    pub session_ttl_secs: Option<u64>,

    /// Only send the session cookie over HTTPS
    #[arg(long)]
    pub cookie_secure: bool,
}

impl ServeArgs {
    /// Apply command-line overrides on top of file settings
    pub fn merge(&self, file: &ListkeeperConfig) -> ServerConfig {
        let mut config = file.server_config();
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(secs) = self.session_ttl_secs {
            config.session_ttl = Duration::from_secs(secs);
        }
        config.cors_permissive |= self.cors_permissive;
        config.cookie_secure |= self.cookie_secure;
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: &Path) -> Result<()> {
    let file = ListkeeperConfig::load(config_path)?;
    let config = args.merge(&file);

    tracing::info!(
        bind = %config.bind_addr,
        session_ttl_secs = config.session_ttl.as_secs(),
        "Starting listkeeper server"
    );

    run_server(config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> ServeArgs {
        let mut argv = vec!["serve"];
        argv.extend_from_slice(extra);
        ServeArgs::parse_from(argv)
    }

    #[test]
    fn flags_override_file() {
        let mut file = ListkeeperConfig::default();
        file.server.session_ttl_secs = 60;

        let config = args(&["--bind", "0.0.0.0:9000", "--cookie-secure"]).merge(&file);
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.session_ttl, Duration::from_secs(60));
        assert!(config.cookie_secure);
    }

    #[test]
    fn file_values_survive_absent_flags() {
        let mut file = ListkeeperConfig::default();
        file.server.cors_permissive = true;

        let config = args(&["--session-ttl-secs", "5"]).merge(&file);
        assert!(config.cors_permissive);
        assert_eq!(config.session_ttl, Duration::from_secs(5));
    }
}
