//! listkeeper - browser-based todo list manager
//!
//! Entry point for the `listkeeper` binary:
//! - `serve` runs the web server (session-scoped lists, no database)
//! - `config` inspects the optional config file

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "listkeeper",
    author,
    version,
    about = "Session-scoped todo lists served over HTTP"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.listkeeper/config.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the todo list web server
    Serve(commands::serve::ServeArgs),
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config_path = cli
        .config
        .unwrap_or_else(config::ListkeeperConfig::default_path);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, &config_path).await,
        Commands::Config(args) => config::run_config(args, &config_path),
    }
}
