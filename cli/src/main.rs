//! # persistence-ai CLI
//!
//! Command-line interface for PersistenceAI.
//!
//! ## Usage
//!
//! - `persistence-ai` - Show the effective provider/model configuration
//! - `persistence-ai --provider openai` - Override the provider
//! - `persistence-ai agents` - Show the built-in agent definitions
//!
//! Configuration is discovered from flags, config files, and environment
//! variables, falling back to the built-in defaults, so a bare invocation
//! always succeeds.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{agents_command, show_command};
use config::ConfigLoader;

/// persistence-ai - show the PersistenceAI configuration
#[derive(Parser)]
#[command(name = "persistence-ai")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "PersistenceAI CLI - provider and model configuration for AI agents")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Provider override (anthropic, openai, google, or any custom name)
    #[arg(long)]
    provider: Option<String>,

    /// Model name override
    #[arg(long)]
    model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the built-in agent definitions
    Agents,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(provider) = &cli.provider {
        loader = loader.with_provider_override(provider.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    persistence_ai_core::init_tracing_with_verbosity(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Agents) => agents_command().await,
        None => show_command(config_loader).await,
    }
}
