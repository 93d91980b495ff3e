//! # PersistenceAI Core
//!
//! Core library for the PersistenceAI CLI.
//!
//! This library provides the configuration data types the CLI renders:
//! the effective provider/model pair and the built-in agent definitions.
//! All discovery and loading logic lives in the CLI layer.

// Core modules
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{default_agents, AgentConfig, Config, Provider};
pub use error::{ConfigError, Error, Result};

/// Current version of the persistence-ai-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
///
/// Diagnostics go to stderr; stdout is reserved for rendered output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific verbosity
pub fn init_tracing_with_verbosity(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
