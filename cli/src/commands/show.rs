//! Configuration display command

use anyhow::Result;
use tracing::debug;

use crate::config::ConfigLoader;

/// Render the effective configuration to stdout
pub async fn show_command(config_loader: ConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!("Using provider: {}", config.provider);
    debug!("Using model: {}", config.model);

    println!("PersistenceAI Config: {:?}", config);

    Ok(())
}
