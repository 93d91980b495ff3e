//! Agent listing command

use anyhow::Result;
use persistence_ai_core::default_agents;
use tracing::debug;

/// Show the built-in agent definitions
pub async fn agents_command() -> Result<()> {
    debug!("Listing built-in agents");

    println!("🤖 Built-in Agents\n");

    for agent in default_agents() {
        println!("📦 {}", agent.name);
        println!("   model: {}", agent.model);
        println!("   tools: {}\n", agent.tools.join(", "));
    }

    Ok(())
}
