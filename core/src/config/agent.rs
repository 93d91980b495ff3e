//! Agent definition structures

use serde::{Deserialize, Serialize};

/// A named agent preset shipped with the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent name (e.g. "build")
    pub name: String,

    /// Model the agent runs on, as "provider/model" (e.g. "anthropic/claude-sonnet-4")
    pub model: String,

    /// List of tools available to this agent
    pub tools: Vec<String>,
}

impl AgentConfig {
    /// Create a new agent definition
    pub fn new(name: impl Into<String>, model: impl Into<String>, tools: Vec<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            tools,
        }
    }
}

/// The agent presets built into the CLI
pub fn default_agents() -> Vec<AgentConfig> {
    vec![AgentConfig::new(
        "build",
        "anthropic/claude-sonnet-4",
        vec![
            "write".to_string(),
            "bash".to_string(),
            "read".to_string(),
        ],
    )]
}
