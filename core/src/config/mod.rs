//! Minimal configuration module for PersistenceAI core
//!
//! Only exports pure data types. All loading logic is in the CLI layer.

pub mod agent;
pub mod types;

pub use agent::{default_agents, AgentConfig};
pub use types::{Config, Provider};
