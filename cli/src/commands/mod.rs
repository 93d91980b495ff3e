//! CLI command implementations

pub mod agents;
pub mod show;

pub use agents::agents_command;
pub use show::show_command;
