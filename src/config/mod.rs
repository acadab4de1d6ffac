//! Configuration system — YAML project config, env overrides, CLI flags.

pub mod loader;
pub mod schema;

// Re-export the most commonly used items.
pub use loader::{load_config, load_project_config, CliOverrides};
pub use schema::{ConfigOverlay, RepokitConfig};
