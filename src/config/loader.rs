//! Multi-source config loading with priority merging.
//!
//! Priority order (highest wins):
//!   CLI flags > Environment vars > Project config > Defaults
//!
//! Missing or unparseable files fall through to the lower layers.

use std::env;
use std::path::Path;

use tracing::debug;

use super::schema::{ConfigOverlay, RepokitConfig};
use crate::error::Result;

/// Name of the project config file, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = ".repokit.yaml";

/// Values supplied on the command line, applied as the highest layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub hooks_dir: Option<String>,
    pub no_submodules: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from all available sources and merge them.
///
/// Sources (low → high priority):
///   1. Built-in defaults
///   2. Project config (`.repokit.yaml` in `project_dir`)
///   3. Environment variables (`REPOKIT_HOOKS_DIR`, `REPOKIT_NO_SUBMODULES`)
///   4. CLI flags
pub fn load_config(project_dir: &Path, cli: &CliOverrides) -> RepokitConfig {
    let mut config = RepokitConfig::default();

    if let Some(project) = load_project_config(project_dir) {
        config.apply(project);
    }

    config.apply(env_overlay());

    if let Some(hooks_dir) = &cli.hooks_dir {
        config.hooks_dir = hooks_dir.clone();
    }
    if cli.no_submodules {
        config.submodules = false;
    }

    debug!(?config, "resolved configuration");
    config
}

/// Load the project config from `.repokit.yaml` in the given directory.
///
/// Returns `None` if the file does not exist or is unparseable.
pub fn load_project_config(dir: &Path) -> Option<ConfigOverlay> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    let contents = std::fs::read_to_string(&path).ok()?;
    match parse_overlay(&contents) {
        Ok(overlay) => Some(overlay),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unparseable config");
            None
        }
    }
}

/// Parse a YAML config overlay, surfacing syntax errors to the caller.
pub fn parse_overlay(contents: &str) -> Result<ConfigOverlay> {
    Ok(serde_yaml::from_str(contents)?)
}

// ---------------------------------------------------------------------------
// Environment layer
// ---------------------------------------------------------------------------

/// Build an overlay from environment variables.
///
/// Supported variables:
/// - `REPOKIT_HOOKS_DIR` — override the hooks source directory
/// - `REPOKIT_NO_SUBMODULES` — set to `"1"` or `"true"` to skip submodules
fn env_overlay() -> ConfigOverlay {
    overlay_from(|key| env::var(key).ok())
}

/// The env layer over an arbitrary variable lookup, so tests don't have to
/// mutate the process environment.
fn overlay_from(get: impl Fn(&str) -> Option<String>) -> ConfigOverlay {
    let mut overlay = ConfigOverlay::default();

    if let Some(dir) = get("REPOKIT_HOOKS_DIR") {
        if !dir.trim().is_empty() {
            overlay.hooks_dir = Some(dir);
        }
    }

    if let Some(flag) = get("REPOKIT_NO_SUBMODULES") {
        if matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes") {
            overlay.submodules = Some(false);
        }
    }

    overlay
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
