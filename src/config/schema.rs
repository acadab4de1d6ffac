//! Configuration data structures for repokit.
//!
//! Defines the YAML config format. Designed for multi-source loading with
//! serde: a file or environment layer deserializes into a partial
//! [`ConfigOverlay`] and is merged onto the resolved [`RepokitConfig`].

use serde::{Deserialize, Serialize};

/// Default hooks source directory, relative to the project root.
pub const DEFAULT_HOOKS_DIR: &str = "extras/git/hooks";

// ---------------------------------------------------------------------------
// Resolved config
// ---------------------------------------------------------------------------

/// Fully resolved configuration, after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepokitConfig {
    /// Hooks source directory, relative to the project root (or absolute).
    pub hooks_dir: String,

    /// Whether `init` updates submodules at all.
    pub submodules: bool,

    /// Whether the submodule update recurses into nested submodules.
    pub recursive: bool,
}

impl Default for RepokitConfig {
    fn default() -> Self {
        Self {
            hooks_dir: DEFAULT_HOOKS_DIR.to_string(),
            submodules: true,
            recursive: true,
        }
    }
}

impl RepokitConfig {
    /// Apply a partial overlay on top of this config.
    pub fn apply(&mut self, overlay: ConfigOverlay) {
        if let Some(hooks_dir) = overlay.hooks_dir {
            self.hooks_dir = hooks_dir;
        }
        if let Some(submodules) = overlay.submodules {
            self.submodules = submodules;
        }
        if let Some(recursive) = overlay.recursive {
            self.recursive = recursive;
        }
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// A partial config, as read from `.repokit.yaml` or built from environment
/// variables. Absent fields leave the lower layer's value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub hooks_dir: Option<String>,

    #[serde(default)]
    pub submodules: Option<bool>,

    #[serde(default)]
    pub recursive: Option<bool>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
