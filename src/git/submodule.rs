//! Submodule initialization — wraps `git submodule update --init`.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::run_git;
use crate::error::Result;

// ── Data types ──────────────────────────────────────────────────────────

/// Checkout state of a submodule, from the one-character prefix of
/// `git submodule status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmoduleState {
    /// Checked out at the recorded commit.
    Current,
    /// Registered but not initialized (`-`).
    Uninitialized,
    /// Checked out at a different commit (`+`).
    OutOfSync,
    /// Has merge conflicts (`U`).
    Conflicted,
}

/// A single entry parsed from `git submodule status`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmoduleInfo {
    pub state: SubmoduleState,
    pub commit: String,
    pub path: String,
}

// ── Operations ──────────────────────────────────────────────────────────

/// Fetch and check out every submodule recorded in `.gitmodules`.
///
/// Runs `git submodule update --init` (plus `--recursive` when asked) in
/// `repo_root`. A repository without submodules is a successful no-op.
pub fn update_submodules(repo_root: &Path, recursive: bool) -> Result<()> {
    let mut args = vec!["submodule", "update", "--init"];
    if recursive {
        args.push("--recursive");
    }

    run_git(repo_root, &args)?;
    debug!(repo = %repo_root.display(), recursive, "submodules updated");
    Ok(())
}

/// Parse `git submodule status` into structured entries.
///
/// Returns an empty list when the repository has no submodules.
pub fn submodule_status(repo_root: &Path) -> Result<Vec<SubmoduleInfo>> {
    let out = run_git(repo_root, &["submodule", "status"])?;
    Ok(out.lines().filter_map(parse_status_line).collect())
}

/// Parse one status line: a state prefix character, the commit hash, the
/// submodule path, and an optional ref in parentheses (ignored).
fn parse_status_line(line: &str) -> Option<SubmoduleInfo> {
    let mut chars = line.chars();
    let state = match chars.next()? {
        ' ' => SubmoduleState::Current,
        '-' => SubmoduleState::Uninitialized,
        '+' => SubmoduleState::OutOfSync,
        'U' => SubmoduleState::Conflicted,
        _ => return None,
    };

    let mut fields = chars.as_str().split_whitespace();
    let commit = fields.next()?.to_string();
    let path = fields.next()?.to_string();

    Some(SubmoduleInfo {
        state,
        commit,
        path,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::tests::init_repo;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use test_case::test_case;

    // -- parse_status_line --------------------------------------------------

    #[test_case(' ', SubmoduleState::Current ; "space is current")]
    #[test_case('-', SubmoduleState::Uninitialized ; "dash is uninitialized")]
    #[test_case('+', SubmoduleState::OutOfSync ; "plus is out of sync")]
    #[test_case('U', SubmoduleState::Conflicted ; "u is conflicted")]
    fn status_prefix_maps_to_state(prefix: char, expected: SubmoduleState) {
        let line = format!("{prefix}4d0bd7dcf2b04b8dc2f1b60a4f0b0e1b2c3d4e5f vendor/glfw (v3.4)");
        let info = parse_status_line(&line).unwrap();
        assert_eq!(info.state, expected);
        assert_eq!(info.commit, "4d0bd7dcf2b04b8dc2f1b60a4f0b0e1b2c3d4e5f");
        assert_eq!(info.path, "vendor/glfw");
    }

    #[test]
    fn status_line_without_ref_suffix_parses() {
        let info = parse_status_line("-abc123 vendor/imgui").unwrap();
        assert_eq!(info.state, SubmoduleState::Uninitialized);
        assert_eq!(info.path, "vendor/imgui");
    }

    #[test]
    fn unknown_prefix_is_skipped() {
        assert!(parse_status_line("?abc123 vendor/imgui").is_none());
    }

    #[test]
    fn empty_line_is_skipped() {
        assert!(parse_status_line("").is_none());
    }

    // -- against a real repository ------------------------------------------

    #[test]
    fn update_is_noop_without_submodules() {
        let tmp = TempDir::new().unwrap();
        init_repo(&tmp);

        update_submodules(tmp.path(), true).unwrap();
        update_submodules(tmp.path(), false).unwrap();
    }

    #[test]
    fn status_is_empty_without_submodules() {
        let tmp = TempDir::new().unwrap();
        init_repo(&tmp);

        let status = submodule_status(tmp.path()).unwrap();
        assert!(status.is_empty());
    }

    #[test]
    fn update_fails_outside_a_repository() {
        let tmp = TempDir::new().unwrap();
        assert!(update_submodules(tmp.path(), true).is_err());
    }
}
