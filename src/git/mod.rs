//! Git plumbing shared by the bootstrap steps.
//!
//! Uses `std::process::Command` to call the git CLI (no git2 dependency).
//! All functions take a repository path and return `Result<T, RepokitError>`.

pub mod submodule;

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{RepokitError, Result};

/// Run a git command in `repo_path`, returning stdout on success.
pub(crate) fn run_git(repo_path: &Path, args: &[&str]) -> Result<String> {
    debug!(repo = %repo_path.display(), ?args, "running git");

    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(|e| RepokitError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RepokitError::Git(format!(
            "git {} failed: {}",
            args.first().unwrap_or(&""),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Verify that `repo_path` is inside a git repository.
pub fn ensure_git_repo(repo_path: &Path) -> Result<()> {
    run_git(repo_path, &["rev-parse", "--git-dir"])
        .map_err(|_| RepokitError::NotARepo(repo_path.to_path_buf()))?;
    Ok(())
}

/// Resolve the hooks directory for `repo_path`.
///
/// Asks git for the actual `--git-dir` so linked worktrees and `GIT_DIR`
/// overrides resolve to the right place, then appends `hooks`. The directory
/// is not created if absent.
pub fn git_hooks_dir(repo_path: &Path) -> Result<PathBuf> {
    let out = run_git(repo_path, &["rev-parse", "--git-dir"])?;
    let git_dir = PathBuf::from(out.trim());
    let git_dir = if git_dir.is_absolute() {
        git_dir
    } else {
        repo_path.join(git_dir)
    };
    Ok(git_dir.join("hooks"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
