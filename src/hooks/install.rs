//! Hook installation — copies tracked hook scripts into the git hooks
//! directory and marks them executable.
//!
//! The [`install_hooks`] function performs two passes:
//!
//! 1. **Copy** — Every entry of the source directory is copied into the
//!    hooks directory under the same filename, overwriting any existing
//!    file of that name. Non-recursive.
//! 2. **Permissions** — Every entry then present in the hooks directory is
//!    set to mode `0o755`.
//!
//! Both directories must already exist. The hooks directory is never created
//! here; a missing one means the caller is not pointing at a real git dir,
//! and the install fails before any file is copied.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::debug;

use crate::error::{RepokitError, Result};

/// Mode applied to every installed hook: owner rwx, group and other rx.
const HOOK_MODE: u32 = 0o755;

/// Outcome of a hook installation, for summary reporting.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Filenames copied from the source directory, in sorted order.
    pub installed: Vec<String>,
    /// Number of hooks-directory entries marked executable.
    pub marked_executable: usize,
}

/// Copy every file from `source_dir` into `hooks_dir`, then mark everything
/// in `hooks_dir` executable.
///
/// Running it twice produces identical contents and permissions.
pub fn install_hooks(source_dir: &Path, hooks_dir: &Path) -> Result<InstallReport> {
    if !source_dir.is_dir() {
        return Err(RepokitError::MissingSourceDir(source_dir.to_path_buf()));
    }
    if !hooks_dir.is_dir() {
        return Err(RepokitError::MissingHooksDir(hooks_dir.to_path_buf()));
    }

    let mut report = InstallReport::default();

    let mut entries = fs::read_dir(source_dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in &entries {
        let target = hooks_dir.join(entry.file_name());
        fs::copy(entry.path(), &target)?;
        debug!(hook = %target.display(), "installed hook");
        report
            .installed
            .push(entry.file_name().to_string_lossy().into_owned());
    }

    // Everything now in the hooks directory gets the executable bit, not
    // just the files copied above.
    for entry in fs::read_dir(hooks_dir)? {
        let entry = entry?;
        fs::set_permissions(entry.path(), fs::Permissions::from_mode(HOOK_MODE))?;
        report.marked_executable += 1;
    }

    eprintln!("[repokit] Git hooks installed in {}", hooks_dir.display());
    Ok(report)
}

/// Remove from `hooks_dir` each filename that exists in `source_dir`.
///
/// The inverse of [`install_hooks`]: hooks that were never installed (or
/// were already removed) are skipped, and files repokit does not manage are
/// left untouched. Returns the number of files removed.
pub fn uninstall_hooks(source_dir: &Path, hooks_dir: &Path) -> Result<usize> {
    if !source_dir.is_dir() {
        return Err(RepokitError::MissingSourceDir(source_dir.to_path_buf()));
    }

    let mut removed = 0;
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let target = hooks_dir.join(entry.file_name());
        if target.is_file() {
            fs::remove_file(&target)?;
            debug!(hook = %target.display(), "removed hook");
            removed += 1;
        }
    }

    eprintln!(
        "[repokit] Removed {} hook(s) from {}",
        removed,
        hooks_dir.display()
    );
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
