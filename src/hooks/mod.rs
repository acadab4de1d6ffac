//! Hooks — installation of tracked git hook scripts into `.git/hooks`.

pub mod install;
