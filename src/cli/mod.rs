//! CLI presentation — terminal output for the `repokit` binary.

pub mod ui;
