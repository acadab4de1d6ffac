//! Terminal output for `repokit init` — header, spinner, summary.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print the repokit header line.
pub fn print_header() {
    println!();
    println!(
        "  {} {} {}",
        style("repokit").cyan().bold(),
        style("·").dim(),
        style("submodules + git hooks").dim()
    );
    println!();
}

/// Create a spinner for indeterminate operations (the submodule fetch).
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the post-init summary.
pub fn print_summary(submodules: Option<usize>, hooks_installed: usize, hooks_dir: &str) {
    println!();
    println!("  {}", style("Setup complete!").green().bold());
    println!();
    match submodules {
        Some(count) => {
            println!(
                "  {} Updated {} submodule(s)",
                style("✓").green(),
                count
            );
        }
        None => {
            println!("  {} Submodule update skipped", style("-").dim());
        }
    }
    println!(
        "  {} Installed {} hook(s) into {}",
        style("✓").green(),
        hooks_installed,
        hooks_dir
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_does_not_panic() {
        // Smoke test: calling print_header should not panic.
        print_header();
    }

    #[test]
    fn create_spinner_does_not_panic() {
        let pb = create_spinner("fetching submodules...");
        pb.finish_and_clear();
    }

    #[test]
    fn print_summary_does_not_panic() {
        print_summary(Some(3), 2, "/repo/.git/hooks");
    }

    #[test]
    fn print_summary_skipped_submodules_does_not_panic() {
        print_summary(None, 0, "/repo/.git/hooks");
    }
}
