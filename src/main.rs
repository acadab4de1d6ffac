use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use repokit::cli::ui;
use repokit::config::{load_config, CliOverrides, RepokitConfig};
use repokit::error::RepokitError;
use repokit::git::submodule::{submodule_status, update_submodules};
use repokit::git::{ensure_git_repo, git_hooks_dir};
use repokit::hooks::install::{install_hooks, uninstall_hooks};
use repokit::observability::init_logging;

#[derive(Parser)]
#[command(name = "repokit")]
#[command(version, about = "Repository bootstrapper — git submodules and hook installation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap a repository: update submodules, then install git hooks
    Init {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
        /// Hooks source directory, relative to the project root
        #[arg(long)]
        hooks_dir: Option<String>,
        /// Skip the submodule update step
        #[arg(long)]
        no_submodules: bool,
    },
    /// Update git submodules only
    Submodules {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
    },
    /// Install git hooks only
    InstallHooks {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
        /// Hooks source directory, relative to the project root
        #[arg(long)]
        hooks_dir: Option<String>,
    },
    /// Remove previously installed git hooks
    UninstallHooks {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
        /// Hooks source directory, relative to the project root
        #[arg(long)]
        hooks_dir: Option<String>,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            directory,
            hooks_dir,
            no_submodules,
        } => {
            cmd_init(&directory, hooks_dir, no_submodules);
        }
        Commands::Submodules { directory } => {
            cmd_submodules(&directory);
        }
        Commands::InstallHooks {
            directory,
            hooks_dir,
        } => {
            cmd_install_hooks(&directory, hooks_dir);
        }
        Commands::UninstallHooks {
            directory,
            hooks_dir,
        } => {
            cmd_uninstall_hooks(&directory, hooks_dir);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI command implementations
// ---------------------------------------------------------------------------

fn resolve_root(directory: &str) -> PathBuf {
    PathBuf::from(directory).canonicalize().unwrap_or_else(|e| {
        eprintln!("Error: cannot resolve directory '{}': {}", directory, e);
        process::exit(1);
    })
}

fn require_git_repo(root: &Path) {
    ensure_git_repo(root).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
}

/// Resolve the hooks source directory against the project root.
fn hooks_source(root: &Path, config: &RepokitConfig) -> PathBuf {
    root.join(&config.hooks_dir)
}

fn cmd_init(directory: &str, hooks_dir: Option<String>, no_submodules: bool) {
    let root = resolve_root(directory);
    require_git_repo(&root);

    let config = load_config(
        &root,
        &CliOverrides {
            hooks_dir,
            no_submodules,
        },
    );

    ui::print_header();

    // Step 1: submodules. A failure here never blocks hook installation.
    let submodules = if config.submodules {
        let spinner = ui::create_spinner("Updating submodules...");
        let result = update_submodules(&root, config.recursive);
        spinner.finish_and_clear();

        match result {
            Ok(()) => {
                let count = submodule_status(&root).map(|s| s.len()).unwrap_or(0);
                Some(count)
            }
            Err(e) => {
                eprintln!("[repokit] Warning: submodule update failed: {}", e);
                Some(0)
            }
        }
    } else {
        None
    };

    // Step 2: hooks.
    let target = git_hooks_dir(&root).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let report = install_hooks(&hooks_source(&root, &config), &target).unwrap_or_else(|e| {
        eprintln!("Error: failed to install hooks: {}", e);
        process::exit(1);
    });

    ui::print_summary(
        submodules,
        report.installed.len(),
        &target.display().to_string(),
    );
}

fn cmd_submodules(directory: &str) {
    let root = resolve_root(directory);
    require_git_repo(&root);

    let config = load_config(&root, &CliOverrides::default());

    let spinner = ui::create_spinner("Updating submodules...");
    let result = update_submodules(&root, config.recursive);
    spinner.finish_and_clear();

    result.unwrap_or_else(|e: RepokitError| {
        eprintln!("Error: submodule update failed: {}", e);
        process::exit(1);
    });

    let count = submodule_status(&root).map(|s| s.len()).unwrap_or(0);
    println!("Submodules up to date ({count}).");
}

fn cmd_install_hooks(directory: &str, hooks_dir: Option<String>) {
    let root = resolve_root(directory);
    require_git_repo(&root);

    let config = load_config(
        &root,
        &CliOverrides {
            hooks_dir,
            ..Default::default()
        },
    );

    let target = git_hooks_dir(&root).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let report = install_hooks(&hooks_source(&root, &config), &target).unwrap_or_else(|e| {
        eprintln!("Error: failed to install hooks: {}", e);
        process::exit(1);
    });

    println!("Installed {} hook(s).", report.installed.len());
}

fn cmd_uninstall_hooks(directory: &str, hooks_dir: Option<String>) {
    let root = resolve_root(directory);
    require_git_repo(&root);

    let config = load_config(
        &root,
        &CliOverrides {
            hooks_dir,
            ..Default::default()
        },
    );

    let target = git_hooks_dir(&root).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let removed = uninstall_hooks(&hooks_source(&root, &config), &target).unwrap_or_else(|e| {
        eprintln!("Error: failed to remove hooks: {}", e);
        process::exit(1);
    });

    println!("Removed {} hook(s).", removed);
}
