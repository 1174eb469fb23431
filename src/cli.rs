//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. There are no
//! subcommands: the default invocation opens the interactive menu, and
//! `--profile` runs one profile non-interactively.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Armory - offensive security tool provisioning for Debian-family systems.
#[derive(Debug, Parser)]
#[command(name = "armory")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Install a named profile and exit instead of opening the menu
    #[arg(short, long)]
    pub profile: Option<String>,

    /// List available profiles and exit
    #[arg(long)]
    pub list_profiles: bool,

    /// Assume yes for all confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Print every command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Path for the session log (defaults to armory-install.log in the
    /// invoking user's home)
    #[arg(long, env = "ARMORY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Show verbose output, including every command line
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The UI output mode implied by the verbosity flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.verbose {
            OutputMode::Verbose
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
