//! Armory - interactive provisioning of offensive security tooling.
//!
//! Armory drives external package managers and fetchers (apt, pip3,
//! `go install`, git, docker, wget) from a built-in catalog of security
//! tools, either through an interactive menu or a named profile. It owns
//! selection, sequencing, presence probing, and reporting; the real
//! installation work is delegated to the system tools.
//!
//! # Modules
//!
//! - [`catalog`] - Built-in tool catalog, categories, and profiles
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Catalog-driven installation dispatcher
//! - [`journal`] - Append-only session log file
//! - [`menu`] - Interactive menu loop
//! - [`platform`] - Distro detection, privilege and home resolution
//! - [`shell`] - External command invocations and PATH probing
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use armory::catalog::Catalog;
//! use armory::platform::DistroFamily;
//!
//! // Resolve a built-in profile against a platform.
//! let catalog = Catalog::builtin();
//! let resolved = catalog.resolve_profile("bug-bounty", DistroFamily::Kali).unwrap();
//! assert!(!resolved.apt.is_empty());
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod installer;
pub mod journal;
pub mod menu;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{ArmoryError, Result};
