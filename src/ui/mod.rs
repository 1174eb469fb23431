//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`PlainUI`] for non-interactive (one-shot / piped) runs
//! - [`MockUI`] for tests
//!
//! The menu and dispatcher only ever talk to the trait, so tests can script
//! every interaction.

pub mod mock;
pub mod plain;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use plain::PlainUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ArmoryTheme};

use crate::error::Result;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-invocation command lines.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (final status and errors).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows command lines before running them.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Pick one item from a numbered list. `None` means back/cancel.
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>>;

    /// Pick any subset of items. Non-interactive implementations return
    /// every index, degrading "select specific" to "install everything".
    fn multi_select(&mut self, title: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Clear the spinner without a status line.
    fn finish_clear(&mut self);
}

/// Create the appropriate UI for the session.
pub fn create_ui(interactive: bool, mode: OutputMode, assume_yes: bool) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode, assume_yes))
    } else {
        Box::new(PlainUI::new(mode, assume_yes))
    }
}
