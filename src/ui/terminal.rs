//! Interactive terminal UI.

use std::io::Write;
use std::time::Duration;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

use super::theme::{should_use_colors, ArmoryTheme};
use super::{OutputMode, SpinnerHandle, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: ArmoryTheme,
    prompt_theme: ColorfulTheme,
    mode: OutputMode,
    assume_yes: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, assume_yes: bool) -> Self {
        let theme = if should_use_colors() {
            ArmoryTheme::new()
        } else {
            ArmoryTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            prompt_theme: ColorfulTheme::default(),
            mode,
            assume_yes,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let answer = Confirm::with_theme(&self.prompt_theme)
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        Ok(answer)
    }

    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.prompt_theme)
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        Ok(choice)
    }

    fn multi_select(&mut self, title: &str, items: &[String]) -> Result<Vec<usize>> {
        let chosen = MultiSelect::with_theme(&self.prompt_theme)
            .with_prompt(title)
            .items(items)
            .interact_on(&self.term)
            .map_err(|e| anyhow::anyhow!("prompt failed: {}", e))?;
        Ok(chosen)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = ArmoryTheme::new();
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = ArmoryTheme::new();
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(theme.format_error(msg));
    }

    fn finish_clear(&mut self) {
        self.bar.finish_and_clear();
    }
}
