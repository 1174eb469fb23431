//! Non-interactive UI for one-shot and piped runs.
//!
//! Prompts degrade instead of blocking: confirmations take their default
//! (or yes with `--yes`), single selects cancel, and multi-selects return
//! everything so "select specific" falls back to the whole category.

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Plain line-based UI without prompts, colors, or spinners.
pub struct PlainUI {
    mode: OutputMode,
    assume_yes: bool,
}

impl PlainUI {
    pub fn new(mode: OutputMode, assume_yes: bool) -> Self {
        Self { mode, assume_yes }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("ok: {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("== {} ==", title);
        }
    }

    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool> {
        Ok(self.assume_yes || default)
    }

    fn select(&mut self, _title: &str, _items: &[String]) -> Result<Option<usize>> {
        Ok(None)
    }

    fn multi_select(&mut self, _title: &str, items: &[String]) -> Result<Vec<usize>> {
        Ok((0..items.len()).collect())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}...", message);
        }
        Box::new(PlainSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

struct PlainSpinner;

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("ok: {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_takes_default() {
        let mut ui = PlainUI::new(OutputMode::Normal, false);
        assert!(ui.confirm("proceed?", true).unwrap());
        assert!(!ui.confirm("proceed?", false).unwrap());
    }

    #[test]
    fn assume_yes_overrides_default() {
        let mut ui = PlainUI::new(OutputMode::Normal, true);
        assert!(ui.confirm("proceed?", false).unwrap());
    }

    #[test]
    fn multi_select_returns_everything() {
        let mut ui = PlainUI::new(OutputMode::Normal, false);
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(ui.multi_select("pick", &items).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn select_cancels() {
        let mut ui = PlainUI::new(OutputMode::Normal, false);
        assert_eq!(ui.select("pick", &["a".to_string()]).unwrap(), None);
    }
}
