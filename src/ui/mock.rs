//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are queued up front.
//!
//! # Example
//!
//! ```
//! use armory::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! // Use ui in code under test...
//! ui.success("Done!");
//!
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and replays queued prompt answers.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    confirms_asked: Vec<String>,
    selects_asked: Vec<String>,
    confirm_queue: VecDeque<bool>,
    select_queue: VecDeque<Option<usize>>,
    multi_select_queue: VecDeque<Vec<usize>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode, interactive.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Queue an answer for the next `confirm` call. Unqueued confirms
    /// answer `true`.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_queue.push_back(answer);
    }

    /// Queue an answer for the next `select` call. Unqueued selects cancel.
    pub fn queue_select(&mut self, answer: Option<usize>) {
        self.select_queue.push_back(answer);
    }

    /// Queue an answer for the next `multi_select` call. Unqueued
    /// multi-selects return every index.
    pub fn queue_multi_select(&mut self, answer: Vec<usize>) {
        self.multi_select_queue.push_back(answer);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Questions passed to `confirm`, in order.
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms_asked
    }

    /// Prompts passed to `select` and `multi_select`, in order.
    pub fn selects_asked(&self) -> &[String] {
        &self.selects_asked
    }

    /// Check if any success message contains the substring.
    pub fn has_success(&self, substr: &str) -> bool {
        self.successes.iter().any(|m| m.contains(substr))
    }

    /// Check if any warning contains the substring.
    pub fn has_warning(&self, substr: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(substr))
    }

    /// Check if any error contains the substring.
    pub fn has_error(&self, substr: &str) -> bool {
        self.errors.iter().any(|m| m.contains(substr))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.confirms_asked.push(question.to_string());
        Ok(self.confirm_queue.pop_front().unwrap_or(true))
    }

    fn select(&mut self, title: &str, _items: &[String]) -> Result<Option<usize>> {
        self.selects_asked.push(title.to_string());
        Ok(self.select_queue.pop_front().unwrap_or(None))
    }

    fn multi_select(&mut self, title: &str, items: &[String]) -> Result<Vec<usize>> {
        self.selects_asked.push(title.to_string());
        Ok(self
            .multi_select_queue
            .pop_front()
            .unwrap_or_else(|| (0..items.len()).collect()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.messages.push(format!("spinner: {}", message));
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle that does nothing.
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_message_kinds() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");

        assert_eq!(ui.messages(), ["m"]);
        assert!(ui.has_success("s"));
        assert!(ui.has_warning("w"));
        assert!(ui.has_error("e"));
        assert_eq!(ui.headers(), ["h"]);
    }

    #[test]
    fn queued_answers_replay_in_order() {
        let mut ui = MockUI::new();
        ui.queue_confirm(false);
        ui.queue_confirm(true);
        ui.queue_select(Some(2));

        assert!(!ui.confirm("first?", true).unwrap());
        assert!(ui.confirm("second?", false).unwrap());
        assert_eq!(ui.select("pick", &[]).unwrap(), Some(2));
        // queue empty: select cancels, confirm defaults to yes
        assert_eq!(ui.select("pick", &[]).unwrap(), None);
        assert!(ui.confirm("third?", false).unwrap());

        assert_eq!(ui.confirms_asked().len(), 3);
        assert_eq!(ui.selects_asked().len(), 2);
    }

    #[test]
    fn unqueued_multi_select_returns_everything() {
        let mut ui = MockUI::new();
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(ui.multi_select("pick", &items).unwrap(), vec![0, 1]);
    }
}
