//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use venvy::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Creating environment");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Creating"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<Result<String, String>>>>,
    error_blocks: Vec<(String, String, Option<String>)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Final spinner states: `Ok(msg)` for success, `Err(msg)` for failure.
    pub fn spinner_results(&self) -> Vec<Result<String, String>> {
        self.spinner_results.borrow().clone()
    }

    /// Get all captured error blocks as (command, output, hint).
    pub fn error_blocks(&self) -> &[(String, String, Option<String>)] {
        &self.error_blocks
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
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

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            results: Rc::clone(&self.spinner_results),
        })
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.error_blocks.push((
            command.to_string(),
            output.to_string(),
            hint.map(|h| h.to_string()),
        ));
    }
}

/// Spinner double that records how it finished.
#[derive(Debug)]
pub struct MockSpinner {
    results: Rc<RefCell<Vec<Result<String, String>>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.results.borrow_mut().push(Ok(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.results.borrow_mut().push(Err(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_status_lines() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("created");
        ui.warning("careful");
        ui.error("broken");
        ui.show_hint("try again");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("created"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert!(ui.has_hint("try"));
    }

    #[test]
    fn records_spinner_outcomes() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Creating api");
        spinner.finish_error("uv failed");

        assert_eq!(ui.spinners(), ["Creating api".to_string()]);
        assert_eq!(ui.spinner_results(), vec![Err("uv failed".to_string())]);
    }

    #[test]
    fn records_error_blocks() {
        let mut ui = MockUI::new();
        ui.show_error_block("uv venv", "boom", Some("check uv"));
        let (cmd, output, hint) = &ui.error_blocks()[0];
        assert_eq!(cmd, "uv venv");
        assert_eq!(output, "boom");
        assert_eq!(hint.as_deref(), Some("check uv"));
    }

    #[test]
    fn keeps_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
