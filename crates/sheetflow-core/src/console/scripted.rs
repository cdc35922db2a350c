//! Console driven by pre-recorded answers

use super::Console;
use crate::error::{SheetflowError, SheetflowResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Replays queued answers and records everything printed.
///
/// Running out of answers is a [`SheetflowError::Console`] error, which is
/// what a closed stdin looks like to the terminal console.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    confirmations: RefCell<VecDeque<bool>>,
    inputs: RefCell<VecDeque<String>>,
    output: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    images: RefCell<Vec<PathBuf>>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `confirm`
    pub fn with_confirmations(self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.borrow_mut().extend(answers);
        self
    }

    /// Queue answers for `input`
    pub fn with_inputs<S: Into<String>>(self, answers: impl IntoIterator<Item = S>) -> Self {
        self.inputs
            .borrow_mut()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    /// Lines passed to `echo` and `warn`
    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    /// Lines passed to `error`
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    /// Paths passed to `display_image`
    pub fn images(&self) -> Vec<PathBuf> {
        self.images.borrow().clone()
    }

    /// Confirmations not consumed yet
    pub fn pending_confirmations(&self) -> usize {
        self.confirmations.borrow().len()
    }
}

impl Console for ScriptedConsole {
    fn echo(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, question: &str) -> SheetflowResult<bool> {
        self.output.borrow_mut().push(question.to_string());
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SheetflowError::console(format!("no scripted answer for: {question}")))
    }

    fn input(&self, prompt: &str) -> SheetflowResult<String> {
        self.output.borrow_mut().push(prompt.to_string());
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SheetflowError::console(format!("no scripted answer for: {prompt}")))
    }

    fn display_image(&self, path: &Path) {
        self.images.borrow_mut().push(path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_replayed_in_order() {
        let console = ScriptedConsole::new()
            .with_confirmations([true, false])
            .with_inputs(["a", "b"]);
        assert!(console.confirm("first?").unwrap());
        assert!(!console.confirm("second?").unwrap());
        assert_eq!(console.input("x").unwrap(), "a");
        assert_eq!(console.input("y").unwrap(), "b");
    }

    #[test]
    fn test_exhausted_script_is_an_error() {
        let console = ScriptedConsole::new();
        assert!(console.confirm("overwrite?").is_err());
        assert!(console.input("columns").is_err());
    }

    #[test]
    fn test_records_output_and_errors() {
        let console = ScriptedConsole::new();
        console.echo("hello");
        console.error("bad");
        console.display_image(Path::new("out/bar_chart.png"));
        assert_eq!(console.output(), vec!["hello"]);
        assert_eq!(console.errors(), vec!["bad"]);
        assert_eq!(console.images(), vec![PathBuf::from("out/bar_chart.png")]);
    }
}
