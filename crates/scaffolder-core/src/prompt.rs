//! Interactive question engine
//!
//! The resolver only needs two kinds of questions: free text with an optional
//! validator, and a single choice out of a list. Front ends implement
//! [`Prompter`]; the cliclack one lives in the `tui` module.

use std::io;

/// Validation hook for text questions. `Err` carries the message shown to the user.
pub type Validator = fn(&str) -> Result<(), &'static str>;

/// A free-text question
#[derive(Clone)]
pub struct TextPrompt<'a> {
    pub message: &'a str,

    /// Value used when the answer is left empty
    pub default: String,

    /// Answers failing validation are asked again, never escalated
    pub validate: Option<Validator>,
}

/// One entry of a [`SelectPrompt`]
#[derive(Debug, Clone, Copy)]
pub struct SelectOption<'a> {
    pub label: &'a str,
    pub hint: &'a str,
}

/// A single-choice question; the answer is the index of the picked option
#[derive(Debug, Clone)]
pub struct SelectPrompt<'a> {
    pub message: &'a str,
    pub options: Vec<SelectOption<'a>>,
}

/// Abstract question engine
///
/// Implementations report an operator abort as an error of kind
/// [`io::ErrorKind::Interrupted`] (see [`is_cancelled`]).
pub trait Prompter {
    /// Ask a text question, re-asking until the validator (if any) accepts the answer
    fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String>;

    /// Ask a single-choice question
    fn select(&mut self, prompt: &SelectPrompt<'_>) -> io::Result<usize>;
}

/// Whether a prompt error means the operator aborted the flow
pub fn is_cancelled(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::Interrupted
}
