//! cliclack implementation of the question engine

use crate::prompt::{Prompter, SelectPrompt, TextPrompt};
use std::io;

/// Asks questions inline in the terminal. Esc or Ctrl+C surface as
/// `io::ErrorKind::Interrupted`, which the flow treats as cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String> {
        let mut input = cliclack::input(prompt.message)
            .placeholder(&prompt.default)
            .default_input(&prompt.default);

        if let Some(validate) = prompt.validate {
            input = input.validate(move |value: &String| validate(value));
        }

        input.interact()
    }

    fn select(&mut self, prompt: &SelectPrompt<'_>) -> io::Result<usize> {
        let mut select = cliclack::select(prompt.message);
        for (idx, option) in prompt.options.iter().enumerate() {
            select = select.item(idx, option.label, option.hint);
        }

        select.interact()
    }
}
