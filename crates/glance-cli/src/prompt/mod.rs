//! Interactive prompt layer
//!
//! One [`Prompter`] is chosen at startup: the dialoguer-backed one when both
//! stdin and stdout are terminals, the numbered line prompter otherwise.

mod cancel;
mod line;
mod rich;

use std::io::{self, IsTerminal};

use thiserror::Error;

pub use cancel::CancelGuard;
pub use line::LinePrompter;
pub use rich::RichPrompter;

/// Why a prompt did not produce an answer
#[derive(Debug, Error)]
pub enum PromptError {
    /// Interrupt, end of input, or an explicit cancel choice
    #[error("Cancelled.")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Questions the wizards ask
pub trait Prompter {
    /// Pick one of `items`; returns its index
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<usize>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool>;

    /// Free text; an empty answer yields `default`
    fn input(&mut self, prompt: &str, default: &str) -> PromptResult<String>;

    /// Wait for Enter
    fn pause(&mut self, prompt: &str) -> PromptResult<()>;

    /// Whether colors and previews can be drawn
    fn is_rich(&self) -> bool;
}

/// Select from labelled values and return the chosen value
pub fn choose<T: Copy>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    choices: &[(String, T)],
) -> PromptResult<T> {
    let labels: Vec<String> = choices.iter().map(|(label, _)| label.clone()).collect();
    let index = prompter.select(prompt, &labels)?;
    choices
        .get(index)
        .or_else(|| choices.first())
        .map(|(_, value)| *value)
        .ok_or(PromptError::Cancelled)
}

/// Whether the rich prompter can be used
#[must_use]
pub fn interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Prompter for the current terminal
#[must_use]
pub fn detect() -> Box<dyn Prompter> {
    if interactive_terminal() {
        Box::new(RichPrompter::new())
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
