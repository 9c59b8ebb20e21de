//! Arrow-key prompts on a real terminal

use std::io;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use super::{PromptError, PromptResult, Prompter};

pub struct RichPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl RichPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }

    /// Escape or Ctrl+C inside a prompt
    fn cancelled(&self) -> PromptError {
        let _ = self.term.show_cursor();
        PromptError::Cancelled
    }

    fn map_err(&self, err: dialoguer::Error) -> PromptError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => self.cancelled(),
            dialoguer::Error::IO(e) => PromptError::Io(e),
        }
    }
}

impl Default for RichPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for RichPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(|e| self.map_err(e))?
            .ok_or_else(|| self.cancelled())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_on_opt(&self.term)
            .map_err(|e| self.map_err(e))?
            .ok_or_else(|| self.cancelled())
    }

    fn input(&mut self, prompt: &str, default: &str) -> PromptResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let answer = input
            .interact_text_on(&self.term)
            .map_err(|e| self.map_err(e))?;
        Ok(answer.trim().to_string())
    }

    fn pause(&mut self, prompt: &str) -> PromptResult<()> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term)
            .map(|_| ())
            .map_err(|e| self.map_err(e))
    }

    fn is_rich(&self) -> bool {
        true
    }
}
