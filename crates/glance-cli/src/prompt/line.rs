//! Numbered line prompts for pipes and dumb terminals

use std::io::{BufRead, Write};

use console::style;

use super::{PromptError, PromptResult, Prompter};

/// Reads one answer per line from `input`, writes questions to `output`.
///
/// End of input cancels the wizard.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> PromptResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<usize> {
        writeln!(self.output, "\n  {prompt}\n")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}  {item}", style(i + 1).cyan())?;
        }
        write!(self.output, "\n  {} ", style("›").cyan())?;

        let answer = self.read_answer()?;
        let index = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < items.len())
            .unwrap_or(0);
        Ok(index)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool> {
        let suffix = if default { "[Y/n]" } else { "[y/N]" };
        write!(self.output, "  {prompt} {suffix} ")?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.to_lowercase().starts_with('y'))
    }

    fn input(&mut self, prompt: &str, default: &str) -> PromptResult<String> {
        if default.is_empty() {
            write!(self.output, "  {prompt}: ")?;
        } else {
            write!(self.output, "  {prompt} [{default}]: ")?;
        }

        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn pause(&mut self, prompt: &str) -> PromptResult<()> {
        write!(self.output, "  {} ", style(prompt).dim())?;
        self.read_answer().map(|_| ())
    }

    fn is_rich(&self) -> bool {
        false
    }
}
