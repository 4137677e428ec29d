//! Sources of user answers.
//!
//! The session never reads the terminal directly; it asks an
//! `InputProvider`. The binary uses `StdinInput`, tests use `ScriptedInput`.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Asks a question and returns the user's free-text answer.
pub trait InputProvider {
    /// Show `question` and block until one line of text is available.
    ///
    /// The returned answer has its line ending removed. End of input is
    /// reported as an empty answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from standard input, printing questions to standard output.
pub struct StdinInput {
    stdin: io::Stdin,
}

impl StdinInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn ask(&mut self, question: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        if read == 0 {
            tracing::debug!("stdin closed while asking {:?}", question);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Replays a fixed list of answers, recording every question asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far, in order
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl InputProvider for ScriptedInput {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new(["Drama", "120"]);

        assert_eq!(input.ask("first? ").unwrap(), "Drama");
        assert_eq!(input.ask("second? ").unwrap(), "120");
        assert_eq!(input.questions(), &["first? ".to_string(), "second? ".to_string()]);
    }

    #[test]
    fn test_scripted_input_exhausted_is_empty_answer() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert_eq!(input.ask("anything? ").unwrap(), "");
    }
}
