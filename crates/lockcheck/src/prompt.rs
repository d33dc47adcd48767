//! Operator input.
//!
//! The session only talks to [`Prompter`]; the terminal implementation uses
//! `dialoguer` widgets when attached to a TTY and plain line reads otherwise,
//! so answers can be piped in.

#[cfg(any(test, feature = "inmemory"))]
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};
use lockcheck_core::SessionError;

/// A source of operator answers.
pub trait Prompter {
    /// Asks a question and returns the answer without its line terminator.
    fn input(&mut self, prompt: &str) -> Result<String, SessionError>;

    /// Asks for a value that must not be echoed.
    fn secret(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.input(prompt)
    }
}

/// Reads answers from the controlling terminal or stdin.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }

    fn read_line(&self, prompt: &str) -> Result<String, SessionError> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{}: ", prompt).map_err(|e| SessionError::Prompt(e.to_string()))?;
        stderr
            .flush()
            .map_err(|e| SessionError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SessionError::Prompt(e.to_string()))?;

        if read == 0 {
            return Err(SessionError::Prompt("unexpected end of input".to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, SessionError> {
        if !self.interactive {
            return self.read_line(prompt);
        }

        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SessionError::Prompt(e.to_string()))
    }

    fn secret(&mut self, prompt: &str) -> Result<String, SessionError> {
        if !self.interactive {
            return self.read_line(prompt);
        }

        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SessionError::Prompt(e.to_string()))
    }
}

/// Replays a fixed list of answers and remembers every question asked.
#[cfg(any(test, feature = "inmemory"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

#[cfg(any(test, feature = "inmemory"))]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| SessionError::Prompt(format!("no answer scripted for '{}'", prompt)))
    }
}
