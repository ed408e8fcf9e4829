//! Interactive input for the `db` commands.
//!
//! Commands never read the terminal directly; they ask a [`Prompter`]. The
//! terminal implementation is used by the binary, while [`ScriptedPrompter`]
//! answers from a fixed list of expected questions.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{DbError, Result};

pub trait Prompter {
    /// Reads a line of visible input.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Reads a line of masked input.
    fn password(&mut self, prompt: &str) -> Result<String>;

    /// Shows a notice that needs no answer.
    fn message(&mut self, text: &str) -> Result<()>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        Ok(rpassword::prompt_password(prompt)?)
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(io::stderr(), "{text}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Input,
    Password,
}

/// Answers prompts from a queue of expectations, in order.
///
/// Each expectation names the exact prompt text and the answer to give. A
/// prompt that does not match the next expectation is an error, so a run
/// either follows the script exactly or fails. Notices are recorded rather
/// than shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    expected: VecDeque<(PromptKind, String, String)>,
    messages: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expect_input(mut self, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        self.expected
            .push_back((PromptKind::Input, prompt.into(), answer.into()));
        self
    }

    #[must_use]
    pub fn expect_password(
        mut self,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        self.expected
            .push_back((PromptKind::Password, prompt.into(), answer.into()));
        self
    }

    /// Number of expectations not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.expected.len()
    }

    /// Notices shown so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn next(&mut self, kind: PromptKind, prompt: &str) -> Result<String> {
        match self.expected.pop_front() {
            Some((k, p, answer)) if k == kind && p == prompt => Ok(answer),
            _ => Err(DbError::UnexpectedPrompt(prompt.to_string())),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.next(PromptKind::Input, prompt)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.next(PromptKind::Password, prompt)
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }
}

pub const PASSWORD_MISMATCH: &str = "Passwords don't match. Please try again.";

/// Who a password prompt is for: `root user` for id 0, `user <id>` otherwise.
#[must_use]
pub fn password_label(user_id: i64) -> String {
    if user_id == 0 {
        "root user".to_string()
    } else {
        format!("user {user_id}")
    }
}

/// Asks for a password until two consecutive entries agree.
///
/// An empty first entry is asked for again without confirmation. A failed
/// confirmation restarts from the first entry.
pub fn ask_for_password(prompter: &mut dyn Prompter, user_id: i64) -> Result<String> {
    let label = password_label(user_id);
    let enter = format!("Please enter password for OMERO {label}: ");
    let confirm = format!("Please re-enter password for OMERO {label}: ");

    loop {
        let first = prompter.password(&enter)?;
        if first.is_empty() {
            continue;
        }

        let second = prompter.password(&confirm)?;
        if first == second {
            return Ok(first);
        }

        debug!(user_id, "Passwords did not match, asking again");
        prompter.message(PASSWORD_MISMATCH)?;
    }
}
