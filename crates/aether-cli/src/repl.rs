//! Read-eval-print loop over a [`TerminalSession`].

use std::io::{BufRead, Write};
use std::thread;

use aether_terminal::core::chat;
use aether_terminal::session::Submission;
use aether_terminal::{CommandResult, TerminalConfig, TerminalSession};
use anyhow::Context;
use tracing::debug;

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text with prompts, for people.
    #[default]
    Text,
    /// One JSON object per submission and no prompts, for programs.
    Json,
}

pub struct Repl<R, W> {
    session: TerminalSession,
    input: R,
    output: W,
    mode: OutputMode,
    typing_delay: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(config: &TerminalConfig, input: R, output: W) -> Self {
        Self {
            session: TerminalSession::new(config),
            input,
            output,
            mode: OutputMode::Text,
            typing_delay: false,
        }
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pause before chat replies like the web terminal does.
    pub fn typing_delay(mut self, enabled: bool) -> Self {
        self.typing_delay = enabled;
        self
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Read lines until `exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.session.open();
        if self.mode == OutputMode::Text {
            writeln!(self.output, "{}", self.session.welcome())?;
        }

        let mut buf = Vec::new();
        while self.session.is_open() {
            if self.mode == OutputMode::Text {
                write!(self.output, "{} ", self.session.prompt())?;
                self.output.flush()?;
            }

            buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("failed to read input")?;
            if read == 0 {
                debug!("end of input");
                if self.mode == OutputMode::Text {
                    writeln!(self.output)?;
                }
                break;
            }
            // Invalid UTF-8 becomes U+FFFD and runs like any other line.
            let line = String::from_utf8_lossy(&buf);
            self.submit(line.trim_end_matches(['\r', '\n']))?;
        }

        self.output.flush()?;
        Ok(())
    }

    /// Submit a single line and print its result.
    pub fn run_once(&mut self, line: &str) -> anyhow::Result<()> {
        self.session.open();
        self.submit(line)?;
        self.output.flush()?;
        Ok(())
    }

    fn submit(&mut self, line: &str) -> anyhow::Result<()> {
        match self.session.submit(line) {
            None => Ok(()),
            Some(Submission::Command(result)) => self.print_result(&result),
            Some(Submission::Chat(reply)) => {
                if self.typing_delay {
                    thread::sleep(chat::typing_delay(&mut rand::thread_rng()));
                }
                match self.mode {
                    OutputMode::Text => writeln!(self.output, "{}", reply.text)?,
                    OutputMode::Json => {
                        writeln!(self.output, "{}", serde_json::to_string(&reply)?)?
                    }
                }
                Ok(())
            }
        }
    }

    fn print_result(&mut self, result: &CommandResult) -> anyhow::Result<()> {
        match self.mode {
            OutputMode::Json => {
                writeln!(self.output, "{}", serde_json::to_string(result)?)?;
            }
            OutputMode::Text => match result {
                CommandResult::Empty => {}
                CommandResult::Output { text, .. } if text.is_empty() => {}
                CommandResult::Output { text, .. } => writeln!(self.output, "{}", text)?,
                CommandResult::Error(text) => writeln!(self.output, "{}", text)?,
            },
        }
        Ok(())
    }
}
