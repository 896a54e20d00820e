//! Line-oriented host for the Aether terminal.
//!
//! Runs a [`TerminalSession`] over any reader/writer pair: interactively
//! on stdin/stdout, or once for a single `--command`.

pub mod repl;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use aether_terminal::TerminalConfig;
use anyhow::Context;
use clap::Parser;
use tracing::info;

pub use repl::{OutputMode, Repl};

/// Command-line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "aether-cli", version, about = "Aether learning terminal")]
pub struct Cli {
    /// Run a single line and exit.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Print command results as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// TOML file overriding the terminal settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reply in chat mode without the simulated typing pause.
    #[arg(long)]
    pub no_delay: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Defaults, or the file named by `--config`.
    pub fn load_config(&self) -> anyhow::Result<TerminalConfig> {
        match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                TerminalConfig::load(path)
                    .with_context(|| format!("cannot use config {}", path.display()))
            }
            None => Ok(TerminalConfig::default()),
        }
    }
}

/// Run the CLI against the given streams.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let mut repl = Repl::new(&config, input, output)
        .output_mode(cli.output_mode())
        .typing_delay(!cli.no_delay);

    match &cli.command {
        Some(line) => repl.run_once(line),
        None => repl.run(),
    }
}

/// Run the CLI on the process's stdin and stdout.
pub fn run_stdio(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, stdin.lock(), stdout.lock())
}
