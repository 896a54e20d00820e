//! Command execution logic.
//!
//! Contains the `execute_command` function that runs a parsed command
//! against the host's [`CommandContext`].

use crate::core::error::ContextError;
use crate::models::Tab;
use crate::utils::format_timestamp;

use super::{Command, CommandContext, CommandResult, Interpreter, PathArg};

/// Execute a parsed command.
///
/// Side effects happen only through `ctx`. The `Err` case means a context
/// operation failed; [`Interpreter::execute`] turns it into an error result.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `interpreter` - Static settings (working directory, listing, clock)
/// * `ctx` - Host capabilities
pub fn execute_command<C>(
    cmd: Command,
    interpreter: &Interpreter,
    ctx: &mut C,
) -> Result<CommandResult, ContextError>
where
    C: CommandContext + ?Sized,
{
    let result = match cmd {
        Command::Help => CommandResult::system(interpreter.help_text()),
        Command::Clear => {
            ctx.clear_history()?;
            CommandResult::empty()
        }
        Command::Pwd => CommandResult::system(interpreter.working_dir()),
        Command::Ls => CommandResult::system(interpreter.listing()),
        Command::Cd(dir) => execute_cd(dir),
        Command::Date => CommandResult::system(format_timestamp(&interpreter.now())),
        Command::Echo(text) => CommandResult::system(text),
        Command::Open(path) => execute_open(path, ctx)?,
        Command::Chat => {
            ctx.set_active_tab(Tab::Chat)?;
            CommandResult::system("Switching to chat mode...")
        }
        Command::Exit => {
            ctx.close_terminal()?;
            CommandResult::empty()
        }
        Command::Unknown(name) => CommandResult::error(format!(
            "Command not found: {}. Type 'help' for available commands.",
            name
        )),
    };
    Ok(result)
}

/// Execute `cd` command. Only echoes; nothing changes.
fn execute_cd(dir: Option<PathArg>) -> CommandResult {
    match dir {
        Some(dir) => CommandResult::system(format!("Changed directory to {}", dir)),
        None => CommandResult::error("cd: missing directory argument"),
    }
}

/// Execute `open` command.
fn execute_open<C>(path: Option<PathArg>, ctx: &mut C) -> Result<CommandResult, ContextError>
where
    C: CommandContext + ?Sized,
{
    let Some(path) = path else {
        return Ok(CommandResult::error("open: missing path argument"));
    };
    ctx.navigate(path.as_str())?;
    Ok(CommandResult::system(format!("Navigating to {}...", path)))
}
