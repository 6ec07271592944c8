use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, fmt::fmt, init::init, stats::stats, translate::translate,
    },
};
use anyhow::Result;

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
