//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalogue checks (empty translations, duplicates, markers, etc.)
//! - `translate`: Resolve one display string the way the application would
//! - `stats`: Show translation progress per catalogue
//! - `fmt`: Rewrite catalogues in canonical Qt layout
//! - `init`: Initialize tscat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where the config file is looked up)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Catalogues directory path (overrides config file)
    #[arg(long)]
    pub catalogues_root: Option<PathBuf>,

    /// Source language (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            catalogues_root: None,
            source_language: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Catalogue file to resolve against
    pub file: PathBuf,

    /// UI context, e.g. CmdPartBox
    #[arg(long)]
    pub context: String,

    /// Source text as written in the code
    #[arg(long)]
    pub source: String,

    /// Disambiguating comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Ignore unfinished translations (overrides config file)
    #[arg(long)]
    pub finished_only: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogues for translation issues
    Check(CheckCommand),
    /// Print the display string for one message
    Translate(TranslateCommand),
    /// Show translation progress per catalogue
    Stats(StatsCommand),
    /// Rewrite catalogues in canonical layout
    Fmt(FmtCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
