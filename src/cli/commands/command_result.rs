use crate::catalogue::CatalogueStats;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Translate(TranslateSummary),
    Stats(StatsSummary),
    Fmt(FmtSummary),
    Init(InitSummary),
}

impl CommandSummary {
    /// Failure that is not an issue of a catalogue entry.
    pub fn error(&self) -> Option<&str> {
        match self {
            CommandSummary::Translate(summary) => summary.error.as_deref(),
            CommandSummary::Init(summary) => summary.error.as_deref(),
            CommandSummary::Check | CommandSummary::Stats(_) | CommandSummary::Fmt(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct TranslateSummary {
    /// Display string, the source text on a miss.
    pub text: String,
    /// Set when the catalogue could not be loaded.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct StatsRow {
    pub file_path: String,
    pub locale: String,
    pub stats: CatalogueStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<StatsRow>,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files whose content differs from the canonical layout, as displayed.
    pub changed: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues found while loading or checking catalogues.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogue files that were looked at.
    pub files_checked: usize,
}
