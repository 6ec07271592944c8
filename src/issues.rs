//! Issue types for catalogue checks.
//!
//! Each issue is self-contained with all information needed by the CLI
//! reporter and the MCP server.

use enum_dispatch::enum_dispatch;

use crate::catalogue::{DuplicateReason, Entry, ValidationWarning};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EmptyTranslation,
    DuplicateKey,
    AmbiguousComment,
    Unfinished,
    PlaceMarker,
    Accelerator,
    ParseError,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::EmptyTranslation,
        Rule::DuplicateKey,
        Rule::AmbiguousComment,
        Rule::Unfinished,
        Rule::PlaceMarker,
        Rule::Accelerator,
        Rule::ParseError,
    ];

    /// Parse the kebab-case name used in reports.
    pub fn from_name(name: &str) -> Option<Rule> {
        Self::ALL.into_iter().find(|rule| rule.to_string() == name)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::AmbiguousComment => write!(f, "ambiguous-comment"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::PlaceMarker => write!(f, "place-marker"),
            Rule::Accelerator => write!(f, "accelerator"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Entry Context
// ============================================================

/// Where an entry lives and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub file_path: String,
    /// Line of the `<message>` element, 0 when unknown.
    pub line: usize,
    pub locale: String,
    pub context: String,
    pub source_text: String,
    pub comment: Option<String>,
    pub translation: Option<String>,
}

impl EntryContext {
    pub fn new(file_path: impl Into<String>, locale: impl Into<String>, entry: &Entry) -> Self {
        Self {
            file_path: file_path.into(),
            line: entry.source_line.unwrap_or(0),
            locale: locale.into(),
            context: entry.context.clone(),
            source_text: entry.source_text.clone(),
            comment: entry.comment.clone(),
            translation: entry.display_text().map(str::to_string),
        }
    }

    pub fn from_warning(
        file_path: impl Into<String>,
        locale: impl Into<String>,
        warning: &ValidationWarning,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line: warning.source_line.unwrap_or(0),
            locale: locale.into(),
            context: warning.context.clone(),
            source_text: warning.source_text.clone(),
            comment: warning.comment.clone(),
            translation: None,
        }
    }

    /// `Context::source text`, the way issues are titled.
    pub fn key(&self) -> String {
        format!("{}::{}", self.context, self.source_text)
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Entry marked finished whose translation is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub entry: EntryContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Same key repeated in one context without being a legitimate duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub entry: EntryContext,
    pub count: usize,
    pub reason: DuplicateReason,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// Source text told apart only by comment, with different translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousCommentIssue {
    pub entry: EntryContext,
    pub variants: usize,
}

impl AmbiguousCommentIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::AmbiguousComment
    }
}

/// Active entry still waiting for a translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub entry: EntryContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// `%1`-style markers differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceMarkerIssue {
    pub entry: EntryContext,
    /// In the source, absent from the translation.
    pub missing: Vec<String>,
    /// In the translation, absent from the source.
    pub unexpected: Vec<String>,
}

impl PlaceMarkerIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PlaceMarker
    }
}

/// Keyboard accelerator (`&File`) on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorIssue {
    pub entry: EntryContext,
    /// True when the source has the accelerator and the translation lacks it.
    pub missing_in_translation: bool,
}

impl AcceleratorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Accelerator
    }
}

/// Catalogue file could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalogue.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptyTranslation(EmptyTranslationIssue),
    DuplicateKey(DuplicateKeyIssue),
    AmbiguousComment(AmbiguousCommentIssue),
    Unfinished(UnfinishedIssue),
    PlaceMarker(PlaceMarkerIssue),
    Accelerator(AcceleratorIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Entry(entry) => &entry.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self.location() {
            ReportLocation::Entry(entry) => entry.line,
            ReportLocation::File { line, .. } => line.unwrap_or(0),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalogue.
    Entry(&'a EntryContext),
    /// File-level only (for ParseError).
    File { path: &'a str, line: Option<usize> },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("translate the entry or mark it type=\"unfinished\"")
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} copies, {}", self.count, self.reason))
    }
}

impl Report for AmbiguousCommentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} comment variants translate differently",
            self.variants
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups without a comment resolve to the first entry")
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match &self.entry.translation {
            Some(text) => Some(format!("in {} (\"{}\")", self.entry.locale, text)),
            None => Some(format!("in {} (no translation)", self.entry.locale)),
        }
    }
}

impl Report for PlaceMarkerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for AcceleratorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.key()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.missing_in_translation {
            Some("source has an accelerator, translation does not".to_string())
        } else {
            Some("translation has an accelerator, source does not".to_string())
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
