//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, FmtSummary, InitSummary, StatsSummary, TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, followed by a problem summary.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            files,
            if files == 1 { "catalogue" } else { "catalogues" }
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    match issue.location() {
        ReportLocation::Entry(entry) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), entry.file_path, entry.line);
            if let Some(comment) = &entry.comment {
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "comment:".bold(),
                    comment,
                    width = max_line_width
                );
            }
        }
        ReportLocation::File { path, line: Some(line) } => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
        }
        ReportLocation::File { path, line: None } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Translate(summary) => print_translate(summary, stdout),
        CommandSummary::Stats(summary) => {
            print_stats(summary, stdout);
            report_to(&result.issues, stdout);
        }
        CommandSummary::Fmt(summary) => {
            print_fmt(summary, stdout);
            report_to(&result.issues, stdout);
        }
        CommandSummary::Init(summary) => print_init(summary, stdout),
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        eprintln!(
            "{} {} (falling back to source text)",
            "warning:".bold().yellow(),
            error
        );
    }
    let _ = writeln!(writer, "{}", summary.text);
}

const STATS_HEADERS: [&str; 7] = [
    "Catalogue",
    "Locale",
    "Messages",
    "Finished",
    "Unfinished",
    "Obsolete",
    "Done",
];

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No catalogues found");
        return;
    }

    let rows: Vec<[String; 7]> = summary
        .rows
        .iter()
        .map(|row| {
            [
                row.file_path.clone(),
                row.locale.clone(),
                row.stats.messages.to_string(),
                row.stats.translated.to_string(),
                row.stats.unfinished.to_string(),
                (row.stats.obsolete + row.stats.vanished).to_string(),
                format!("{:.1}%", row.stats.completion()),
            ]
        })
        .collect();

    let mut widths = STATS_HEADERS.map(|header| UnicodeWidthStr::width(header));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header: Vec<String> = STATS_HEADERS.iter().map(|h| h.to_string()).collect();
    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
}

/// Text columns left-aligned, numeric columns right-aligned.
fn format_row(cells: &[String], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let padding = " ".repeat(width - UnicodeWidthStr::width(cell.as_str()));
        if i > 0 {
            line.push_str("  ");
        }
        if i < 2 {
            line.push_str(cell);
            line.push_str(&padding);
        } else {
            line.push_str(&padding);
            line.push_str(cell);
        }
    }
    line.trim_end().to_string()
}

fn print_fmt<W: Write>(summary: &FmtSummary, writer: &mut W) {
    if summary.changed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All catalogues are formatted".green()
        );
        return;
    }

    let verb = if summary.is_apply {
        "Reformatted".green().bold()
    } else {
        "Would reformat".yellow().bold()
    };
    let _ = writeln!(writer, "{} {} file(s):", verb, summary.changed.len());
    for path in &summary.changed {
        let _ = writeln!(writer, "  - {}", path);
    }
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to rewrite them.", "--apply".cyan());
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    } else if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
