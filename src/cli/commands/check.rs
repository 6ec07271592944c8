use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{
    context::CheckContext,
    issues::Issue,
    rules::{
        consistency::{
            check_ambiguous_comment_issues, check_duplicate_key_issues,
            check_empty_translation_issues,
        },
        markers::{check_accelerator_issues, check_place_marker_issues},
        unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    EmptyTranslation,
    DuplicateKey,
    AmbiguousComment,
    Unfinished,
    PlaceMarker,
    Accelerator,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::EmptyTranslation,
            CheckRule::DuplicateKey,
            CheckRule::AmbiguousComment,
            CheckRule::Unfinished,
            CheckRule::PlaceMarker,
            CheckRule::Accelerator,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    let all_issues = run_checks(&ctx, &checks);

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files_checked(),
        true,
    ))
}

/// Run the selected rules plus parse-error reporting.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::DuplicateKey => {
                let issues = check_duplicate_key_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateKey));
            }
            CheckRule::AmbiguousComment => {
                let issues = check_ambiguous_comment_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::AmbiguousComment));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::PlaceMarker => {
                let issues = check_place_marker_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceMarker));
            }
            CheckRule::Accelerator => {
                let issues = check_accelerator_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Accelerator));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().into_iter().map(Issue::ParseError));
    all_issues
}
