//! Consistency rules backed by [`Catalogue::validate`].
//!
//! [`Catalogue::validate`]: crate::catalogue::Catalogue::validate

use crate::{
    catalogue::{ValidationWarning, WarningKind},
    context::CheckContext,
    issues::{AmbiguousCommentIssue, DuplicateKeyIssue, EmptyTranslationIssue, EntryContext, Issue},
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    collect(ctx, |issue| match issue {
        Issue::EmptyTranslation(issue) => Some(issue),
        _ => None,
    })
}

pub fn check_duplicate_key_issues(ctx: &CheckContext) -> Vec<DuplicateKeyIssue> {
    collect(ctx, |issue| match issue {
        Issue::DuplicateKey(issue) => Some(issue),
        _ => None,
    })
}

pub fn check_ambiguous_comment_issues(ctx: &CheckContext) -> Vec<AmbiguousCommentIssue> {
    collect(ctx, |issue| match issue {
        Issue::AmbiguousComment(issue) => Some(issue),
        _ => None,
    })
}

fn collect<T>(ctx: &CheckContext, pick: impl Fn(Issue) -> Option<T>) -> Vec<T> {
    let catalogues = ctx.catalogues();
    ctx.validation_warnings()
        .iter()
        .filter_map(|(index, warning)| {
            let loaded = &catalogues[*index];
            let file_path = ctx.display_path(&loaded.path);
            pick(issue_from_warning(&file_path, &loaded.locale, warning))
        })
        .collect()
}

/// Turn one validation warning into the matching issue.
pub fn issue_from_warning(file_path: &str, locale: &str, warning: &ValidationWarning) -> Issue {
    let entry = EntryContext::from_warning(file_path, locale, warning);
    match &warning.kind {
        WarningKind::EmptyTranslation => Issue::EmptyTranslation(EmptyTranslationIssue { entry }),
        WarningKind::DuplicateKey { count, reason } => Issue::DuplicateKey(DuplicateKeyIssue {
            entry,
            count: *count,
            reason: *reason,
        }),
        WarningKind::AmbiguousComment { variants } => {
            Issue::AmbiguousComment(AmbiguousCommentIssue {
                entry,
                variants: *variants,
            })
        }
    }
}
