//! Unfinished entry detection rule.
//!
//! Reports active entries still marked `type="unfinished"`, whether or not a
//! draft translation exists.

use crate::{
    catalogue::{Entry, Status},
    context::CheckContext,
    issues::{EntryContext, UnfinishedIssue},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.entries()
        .filter_map(|(loaded, entry)| {
            check_unfinished(&ctx.display_path(&loaded.path), &loaded.locale, entry)
        })
        .collect()
}

pub fn check_unfinished(file_path: &str, locale: &str, entry: &Entry) -> Option<UnfinishedIssue> {
    (entry.status == Status::Unfinished).then(|| UnfinishedIssue {
        entry: EntryContext::new(file_path, locale, entry),
    })
}
