//! Place marker and accelerator rules.
//!
//! Qt substitutes `%1`..`%99` (and `%n` for plurals) at runtime, so a
//! translation that drops or invents one shows wrong text. Accelerators
//! (`&File`) define the keyboard shortcut of menu items and buttons.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    catalogue::Entry,
    context::CheckContext,
    issues::{AcceleratorIssue, EntryContext, PlaceMarkerIssue},
};

static PLACE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(\d{1,2}|n)").unwrap());

// `&&` is a literal ampersand and is consumed as a pair.
static ACCELERATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[&\S]").unwrap());

pub fn check_place_marker_issues(ctx: &CheckContext) -> Vec<PlaceMarkerIssue> {
    ctx.entries()
        .filter_map(|(loaded, entry)| {
            check_place_markers(&ctx.display_path(&loaded.path), &loaded.locale, entry)
        })
        .collect()
}

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorIssue> {
    ctx.entries()
        .filter_map(|(loaded, entry)| {
            check_accelerator(&ctx.display_path(&loaded.path), &loaded.locale, entry)
        })
        .collect()
}

/// Compare the markers of the source text with those of the translation.
///
/// Plural entries are compared against all their forms together, since a
/// singular form may legitimately spell out the number.
pub fn check_place_markers(
    file_path: &str,
    locale: &str,
    entry: &Entry,
) -> Option<PlaceMarkerIssue> {
    if !entry.status.is_active() {
        return None;
    }
    let translated: Vec<&str> = if entry.numerus {
        entry
            .numerus_forms
            .iter()
            .map(String::as_str)
            .filter(|form| !form.is_empty())
            .collect()
    } else {
        entry.display_text().into_iter().collect()
    };
    if translated.is_empty() {
        return None;
    }

    let expected = place_markers(&entry.source_text);
    let mut found: Vec<String> = translated.iter().flat_map(|text| place_markers(text)).collect();
    found.sort();
    found.dedup();

    let missing: Vec<String> = expected.iter().filter(|m| !found.contains(m)).cloned().collect();
    let unexpected: Vec<String> = found.iter().filter(|m| !expected.contains(m)).cloned().collect();
    if missing.is_empty() && unexpected.is_empty() {
        return None;
    }

    Some(PlaceMarkerIssue {
        entry: EntryContext::new(file_path, locale, entry),
        missing,
        unexpected,
    })
}

/// Flag an accelerator present on one side only.
pub fn check_accelerator(file_path: &str, locale: &str, entry: &Entry) -> Option<AcceleratorIssue> {
    if !entry.status.is_active() || entry.numerus {
        return None;
    }
    let translation = entry.display_text()?;

    let in_source = has_accelerator(&entry.source_text);
    if in_source == has_accelerator(translation) {
        return None;
    }
    Some(AcceleratorIssue {
        entry: EntryContext::new(file_path, locale, entry),
        missing_in_translation: in_source,
    })
}

/// Distinct place markers in `text`, normalized (`%L1` counts as `%1`) and
/// sorted.
pub fn place_markers(text: &str) -> Vec<String> {
    let mut markers: Vec<String> = PLACE_MARKER_REGEX
        .captures_iter(text)
        .map(|caps| format!("%{}", &caps[1]))
        .collect();
    markers.sort();
    markers.dedup();
    markers
}

pub fn has_accelerator(text: &str) -> bool {
    ACCELERATOR_REGEX.find_iter(text).any(|m| m.as_str() != "&&")
}
