//! Consistency checks over a loaded catalogue.
//!
//! Warnings are meant for translation-maintenance tooling only. A catalogue
//! with warnings is still fully usable for lookups.

use std::fmt;

use super::entry::{Entry, Status};
use super::group::ContextGroup;
use super::store::Catalogue;

/// Why a repeated key counts as a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateReason {
    /// The copies do not each carry their own source locations.
    MissingLocations,
    /// The copies carry different translations.
    ConflictingTranslations,
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateReason::MissingLocations => write!(f, "copies lack distinct locations"),
            DuplicateReason::ConflictingTranslations => {
                write!(f, "copies disagree on translation")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Marked finished but the translation is empty.
    EmptyTranslation,
    /// The same key appears `count` times in one context.
    DuplicateKey {
        count: usize,
        reason: DuplicateReason,
    },
    /// One source text is disambiguated only by comment, with different
    /// translations. A lookup without comment cannot tell them apart.
    AmbiguousComment { variants: usize },
}

/// One finding from [`Catalogue::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    pub context: String,
    pub source_text: String,
    pub comment: Option<String>,
    /// Line of the (first) offending `<message>` in the catalogue file.
    pub source_line: Option<usize>,
}

impl ValidationWarning {
    fn at(kind: WarningKind, entry: &Entry) -> Self {
        Self {
            kind,
            context: entry.context.clone(),
            source_text: entry.source_text.clone(),
            comment: entry.comment.clone(),
            source_line: entry.source_line,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::EmptyTranslation => write!(
                f,
                "{}::{} is marked translated but has no translation",
                self.context, self.source_text
            ),
            WarningKind::DuplicateKey { count, reason } => write!(
                f,
                "{}::{} appears {} times ({})",
                self.context, self.source_text, count, reason
            ),
            WarningKind::AmbiguousComment { variants } => write!(
                f,
                "{}::{} has {} comment variants with different translations",
                self.context, self.source_text, variants
            ),
        }
    }
}

impl Catalogue {
    /// Run every consistency check, in catalogue order.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for group in self.groups() {
            check_empty_translations(group, &mut warnings);
            check_repeated_sources(group, &mut warnings);
        }
        warnings
    }
}

fn check_empty_translations(group: &ContextGroup, warnings: &mut Vec<ValidationWarning>) {
    for entry in group.entries() {
        if entry.status == Status::Translated && entry.is_empty_translation() {
            warnings.push(ValidationWarning::at(WarningKind::EmptyTranslation, entry));
        }
    }
}

fn check_repeated_sources(group: &ContextGroup, warnings: &mut Vec<ValidationWarning>) {
    for source in group.repeated_sources() {
        let active: Vec<&Entry> = group
            .with_source(source)
            .filter(|entry| entry.status.is_active())
            .collect();
        if active.len() < 2 {
            continue;
        }

        // Same key: identical comment
        let mut comments: Vec<Option<&str>> = Vec::new();
        for entry in &active {
            let comment = entry.comment.as_deref();
            if !comments.contains(&comment) {
                comments.push(comment);
            }
        }

        for comment in &comments {
            let copies: Vec<&Entry> = active
                .iter()
                .copied()
                .filter(|entry| entry.comment.as_deref() == *comment)
                .collect();
            if copies.len() < 2 {
                continue;
            }
            if let Some(reason) = duplicate_reason(&copies) {
                warnings.push(ValidationWarning::at(
                    WarningKind::DuplicateKey {
                        count: copies.len(),
                        reason,
                    },
                    copies[0],
                ));
            }
        }

        if comments.len() > 1 {
            let mut texts: Vec<Option<&str>> = active.iter().map(|e| e.display_text()).collect();
            texts.sort();
            texts.dedup();
            if texts.len() > 1 {
                warnings.push(ValidationWarning::at(
                    WarningKind::AmbiguousComment {
                        variants: comments.len(),
                    },
                    active[0],
                ));
            }
        }
    }
}

/// Copies of one key are legitimate only when each is a distinct source
/// occurrence with its own locations and they all agree on the translation.
fn duplicate_reason(copies: &[&Entry]) -> Option<DuplicateReason> {
    let first_text = copies[0].display_text();
    if copies.iter().any(|entry| entry.display_text() != first_text) {
        return Some(DuplicateReason::ConflictingTranslations);
    }

    let has_own_locations = copies.iter().all(|entry| !entry.locations.is_empty());
    let distinct = copies
        .iter()
        .enumerate()
        .all(|(i, a)| copies[i + 1..].iter().all(|b| a.locations != b.locations));
    if has_own_locations && distinct {
        None
    } else {
        Some(DuplicateReason::MissingLocations)
    }
}
