//! Resolving display strings for the GUI layer.

use crate::catalogue::{Catalogue, Entry, MessageKey, Status};

/// The contract GUI code calls to obtain display strings.
///
/// Never fails: on a miss the source text comes back unchanged.
pub trait Translate {
    fn translate(&self, context: &str, source_text: &str, comment: Option<&str>) -> String;
}

/// Which entries may supply a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatePolicy {
    /// Use unfinished entries that already have text, as `lrelease` does by
    /// default.
    pub include_unfinished: bool,
}

impl Default for TranslatePolicy {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

impl TranslatePolicy {
    pub fn finished_only() -> Self {
        Self {
            include_unfinished: false,
        }
    }

    pub fn accepts(&self, entry: &Entry) -> bool {
        let status_ok = match entry.status {
            Status::Translated => true,
            Status::Unfinished => self.include_unfinished,
            Status::Obsolete | Status::Vanished => false,
        };
        status_ok && entry.display_text().is_some()
    }
}

impl Catalogue {
    /// The display string for a key under `policy`, if any entry supplies one.
    pub fn resolve(
        &self,
        context: &str,
        source_text: &str,
        comment: Option<&str>,
        policy: TranslatePolicy,
    ) -> Option<&str> {
        let key = MessageKey::new(context, source_text, comment);
        let (group, index) = self.locate(key, |entry| policy.accepts(entry))?;
        self.groups()[group].entries()[index].display_text()
    }
}

impl Translate for Catalogue {
    fn translate(&self, context: &str, source_text: &str, comment: Option<&str>) -> String {
        self.resolve(context, source_text, comment, TranslatePolicy::default())
            .unwrap_or(source_text)
            .to_string()
    }
}
