use std::collections::HashMap;

use super::entry::{Entry, MessageKey, Status};
use super::group::ContextGroup;

/// TS format version written when a catalogue did not come from a file.
pub const DEFAULT_FORMAT_VERSION: &str = "2.1";

/// All context groups for one target locale.
///
/// Built privately (by the loader or an editing tool), then published
/// read-only. Groups keep first-seen order; names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    /// The `version` attribute of the `TS` root.
    pub version: String,
    /// Target locale tag, e.g. `pt-PT`.
    pub language: String,
    pub source_language: Option<String>,
    groups: Vec<ContextGroup>,
    by_name: HashMap<String, usize>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new("")
    }
}

impl Catalogue {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_FORMAT_VERSION.to_string(),
            language: language.into(),
            source_language: None,
            groups: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }

    /// An empty catalogue for the source language itself.
    ///
    /// Every lookup misses, so every `translate` call returns the source text.
    pub fn source_only(source_language: impl Into<String>) -> Self {
        let source_language = source_language.into();
        Self::new(source_language.clone()).with_source_language(source_language)
    }

    pub fn groups(&self) -> &[ContextGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ContextGroup> {
        self.by_name.get(name).map(|&index| &self.groups[index])
    }

    /// Iterate over every entry, groups in order, entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.groups.iter().flat_map(|group| group.entries().iter())
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(ContextGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Get the group with this name, creating it at the end if missing.
    pub fn group_mut_or_insert(&mut self, name: &str) -> &mut ContextGroup {
        let index = match self.by_name.get(name) {
            Some(&index) => index,
            None => {
                let index = self.groups.len();
                self.groups.push(ContextGroup::new(name));
                self.by_name.insert(name.to_string(), index);
                index
            }
        };
        &mut self.groups[index]
    }

    /// Append an entry to the group named by `entry.context`.
    pub fn insert(&mut self, entry: Entry) {
        let name = entry.context.clone();
        self.group_mut_or_insert(&name).push(entry);
    }

    /// Find the entry for a key.
    ///
    /// The comment is compared only when both the caller and the entry have
    /// one. With a comment supplied, an exact comment match is preferred over
    /// an entry without comment. Otherwise the first match in file order wins.
    pub fn lookup(
        &self,
        context: &str,
        source_text: &str,
        comment: Option<&str>,
    ) -> Option<&Entry> {
        let key = MessageKey::new(context, source_text, comment);
        self.locate(key, |_| true)
            .map(|(group, index)| self.groups[group].entry(index))
    }

    /// The entry an edit of `key` applies to.
    ///
    /// Follows [`Catalogue::lookup`], except that a live entry beats an
    /// obsolete or vanished copy of the same message.
    pub fn edit_target(&self, key: MessageKey<'_>) -> Option<&Entry> {
        self.locate_for_edit(key)
            .map(|(group, index)| self.groups[group].entry(index))
    }

    /// Update the translation of the entry [`Catalogue::edit_target`] picks.
    ///
    /// Plural entries take the text as their first form, the one lookups
    /// return. Returns false when the key is absent.
    pub fn set_translation(
        &mut self,
        key: MessageKey<'_>,
        translation: impl Into<String>,
        status: Status,
    ) -> bool {
        let Some((group, index)) = self.locate_for_edit(key) else {
            return false;
        };
        let Some(entry) = self.groups[group].entry_mut(index) else {
            return false;
        };

        let translation = translation.into();
        if entry.numerus {
            match entry.numerus_forms.first_mut() {
                Some(first) => *first = translation,
                None => entry.numerus_forms.push(translation),
            }
        } else {
            entry.translation = Some(translation);
        }
        entry.status = status;
        true
    }

    fn locate_for_edit(&self, key: MessageKey<'_>) -> Option<(usize, usize)> {
        self.locate(key, |entry| entry.status.is_active())
            .or_else(|| self.locate(key, |_| true))
    }

    /// Position `(group, entry)` of the best candidate for `key` that passes
    /// `accept`, following the precedence documented on [`Catalogue::lookup`].
    pub(crate) fn locate(
        &self,
        key: MessageKey<'_>,
        accept: impl Fn(&Entry) -> bool,
    ) -> Option<(usize, usize)> {
        let &group_index = self.by_name.get(key.context)?;
        let group = &self.groups[group_index];
        let indices = group.indices_for(key.source_text);

        let first = |pred: &dyn Fn(&Entry) -> bool| {
            indices
                .iter()
                .copied()
                .find(|&index| {
                    let entry = group.entry(index);
                    pred(entry) && accept(entry)
                })
                .map(|index| (group_index, index))
        };

        match key.comment {
            Some(wanted) => first(&|entry| entry.comment.as_deref() == Some(wanted))
                .or_else(|| first(&|entry| entry.comment.is_none())),
            None => first(&|_| true),
        }
    }

    /// Whether two catalogues hold the same content as far as the file
    /// format is concerned (loader metadata is ignored).
    pub fn equivalent(&self, other: &Catalogue) -> bool {
        self.version == other.version
            && self.language == other.language
            && self.source_language == other.source_language
            && self.groups.len() == other.groups.len()
            && self.groups.iter().zip(&other.groups).all(|(a, b)| {
                a.name() == b.name()
                    && a.len() == b.len()
                    && a
                        .entries()
                        .iter()
                        .zip(b.entries())
                        .all(|(x, y)| x.same_content(y))
            })
    }

    pub fn stats(&self) -> CatalogueStats {
        let mut stats = CatalogueStats {
            contexts: self.groups.len(),
            ..Default::default()
        };
        for entry in self.entries() {
            stats.messages += 1;
            match entry.status {
                Status::Translated => stats.translated += 1,
                Status::Unfinished => stats.unfinished += 1,
                Status::Obsolete => stats.obsolete += 1,
                Status::Vanished => stats.vanished += 1,
            }
            if entry.status.is_active() && entry.is_empty_translation() {
                stats.untranslated += 1;
            }
        }
        stats
    }
}

/// Status counts for one catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueStats {
    pub contexts: usize,
    pub messages: usize,
    pub translated: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    pub vanished: usize,
    /// Active entries with no translation text at all.
    pub untranslated: usize,
}

impl CatalogueStats {
    /// Entries still shown in the UI.
    pub fn active(&self) -> usize {
        self.translated + self.unfinished
    }

    /// Share of active entries marked finished, in percent.
    pub fn completion(&self) -> f64 {
        if self.active() == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / self.active() as f64
    }
}
