use std::collections::HashMap;

use super::entry::Entry;

/// Ordered collection of entries sharing one UI context.
///
/// Entries keep file order. `by_source` indexes them by source text so
/// lookups never scan the whole group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextGroup {
    name: String,
    entries: Vec<Entry>,
    by_source: HashMap<String, Vec<usize>>,
}

impl ContextGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            by_source: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, rewriting its `context` to this group's name.
    pub fn push(&mut self, mut entry: Entry) {
        entry.context.clone_from(&self.name);
        let index = self.entries.len();
        self.by_source
            .entry(entry.source_text.clone())
            .or_default()
            .push(index);
        self.entries.push(entry);
    }

    /// All entries with the given source text, in file order.
    pub fn with_source<'a>(
        &'a self,
        source_text: &str,
    ) -> impl Iterator<Item = &'a Entry> + use<'a> {
        self.by_source
            .get(source_text)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.entries[index])
    }

    /// Mutable access to one entry. Source text is part of the index, so
    /// only the translation-side fields should be changed through this.
    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Indices of entries with the given source text, in file order.
    pub(crate) fn indices_for(&self, source_text: &str) -> &[usize] {
        self.by_source
            .get(source_text)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn entry(&self, index: usize) -> &Entry {
        &self.entries[index]
    }

    /// Source texts with more than one entry, in first-seen order.
    pub(crate) fn repeated_sources(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            let source = entry.source_text.as_str();
            if self.indices_for(source).len() > 1 && !seen.contains(&source) {
                seen.push(source);
            }
        }
        seen
    }
}
