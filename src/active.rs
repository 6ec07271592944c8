//! The catalogue currently published to the GUI layer.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalogue::Catalogue;
use crate::format::{ParseError, load};
use crate::translate::{Translate, TranslatePolicy};

/// Shared handle to the active locale's catalogue.
///
/// Catalogues are built privately and published whole. Readers take an
/// `Arc` snapshot, so a locale switch never changes a catalogue that a
/// lookup is still reading. The lock is held only to clone or replace the
/// `Arc`.
#[derive(Debug)]
pub struct ActiveCatalogue {
    current: RwLock<Arc<Catalogue>>,
    policy: TranslatePolicy,
}

impl ActiveCatalogue {
    pub fn new(catalogue: Catalogue) -> Self {
        Self::with_policy(catalogue, TranslatePolicy::default())
    }

    pub fn with_policy(catalogue: Catalogue, policy: TranslatePolicy) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogue)),
            policy,
        }
    }

    /// Start with no translations: every lookup returns the source text.
    pub fn source_only(source_language: &str) -> Self {
        Self::new(Catalogue::source_only(source_language))
    }

    pub fn policy(&self) -> TranslatePolicy {
        self.policy
    }

    /// The catalogue published right now.
    pub fn snapshot(&self) -> Arc<Catalogue> {
        Arc::clone(&self.current.read())
    }

    /// Publish a new catalogue, returning the one it replaces.
    pub fn swap(&self, catalogue: Catalogue) -> Arc<Catalogue> {
        let next = Arc::new(catalogue);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Load `bytes` and publish the result.
    ///
    /// When the file does not parse, a source-only catalogue is published
    /// instead, so the UI keeps working in the source language, and the
    /// error is returned to the caller.
    pub fn switch_locale(
        &self,
        bytes: &[u8],
        source_language: &str,
    ) -> Result<Arc<Catalogue>, ParseError> {
        match load(bytes) {
            Ok(catalogue) => {
                self.swap(catalogue);
                Ok(self.snapshot())
            }
            Err(err) => {
                self.swap(Catalogue::source_only(source_language));
                Err(err)
            }
        }
    }
}

impl Translate for ActiveCatalogue {
    fn translate(&self, context: &str, source_text: &str, comment: Option<&str>) -> String {
        let catalogue = self.snapshot();
        catalogue
            .resolve(context, source_text, comment, self.policy)
            .unwrap_or(source_text)
            .to_string()
    }
}
