use std::fmt;

/// Translation state of a message, taken from the `type` attribute of its
/// `<translation>` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// No `type` attribute: the translation is finished.
    #[default]
    Translated,
    /// `type="unfinished"`: pending review or not translated yet.
    Unfinished,
    /// `type="obsolete"`: kept for reference, no longer in the UI.
    Obsolete,
    /// `type="vanished"`: newer spelling of obsolete.
    Vanished,
}

impl Status {
    /// Parse the `type` attribute value. Unknown values count as finished.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("unfinished") => Status::Unfinished,
            Some("obsolete") => Status::Obsolete,
            Some("vanished") => Status::Vanished,
            _ => Status::Translated,
        }
    }

    /// The `type` attribute value to write, `None` for finished entries.
    pub fn as_attribute(self) -> Option<&'static str> {
        match self {
            Status::Translated => None,
            Status::Unfinished => Some("unfinished"),
            Status::Obsolete => Some("obsolete"),
            Status::Vanished => Some("vanished"),
        }
    }

    /// Whether the entry still belongs to the running UI.
    pub fn is_active(self) -> bool {
        matches!(self, Status::Translated | Status::Unfinished)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Translated => write!(f, "translated"),
            Status::Unfinished => write!(f, "unfinished"),
            Status::Obsolete => write!(f, "obsolete"),
            Status::Vanished => write!(f, "vanished"),
        }
    }
}

/// Where a message occurs in the application sources.
///
/// `line` is absolute. The on-disk relative encoding is handled by
/// [`crate::format::LineCursor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: i64,
}

impl Location {
    pub fn new(file: impl Into<String>, line: i64) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Borrowed lookup key: `(context, source text, disambiguation comment)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKey<'a> {
    pub context: &'a str,
    pub source_text: &'a str,
    pub comment: Option<&'a str>,
}

impl<'a> MessageKey<'a> {
    pub fn new(context: &'a str, source_text: &'a str, comment: Option<&'a str>) -> Self {
        Self {
            context,
            source_text,
            comment,
        }
    }
}

impl fmt::Display for MessageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.comment {
            Some(comment) => write!(f, "{}::{} ({})", self.context, self.source_text, comment),
            None => write!(f, "{}::{}", self.context, self.source_text),
        }
    }
}

/// One translatable message and its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub context: String,
    pub source_text: String,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    /// `None` when the message has no `<translation>` element at all.
    pub translation: Option<String>,
    pub status: Status,
    pub locations: Vec<Location>,
    /// Plural message (`numerus="yes"`); forms live in `numerus_forms`.
    pub numerus: bool,
    pub numerus_forms: Vec<String>,
    pub id: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub old_source: Option<String>,
    pub old_comment: Option<String>,
    /// Unrecognised `<message>` attributes, kept in document order.
    pub attributes: Vec<(String, String)>,
    /// Line in the catalogue file where the `<message>` element starts.
    /// Set by the loader, never serialized.
    pub source_line: Option<usize>,
}

impl Entry {
    pub fn new(context: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source_text: source_text.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>, status: Status) -> Self {
        self.translation = Some(translation.into());
        self.status = status;
        self
    }

    pub fn with_location(mut self, file: impl Into<String>, line: i64) -> Self {
        self.locations.push(Location::new(file, line));
        self
    }

    pub fn key(&self) -> MessageKey<'_> {
        MessageKey::new(&self.context, &self.source_text, self.comment.as_deref())
    }

    /// The text a UI would show, if this entry has one.
    ///
    /// Plural entries yield their first non-empty form.
    pub fn display_text(&self) -> Option<&str> {
        if self.numerus {
            return self
                .numerus_forms
                .iter()
                .map(String::as_str)
                .find(|form| !form.is_empty());
        }
        self.translation.as_deref().filter(|text| !text.is_empty())
    }

    /// True when the entry carries no usable translation text.
    pub fn is_empty_translation(&self) -> bool {
        self.display_text().is_none()
    }

    /// The `<translation>` text the file carries for a singular message.
    ///
    /// A status other than finished always needs the element to record its
    /// `type`, so a missing text reads as empty.
    pub fn stored_translation(&self) -> Option<&str> {
        match (&self.translation, self.status) {
            (Some(text), _) => Some(text.as_str()),
            (None, Status::Translated) => None,
            (None, _) => Some(""),
        }
    }

    /// Compare everything the file format stores, ignoring loader metadata.
    pub fn same_content(&self, other: &Entry) -> bool {
        self.context == other.context
            && self.source_text == other.source_text
            && self.comment == other.comment
            && self.stored_translation() == other.stored_translation()
            && self.status == other.status
            && self.locations == other.locations
            && self.numerus == other.numerus
            && self.numerus_forms == other.numerus_forms
            && self.id == other.id
            && self.extra_comment == other.extra_comment
            && self.translator_comment == other.translator_comment
            && self.old_source == other.old_source
            && self.old_comment == other.old_comment
            && self.attributes == other.attributes
    }
}
