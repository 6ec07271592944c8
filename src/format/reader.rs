//! Event-driven `.ts` loader built on quick-xml.
//!
//! Text is taken verbatim (no trimming) because source strings may carry
//! significant whitespace and newlines.

use std::fmt::Display;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::cursor::LineCursor;
use super::error::ParseError;
use crate::catalogue::{Catalogue, Entry, Status};

/// Parse a catalogue from raw file content.
pub fn load(bytes: &[u8]) -> Result<Catalogue, ParseError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    CatalogueReader::new(bytes).read()
}

/// Parse a catalogue from a string.
pub fn load_str(text: &str) -> Result<Catalogue, ParseError> {
    load(text.as_bytes())
}

/// Elements whose text content is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    Comment,
    Translation,
    NumerusForm,
    ExtraComment,
    TranslatorComment,
    OldSource,
    OldComment,
}

struct OpenElement {
    name: String,
    line: usize,
    field: Option<Field>,
}

struct PendingContext {
    name: Option<String>,
    entries: Vec<Entry>,
    line: usize,
}

struct PendingMessage {
    entry: Entry,
    has_source: bool,
    line: usize,
}

struct CatalogueReader<'a> {
    reader: Reader<&'a [u8]>,
    lines: LineIndex,
    catalogue: Option<Catalogue>,
    stack: Vec<OpenElement>,
    context: Option<PendingContext>,
    message: Option<PendingMessage>,
    text: String,
    cursor: LineCursor,
}

impl<'a> CatalogueReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_reader(bytes),
            lines: LineIndex::new(bytes),
            catalogue: None,
            stack: Vec::new(),
            context: None,
            message: None,
            text: String::new(),
            cursor: LineCursor::new(),
        }
    }

    fn read(mut self) -> Result<Catalogue, ParseError> {
        loop {
            let offset = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => return Err(self.xml_error(err)),
            };
            let line = self.lines.line_of(offset);

            match event {
                Event::Start(e) => self.open(&e, line)?,
                Event::Empty(e) => {
                    self.open(&e, line)?;
                    self.close()?;
                }
                Event::End(_) => self.close()?,
                Event::Text(e) => {
                    if self.current_field().is_some() {
                        let text = e.unescape().map_err(|err| self.xml_error(err))?;
                        self.text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if self.current_field().is_some() {
                        self.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = self.stack.pop() {
            return Err(ParseError::Unclosed {
                element: open.name,
                line: open.line,
            });
        }
        self.catalogue.ok_or(ParseError::MissingRoot)
    }

    fn current_field(&self) -> Option<Field> {
        self.stack.iter().rev().find_map(|open| open.field)
    }

    fn parent(&self) -> Option<&str> {
        self.stack.last().map(|open| open.name.as_str())
    }

    fn open(&mut self, e: &BytesStart<'_>, line: usize) -> Result<(), ParseError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let parent = self.parent().map(str::to_owned);
        let mut field = None;

        match (parent.as_deref(), name.as_str()) {
            (None, "TS") => {
                let mut catalogue = Catalogue::new("");
                for (key, value) in self.attributes(e)? {
                    match key.as_str() {
                        "version" => catalogue.version = value,
                        "language" => catalogue.language = value,
                        "sourcelanguage" => catalogue.source_language = Some(value),
                        _ => {}
                    }
                }
                self.catalogue = Some(catalogue);
            }
            (None, _) => {
                return Err(ParseError::UnexpectedRoot { found: name, line });
            }
            (Some("TS"), "context") => {
                self.context = Some(PendingContext {
                    name: None,
                    entries: Vec::new(),
                    line,
                });
            }
            (Some("context"), "name") => field = Some(Field::ContextName),
            (Some("context"), "message") => {
                let mut entry = Entry {
                    source_line: Some(line),
                    ..Entry::default()
                };
                for (key, value) in self.attributes(e)? {
                    match key.as_str() {
                        "numerus" => entry.numerus = value == "yes",
                        "id" => entry.id = Some(value),
                        _ => entry.attributes.push((key, value)),
                    }
                }
                self.cursor.start_message();
                self.message = Some(PendingMessage {
                    entry,
                    has_source: false,
                    line,
                });
            }
            (Some("message"), "location") => {
                let mut filename = None;
                let mut line_value = None;
                for (key, value) in self.attributes(e)? {
                    match key.as_str() {
                        "filename" => filename = Some(value),
                        "line" => line_value = Some(value),
                        _ => {}
                    }
                }
                let location = self
                    .cursor
                    .decode(filename.as_deref(), line_value.as_deref())
                    .ok_or_else(|| ParseError::InvalidLine {
                        value: line_value.clone().unwrap_or_default(),
                        line,
                    })?;
                if let Some(message) = self.message.as_mut() {
                    message.entry.locations.push(location);
                }
            }
            (Some("message"), "source") => {
                if let Some(message) = self.message.as_mut() {
                    message.has_source = true;
                }
                field = Some(Field::Source);
            }
            (Some("message"), "comment") => field = Some(Field::Comment),
            (Some("message"), "extracomment") => field = Some(Field::ExtraComment),
            (Some("message"), "translatorcomment") => field = Some(Field::TranslatorComment),
            (Some("message"), "oldsource") => field = Some(Field::OldSource),
            (Some("message"), "oldcomment") => field = Some(Field::OldComment),
            (Some("message"), "translation") => {
                let kind = self
                    .attributes(e)?
                    .into_iter()
                    .find(|(key, _)| key == "type")
                    .map(|(_, value)| value);
                if let Some(message) = self.message.as_mut() {
                    message.entry.status = Status::from_attribute(kind.as_deref());
                    if !message.entry.numerus {
                        message.entry.translation = Some(String::new());
                    }
                }
                field = Some(Field::Translation);
            }
            (Some("translation"), "numerusform") => field = Some(Field::NumerusForm),
            (_, "byte") if self.current_field().is_some() => {
                let value = self
                    .attributes(e)?
                    .into_iter()
                    .find(|(key, _)| key == "value")
                    .map(|(_, value)| value)
                    .unwrap_or_default();
                let ch = decode_byte(&value).ok_or(ParseError::InvalidByte { value, line })?;
                self.text.push(ch);
            }
            // Anything else is kept out of the model
            _ => {}
        }

        if field.is_some() {
            // Text directly inside <translation> before a <numerusform> is layout
            self.text.clear();
        }
        self.stack.push(OpenElement { name, line, field });
        Ok(())
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let Some(open) = self.stack.pop() else {
            return Ok(());
        };

        if let Some(field) = open.field {
            let text = std::mem::take(&mut self.text);
            self.store_field(field, text);
        }

        match open.name.as_str() {
            "message" if self.parent() == Some("context") => {
                if let Some(message) = self.message.take() {
                    if !message.has_source {
                        return Err(ParseError::MissingSource { line: message.line });
                    }
                    if let Some(context) = self.context.as_mut() {
                        context.entries.push(message.entry);
                    }
                }
            }
            "context" if self.parent() == Some("TS") => {
                if let Some(context) = self.context.take() {
                    let name = context
                        .name
                        .ok_or(ParseError::MissingContextName { line: context.line })?;
                    if let Some(catalogue) = self.catalogue.as_mut() {
                        let group = catalogue.group_mut_or_insert(&name);
                        for entry in context.entries {
                            group.push(entry);
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn store_field(&mut self, field: Field, text: String) {
        if field == Field::ContextName {
            if let Some(context) = self.context.as_mut() {
                context.name = Some(text);
            }
            return;
        }

        let Some(message) = self.message.as_mut() else {
            return;
        };
        let entry = &mut message.entry;
        match field {
            Field::ContextName => {}
            Field::Source => entry.source_text = text,
            Field::Comment => entry.comment = Some(text),
            Field::Translation => {
                if !entry.numerus {
                    entry.translation = Some(text);
                }
            }
            Field::NumerusForm => entry.numerus_forms.push(text),
            Field::ExtraComment => entry.extra_comment = Some(text),
            Field::TranslatorComment => entry.translator_comment = Some(text),
            Field::OldSource => entry.old_source = Some(text),
            Field::OldComment => entry.old_comment = Some(text),
        }
    }

    fn attributes(&self, e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| self.xml_error(err))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(attributes)
    }

    fn xml_error(&self, err: impl Display) -> ParseError {
        ParseError::Xml {
            line: self.lines.line_of(self.reader.buffer_position() as usize),
            message: err.to_string(),
        }
    }
}

/// `<byte value="x1b"/>` (hex) or `<byte value="27"/>` (decimal).
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x').or_else(|| value.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Byte offsets where each line starts, for offset to line lookups.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(bytes: &[u8]) -> Self {
        let mut starts = vec![0];
        for (i, &byte) in bytes.iter().enumerate() {
            if byte == b'\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line containing `offset`.
    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}
