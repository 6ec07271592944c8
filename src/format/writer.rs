//! `.ts` serializer.
//!
//! Output follows the layout Qt's own tools write, so a load/save cycle of a
//! lupdate-generated file produces a minimal diff.

use std::fmt::Write;

use quick_xml::escape::escape;

use super::cursor::LineCursor;
use crate::catalogue::{Catalogue, Entry};

const INDENT_CONTEXT: &str = "    ";
const INDENT_MESSAGE: &str = "        ";
const INDENT_FORM: &str = "            ";

/// Serialize a catalogue to UTF-8 bytes.
pub fn save(catalogue: &Catalogue) -> Vec<u8> {
    save_string(catalogue).into_bytes()
}

/// Serialize a catalogue to a string.
pub fn save_string(catalogue: &Catalogue) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attribute(&mut out, "version", &catalogue.version);
    if !catalogue.language.is_empty() {
        push_attribute(&mut out, "language", &catalogue.language);
    }
    if let Some(source_language) = &catalogue.source_language {
        push_attribute(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    let mut cursor = LineCursor::new();
    for group in catalogue.groups() {
        out.push_str("<context>\n");
        let _ = writeln!(out, "{INDENT_CONTEXT}<name>{}</name>", escape_text(group.name()));
        for entry in group.entries() {
            write_message(&mut out, entry, &mut cursor);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, entry: &Entry, cursor: &mut LineCursor) {
    out.push_str(INDENT_CONTEXT);
    out.push_str("<message");
    if let Some(id) = &entry.id {
        push_attribute(out, "id", id);
    }
    if entry.numerus {
        push_attribute(out, "numerus", "yes");
    }
    for (key, value) in &entry.attributes {
        push_attribute(out, key, value);
    }
    out.push_str(">\n");

    cursor.start_message();
    for location in &entry.locations {
        let encoded = cursor.encode(location);
        out.push_str(INDENT_MESSAGE);
        out.push_str("<location");
        if let Some(filename) = &encoded.filename {
            push_attribute(out, "filename", filename);
        }
        push_attribute(out, "line", &encoded.line);
        out.push_str("/>\n");
    }

    push_element(out, "source", Some(&entry.source_text));
    push_element(out, "oldsource", entry.old_source.as_deref());
    push_element(out, "comment", entry.comment.as_deref());
    push_element(out, "oldcomment", entry.old_comment.as_deref());
    push_element(out, "extracomment", entry.extra_comment.as_deref());
    push_element(out, "translatorcomment", entry.translator_comment.as_deref());

    if entry.numerus {
        out.push_str(INDENT_MESSAGE);
        out.push_str("<translation");
        push_status(out, entry);
        out.push_str(">\n");
        for form in &entry.numerus_forms {
            let _ = writeln!(out, "{INDENT_FORM}<numerusform>{}</numerusform>", escape_text(form));
        }
        out.push_str(INDENT_MESSAGE);
        out.push_str("</translation>\n");
    } else if let Some(translation) = entry.stored_translation() {
        out.push_str(INDENT_MESSAGE);
        out.push_str("<translation");
        push_status(out, entry);
        let _ = writeln!(out, ">{}</translation>", escape_text(translation));
    }

    out.push_str(INDENT_CONTEXT);
    out.push_str("</message>\n");
}

fn push_status(out: &mut String, entry: &Entry) {
    if let Some(kind) = entry.status.as_attribute() {
        push_attribute(out, "type", kind);
    }
}

fn push_element(out: &mut String, name: &str, text: Option<&str>) {
    if let Some(text) = text {
        let _ = writeln!(out, "{INDENT_MESSAGE}<{name}>{}</{name}>", escape_text(text));
    }
}

fn push_attribute(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", key, escape(value));
}

/// Escape element text. Control characters XML cannot carry become
/// `<byte value="xNN"/>`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;
    for (i, ch) in text.char_indices() {
        if is_byte_escaped(ch) {
            out.push_str(&escape(&text[plain_start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", ch as u32);
            plain_start = i + ch.len_utf8();
        }
    }
    out.push_str(&escape(&text[plain_start..]));
    out
}

fn is_byte_escaped(ch: char) -> bool {
    (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r')
}
