use std::collections::HashMap;

use crate::catalogue::Location;

/// Running line counters for the relative `<location>` encoding.
///
/// Each file keeps its own counter, starting at 0. Signed values (`+12`,
/// `-3`) move the file's counter, unsigned values set it.
///
/// A location without `filename` belongs to the last file named earlier in
/// the same message. At the start of a message that is the file named by the
/// first location of the most recent message whose first location carried a
/// `filename`, which is how lupdate writes and lrelease reads these files.
#[derive(Debug, Default)]
pub struct LineCursor {
    current_file: String,
    message_file: String,
    first_in_message: bool,
    lines: HashMap<String, i64>,
}

/// A location as written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLocation {
    /// Present only when the file differs from the one the reader would infer.
    pub filename: Option<String>,
    pub line: String,
}

impl LineCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at every `<message>`, before its locations.
    pub fn start_message(&mut self) {
        self.message_file.clone_from(&self.current_file);
        self.first_in_message = true;
    }

    /// Decode one `<location filename=.. line=..>` into an absolute location.
    ///
    /// Returns `None` for a malformed or overflowing line value.
    pub fn decode(&mut self, filename: Option<&str>, line: Option<&str>) -> Option<Location> {
        if let Some(filename) = filename.filter(|name| !name.is_empty()) {
            self.switch_file(filename);
        }
        self.first_in_message = false;

        let file = self.message_file.clone();
        let current = self.lines.entry(file.clone()).or_insert(0);
        let absolute = match line.map(str::trim) {
            None | Some("") => *current,
            Some(value) if value.starts_with('+') || value.starts_with('-') => {
                current.checked_add(value.parse::<i64>().ok()?)?
            }
            Some(value) => value.parse::<i64>().ok()?,
        };
        *current = absolute;

        Some(Location::new(file, absolute))
    }

    /// Encode an absolute location relative to the cursor.
    pub fn encode(&mut self, location: &Location) -> EncodedLocation {
        let filename = if location.file == self.message_file {
            None
        } else {
            self.switch_file(&location.file);
            Some(location.file.clone())
        };
        self.first_in_message = false;

        let current = self.lines.entry(location.file.clone()).or_insert(0);
        // Deltas that do not fit fall back to an absolute line
        let line = match location.line.checked_sub(*current) {
            Some(delta) => format!("{:+}", delta),
            None => location.line.to_string(),
        };
        *current = location.line;

        EncodedLocation { filename, line }
    }

    fn switch_file(&mut self, filename: &str) {
        if self.first_in_message {
            self.current_file = filename.to_string();
        }
        self.message_file = filename.to_string();
    }
}
