use thiserror::Error;

/// Errors from loading a `.ts` catalogue.
///
/// Any of these is fatal for the catalogue being loaded. Line numbers are
/// 1-based positions in the catalogue file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed XML at line {line}: {message}")]
    Xml { line: usize, message: String },

    #[error("document has no <TS> root element")]
    MissingRoot,

    #[error("unexpected root element <{found}> at line {line}, expected <TS>")]
    UnexpectedRoot { found: String, line: usize },

    #[error("<{element}> opened at line {line} is never closed")]
    Unclosed { element: String, line: usize },

    #[error("<message> at line {line} has no <source>")]
    MissingSource { line: usize },

    #[error("<context> at line {line} has no <name>")]
    MissingContextName { line: usize },

    #[error("invalid location line \"{value}\" at line {line}")]
    InvalidLine { value: String, line: usize },

    #[error("invalid <byte> value \"{value}\" at line {line}")]
    InvalidByte { value: String, line: usize },
}

impl ParseError {
    /// Line in the catalogue file the error points at, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MissingRoot => None,
            ParseError::Xml { line, .. }
            | ParseError::UnexpectedRoot { line, .. }
            | ParseError::Unclosed { line, .. }
            | ParseError::MissingSource { line }
            | ParseError::MissingContextName { line }
            | ParseError::InvalidLine { line, .. }
            | ParseError::InvalidByte { line, .. } => Some(*line),
        }
    }
}
