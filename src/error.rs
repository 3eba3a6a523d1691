use std::fmt;
use std::io;

/// Result type alias for INI operations
pub type ParseResult<T> = Result<T, IniError>;

/// Errors that can occur while loading, editing or saving an INI document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IniError {
    /// A line matches no known form (malformed header, missing `=`)
    InvalidFormat {
        line: String,
        line_number: Option<usize>,
    },

    /// Data appeared before the first section header
    NoGlobalDataAllowed {
        line: String,
        line_number: Option<usize>,
    },

    /// Section header or section name trims to nothing
    EmptySectionName {
        line: String,
        line_number: Option<usize>,
    },

    /// Key trims to nothing
    EmptyKey {
        line: String,
        line_number: Option<usize>,
    },

    /// Section declared twice in one load
    DuplicateSection {
        name: String,
        line_number: Option<usize>,
    },

    /// Key declared twice in one section
    DuplicateKey {
        key: String,
        line: String,
        line_number: Option<usize>,
    },

    /// Path does not end in `.ini`
    InvalidFileExtension { path: String, extension: String },

    /// File I/O error, passed through from the file system
    Io {
        path: String,
        kind: io::ErrorKind,
        message: String,
    },

    /// `save` was called on a document that was never loaded from a file
    NoSourcePath,
}

impl IniError {
    /// Create an invalid format error
    pub fn invalid_format(line: impl Into<String>) -> Self {
        IniError::InvalidFormat {
            line: line.into(),
            line_number: None,
        }
    }

    /// Create a global data error
    pub fn no_global_data(line: impl Into<String>) -> Self {
        IniError::NoGlobalDataAllowed {
            line: line.into(),
            line_number: None,
        }
    }

    /// Create an empty section name error
    pub fn empty_section_name(line: impl Into<String>) -> Self {
        IniError::EmptySectionName {
            line: line.into(),
            line_number: None,
        }
    }

    /// Create an empty key error
    pub fn empty_key(line: impl Into<String>) -> Self {
        IniError::EmptyKey {
            line: line.into(),
            line_number: None,
        }
    }

    /// Create a duplicate section error
    pub fn duplicate_section(name: impl Into<String>) -> Self {
        IniError::DuplicateSection {
            name: name.into(),
            line_number: None,
        }
    }

    /// Create a duplicate key error
    pub fn duplicate_key(key: impl Into<String>, line: impl Into<String>) -> Self {
        IniError::DuplicateKey {
            key: key.into(),
            line: line.into(),
            line_number: None,
        }
    }

    /// Create an invalid file extension error
    pub fn invalid_extension(path: impl Into<String>, extension: impl Into<String>) -> Self {
        IniError::InvalidFileExtension {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<String>, err: &io::Error) -> Self {
        IniError::Io {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Attach a 1-based line number to a parse error.
    ///
    /// Errors that are not tied to a line are returned unchanged.
    pub fn at_line(mut self, number: usize) -> Self {
        match &mut self {
            IniError::InvalidFormat { line_number, .. }
            | IniError::NoGlobalDataAllowed { line_number, .. }
            | IniError::EmptySectionName { line_number, .. }
            | IniError::EmptyKey { line_number, .. }
            | IniError::DuplicateSection { line_number, .. }
            | IniError::DuplicateKey { line_number, .. } => *line_number = Some(number),
            _ => {}
        }
        self
    }

    /// Line number of the offending input line, if known
    pub fn line_number(&self) -> Option<usize> {
        match self {
            IniError::InvalidFormat { line_number, .. }
            | IniError::NoGlobalDataAllowed { line_number, .. }
            | IniError::EmptySectionName { line_number, .. }
            | IniError::EmptyKey { line_number, .. }
            | IniError::DuplicateSection { line_number, .. }
            | IniError::DuplicateKey { line_number, .. } => *line_number,
            _ => None,
        }
    }

    /// Whether this is an I/O error caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, IniError::Io { kind, .. } if *kind == io::ErrorKind::NotFound)
    }
}

/// Writes ` at line N` when a line number is known
fn write_location(f: &mut fmt::Formatter<'_>, line_number: Option<usize>) -> fmt::Result {
    match line_number {
        Some(n) => write!(f, " at line {}", n),
        None => Ok(()),
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::InvalidFormat { line, line_number } => {
                write!(f, "Invalid INI format")?;
                write_location(f, *line_number)?;
                write!(f, ": {:?}", line)
            }
            IniError::NoGlobalDataAllowed { line, line_number } => {
                write!(f, "Global data is not supported")?;
                write_location(f, *line_number)?;
                write!(f, ": {:?}", line)
            }
            IniError::EmptySectionName { line, line_number } => {
                write!(f, "Section name can't be empty")?;
                write_location(f, *line_number)?;
                write!(f, ": {:?}", line)
            }
            IniError::EmptyKey { line, line_number } => {
                write!(f, "Key can't be empty")?;
                write_location(f, *line_number)?;
                write!(f, ": {:?}", line)
            }
            IniError::DuplicateSection { name, line_number } => {
                write!(f, "Section '{}' is declared more than once", name)?;
                write_location(f, *line_number)
            }
            IniError::DuplicateKey {
                key,
                line,
                line_number,
            } => {
                write!(f, "Key '{}' is declared more than once", key)?;
                write_location(f, *line_number)?;
                write!(f, ": {:?}", line)
            }
            IniError::InvalidFileExtension { path, extension } => {
                write!(
                    f,
                    "Invalid file extension '{}' for '{}': expected '.ini'",
                    extension, path
                )
            }
            IniError::Io { path, message, .. } => {
                write!(f, "I/O error for '{}': {}", path, message)
            }
            IniError::NoSourcePath => {
                write!(f, "Document was not loaded from a file and has no path to save to")
            }
        }
    }
}

impl std::error::Error for IniError {}

impl From<io::Error> for IniError {
    fn from(err: io::Error) -> Self {
        IniError::Io {
            path: String::new(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_sets_location() {
        let err = IniError::duplicate_key("k", "k = 2").at_line(3);
        assert_eq!(err.line_number(), Some(3));
        assert_eq!(err.to_string(), "Key 'k' is declared more than once at line 3: \"k = 2\"");
    }

    #[test]
    fn test_at_line_ignores_file_errors() {
        let err = IniError::invalid_extension("a.txt", "txt").at_line(7);
        assert_eq!(err.line_number(), None);
    }

    #[test]
    fn test_display_without_location() {
        let err = IniError::invalid_format("[open");
        assert_eq!(err.to_string(), "Invalid INI format: \"[open\"");
    }

    #[test]
    fn test_not_found_predicate() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(IniError::io("x.ini", &io_err).is_not_found());
        assert!(IniError::from(io_err).is_not_found());

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(!IniError::io("x.ini", &denied).is_not_found());
        assert!(!IniError::NoSourcePath.is_not_found());
    }
}
