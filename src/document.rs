//! Document model for INI files.
//!
//! [`Document`] owns an ordered set of named [`Section`]s and drives the
//! per-line state machine that builds them from text. Comments and blank
//! lines are kept as line records so a parsed file can be written back with
//! its layout intact.

use crate::error::{IniError, ParseResult};
use crate::file;
use crate::options::ParseOptions;
use crate::parser::{IniParser, Line};
use crate::section::{LineRecord, Section};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, trace};

/// Loader state while walking the input lines
enum LoadState {
    /// No section header seen yet
    ExpectSection,
    /// Lines belong to the named section
    InSection(String),
}

/// An INI document: ordered, uniquely named sections.
///
/// # Examples
///
/// ```
/// use iniconf::Document;
///
/// # fn main() -> Result<(), iniconf::IniError> {
/// let mut doc = Document::parse("[server]\nhost = localhost\nport = 8080\n")?;
/// assert_eq!(doc.get("server", "port"), Some("8080"));
///
/// doc.set("server", "port", "9090")?;
/// doc.set("client", "timeout", "30")?;
/// assert_eq!(
///     doc.serialize(),
///     "[server]\nhost = localhost\nport = 9090\n\n[client]\ntimeout = 30\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Section names in declaration order
    section_names: Vec<String>,

    /// Section name -> section
    sections: HashMap<String, Section>,

    /// Comments and blanks before the first header
    preamble: Vec<LineRecord>,

    /// Parsing policy
    options: ParseOptions,

    /// File the document was last loaded from
    source_path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document with strict parse options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with custom parse options
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse a string into a new document with strict parse options
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut doc = Self::new();
        doc.load_from_str(text)?;
        Ok(doc)
    }

    /// Parsing policy in use
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Path the document was loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Drop all content. Options are kept.
    pub fn clear(&mut self) {
        self.section_names.clear();
        self.sections.clear();
        self.preamble.clear();
        self.source_path = None;
    }

    /// Replace the document content with the parsed `text`.
    ///
    /// On error the document is left empty; a partial load is never kept.
    pub fn load_from_str(&mut self, text: &str) -> ParseResult<()> {
        self.clear();

        if let Err(e) = self.load_lines(text) {
            debug!("INI load failed: {e}");
            self.clear();
            return Err(e);
        }

        debug!(
            sections = self.section_names.len(),
            "loaded INI document"
        );
        Ok(())
    }

    /// Replace the document content with the contents of an `.ini` file.
    ///
    /// Extension and I/O failures leave the document unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        let content = file::read(path)?;

        self.load_from_str(&content)?;
        self.source_path = Some(path.to_path_buf());
        debug!("loaded INI file {}", path.display());
        Ok(())
    }

    fn load_lines(&mut self, text: &str) -> ParseResult<()> {
        let mut state = LoadState::ExpectSection;

        let lines = text
            .lines()
            .enumerate()
            .skip_while(|(_, raw)| raw.trim().is_empty());

        for (index, raw) in lines {
            let line_number = index + 1;
            let line = IniParser::classify(raw, &self.options);
            trace!(line_number, ?line, "classified line");

            state = self
                .process_line(line, raw, state)
                .map_err(|e| e.at_line(line_number))?;
        }

        Ok(())
    }

    /// Apply one classified line and return the next loader state
    fn process_line(&mut self, line: Line<'_>, raw: &str, state: LoadState) -> ParseResult<LoadState> {
        match (line, state) {
            (Line::Header(name), _) => {
                let name = self.declare_section(name, raw)?;
                Ok(LoadState::InSection(name))
            }

            (Line::MalformedHeader, _) => Err(IniError::invalid_format(raw.trim())),

            (line, LoadState::ExpectSection) => match LineRecord::from_formatting(&line) {
                Some(record) => {
                    self.preamble.push(record);
                    Ok(LoadState::ExpectSection)
                }
                None => Err(IniError::no_global_data(raw.trim())),
            },

            (line, LoadState::InSection(name)) => {
                if let Some(section) = self.sections.get_mut(&name) {
                    section.apply(line, raw, &self.options)?;
                }
                Ok(LoadState::InSection(name))
            }
        }
    }

    /// Register a section header seen during a load
    fn declare_section(&mut self, name: &str, raw: &str) -> ParseResult<String> {
        if name.is_empty() {
            return Err(IniError::empty_section_name(raw.trim()));
        }

        if self.sections.contains_key(name) {
            if !self.options.allow_duplicate_sections {
                return Err(IniError::duplicate_section(name));
            }
            return Ok(name.to_string());
        }

        self.insert_section(name);
        Ok(name.to_string())
    }

    fn insert_section(&mut self, name: &str) {
        self.section_names.push(name.to_string());
        self.sections.insert(name.to_string(), Section::new());
    }

    /// Section names in declaration order
    pub fn section_names(&self) -> &[String] {
        &self.section_names
    }

    /// Snapshot of all data as section -> key -> value.
    ///
    /// The returned maps are copies; changing them does not touch the document.
    pub fn sections(&self) -> HashMap<String, HashMap<String, String>> {
        self.sections
            .iter()
            .map(|(name, section)| (name.clone(), section.to_map()))
            .collect()
    }

    /// Read-only view of one section
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Check if a section exists
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Sections in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.section_names
            .iter()
            .filter_map(|name| self.sections.get(name).map(|s| (name.as_str(), s)))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.section_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section_names.is_empty()
    }

    /// Get a value. `None` if either the section or the key is missing.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    /// Set or update a value, creating the section if needed.
    ///
    /// New sections are appended after all existing ones. Fails only when the
    /// section name is empty after trimming.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> ParseResult<()> {
        let name = section.trim();
        if name.is_empty() {
            return Err(IniError::empty_section_name(section));
        }

        if !self.sections.contains_key(name) {
            // Keep a blank line between the previous section and the new header
            let previous = self
                .section_names
                .last()
                .and_then(|last| self.sections.get_mut(last));
            if let Some(previous) = previous {
                previous.ensure_trailing_blank();
            }
            self.insert_section(name);
        }

        if let Some(target) = self.sections.get_mut(name) {
            target.set(key, value);
        }
        Ok(())
    }

    /// Remove a key from a section, returning its value
    pub fn remove_key(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections.get_mut(section)?.remove(key)
    }

    /// Remove a whole section
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let section = self.sections.remove(name)?;
        self.section_names.retain(|n| n != name);
        Some(section)
    }

    /// Serialize the document back to INI text
    pub fn serialize(&self) -> String {
        let mut output = String::new();

        for record in &self.preamble {
            if let LineRecord::Comment(text) = record {
                output.push_str(text);
            }
            output.push('\n');
        }

        for (name, section) in self.iter() {
            output.push_str(&format!("[{}]\n", name));
            for line in section.serialize_lines() {
                output.push_str(&line);
                output.push('\n');
            }
        }

        output
    }

    /// Write the serialized document to an `.ini` file, overwriting it
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        file::write(path, &self.serialize())?;
        debug!("saved INI file {}", path.display());
        Ok(())
    }

    /// Write the document back to the file it was loaded from
    pub fn save(&self) -> ParseResult<()> {
        let path = self.source_path.as_ref().ok_or(IniError::NoSourcePath)?;
        self.save_to_file(path)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.serialize(), "");
        assert!(doc.section_names().is_empty());
        assert!(doc.sections().is_empty());
        assert_eq!(doc.get("any", "key"), None);
    }

    #[test]
    fn test_load_sections_in_order() {
        let doc = Document::parse("[b]\nx = 1\n[a]\ny = 2\n").unwrap();
        assert_eq!(doc.section_names(), &["b", "a"]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_leading_blanks_and_comments() {
        let doc = Document::parse("\n\n; header comment\n\n[a]\nk = v\n").unwrap();
        assert_eq!(doc.preamble, vec![
            LineRecord::Comment("; header comment".to_string()),
            LineRecord::Blank,
        ]);
        assert_eq!(doc.serialize(), "; header comment\n\n[a]\nk = v\n");
    }

    #[test]
    fn test_error_line_numbers() {
        let err = Document::parse("\n[a]\nk = 1\nbroken\n").unwrap_err();
        assert_eq!(
            err,
            IniError::InvalidFormat {
                line: "broken".to_string(),
                line_number: Some(4),
            }
        );
    }

    #[test]
    fn test_malformed_header_before_section() {
        let err = Document::parse("[open").unwrap_err();
        assert!(matches!(err, IniError::InvalidFormat { .. }));
    }

    #[test]
    fn test_failed_load_resets_document() {
        let mut doc = Document::parse("[keep]\nk = v\n").unwrap();
        assert!(doc.load_from_str("[a]\nk = 1\nk = 2\n").is_err());
        assert!(doc.is_empty());
        assert!(doc.preamble.is_empty());
        assert_eq!(doc.serialize(), "");
    }

    #[test]
    fn test_permissive_duplicate_sections_merge() {
        let mut doc = Document::with_options(ParseOptions::permissive());
        doc.load_from_str("[a]\nx = 1\n[b]\n[a]\ny = 2\nx = 3\n").unwrap();

        assert_eq!(doc.section_names(), &["a", "b"]);
        assert_eq!(doc.get("a", "x"), Some("3"));
        assert_eq!(doc.get("a", "y"), Some("2"));
    }

    #[test]
    fn test_set_creates_section_with_separator() {
        let mut doc = Document::parse("[a]\nk = v").unwrap();
        doc.set(" b ", "x", "1").unwrap();

        assert_eq!(doc.section_names(), &["a", "b"]);
        assert_eq!(doc.serialize(), "[a]\nk = v\n\n[b]\nx = 1\n");
    }

    #[test]
    fn test_set_rejects_empty_section() {
        let mut doc = Document::new();
        assert_eq!(
            doc.set("   ", "k", "v"),
            Err(IniError::empty_section_name("   "))
        );
        assert!(doc.is_empty());
    }

    #[test]
    fn test_remove_section() {
        let mut doc = Document::parse("[a]\n[b]\nk = v\n[c]\n").unwrap();
        let removed = doc.remove_section("b").unwrap();
        assert_eq!(removed.get("k"), Some("v"));
        assert_eq!(doc.section_names(), &["a", "c"]);
        assert!(doc.remove_section("b").is_none());
    }

    #[test]
    fn test_save_without_source_path() {
        let doc = Document::new();
        assert_eq!(doc.save(), Err(IniError::NoSourcePath));
    }

    #[test]
    fn test_display_matches_serialize() {
        let doc: Document = "[a]\n; note\nk = v\n".parse().unwrap();
        assert_eq!(doc.to_string(), doc.serialize());
    }
}
