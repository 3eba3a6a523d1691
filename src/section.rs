//! A single INI section.
//!
//! A [`Section`] keeps two views of its content: the key -> value map used for
//! lookups, and the ordered [`LineRecord`] list used to reproduce comments,
//! blank lines and key order when the section is written back out.

use crate::error::{IniError, ParseResult};
use crate::options::ParseOptions;
use crate::parser::{IniParser, Line};
use std::collections::HashMap;

/// One entry in a section's serialization order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRecord {
    /// Blank line
    Blank,

    /// Comment line, including its marker
    Comment(String),

    /// Reference to a key whose current value is emitted on serialization
    Key(String),
}

impl LineRecord {
    /// Build the record for a formatting line, if it is one
    pub(crate) fn from_formatting(line: &Line<'_>) -> Option<Self> {
        match line {
            Line::Blank => Some(LineRecord::Blank),
            Line::Comment(text) => Some(LineRecord::Comment(text.to_string())),
            _ => None,
        }
    }
}

/// An ordered group of key-value pairs plus its formatting lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Keys, comments and blanks in source order
    records: Vec<LineRecord>,

    /// Current value of every key in `records`
    values: HashMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw line using the default (strict) parse options.
    ///
    /// # Examples
    ///
    /// ```
    /// use iniconf::Section;
    ///
    /// let mut section = Section::new();
    /// section.add_line("; database settings").unwrap();
    /// section.add_line("url = postgres://db?sslmode=require").unwrap();
    ///
    /// assert_eq!(section.get("url"), Some("postgres://db?sslmode=require"));
    /// assert!(section.add_line("no separator").is_err());
    /// ```
    pub fn add_line(&mut self, raw: &str) -> ParseResult<()> {
        self.add_line_with(raw, &ParseOptions::default())
    }

    /// Add one raw line under the given parse options.
    ///
    /// Section headers are rejected as [`IniError::InvalidFormat`]; they
    /// belong to the document, not to a section.
    pub fn add_line_with(&mut self, raw: &str, options: &ParseOptions) -> ParseResult<()> {
        let line = IniParser::classify(raw, options);
        self.apply(line, raw, options)
    }

    /// Apply an already classified line
    pub(crate) fn apply(&mut self, line: Line<'_>, raw: &str, options: &ParseOptions) -> ParseResult<()> {
        if let Some(record) = LineRecord::from_formatting(&line) {
            self.records.push(record);
            return Ok(());
        }

        match line {
            Line::Pair { key, value } => {
                if key.is_empty() && !options.allow_empty_keys {
                    return Err(IniError::empty_key(raw.trim()));
                }

                if let Some(existing) = self.values.get_mut(key) {
                    if !options.allow_duplicate_keys {
                        return Err(IniError::duplicate_key(key, raw.trim()));
                    }
                    // Later value wins, position stays with the first declaration
                    *existing = value.to_string();
                    return Ok(());
                }

                self.records.push(LineRecord::Key(key.to_string()));
                self.values.insert(key.to_string(), value.to_string());
                Ok(())
            }
            _ => Err(IniError::invalid_format(raw.trim())),
        }
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Set or update a value.
    ///
    /// Key and value are trimmed. New keys are appended after the existing
    /// lines; existing keys keep their position.
    pub fn set(&mut self, key: &str, value: &str) {
        let key = key.trim();
        let value = value.trim().to_string();

        if let Some(existing) = self.values.get_mut(key) {
            *existing = value;
            return;
        }

        self.records.push(LineRecord::Key(key.to_string()));
        self.values.insert(key.to_string(), value);
    }

    /// Remove a key and its line, returning the old value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let value = self.values.remove(key)?;
        self.records
            .retain(|record| !matches!(record, LineRecord::Key(k) if k == key));
        Some(value)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in line order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|record| match record {
            LineRecord::Key(key) => Some(key.as_str()),
            _ => None,
        })
    }

    /// Key-value pairs in line order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value.as_str())))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All line records, formatting included
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Snapshot of the key -> value map
    pub fn to_map(&self) -> HashMap<String, String> {
        self.values.clone()
    }

    /// Append a blank line unless the section already ends with one
    pub(crate) fn ensure_trailing_blank(&mut self) {
        if !matches!(self.records.last(), Some(LineRecord::Blank)) {
            self.records.push(LineRecord::Blank);
        }
    }

    /// Render the section body (without its header) as text lines
    pub fn serialize_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| match record {
                LineRecord::Blank => String::new(),
                LineRecord::Comment(text) => text.clone(),
                LineRecord::Key(key) => {
                    let value = self.values.get(key).map_or("", |v| v.as_str());
                    if value.is_empty() {
                        format!("{} =", key)
                    } else {
                        format!("{} = {}", key, value)
                    }
                }
            })
            .collect()
    }
}
