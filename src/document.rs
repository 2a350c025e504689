//! In-memory INI document built from reader hooks.
//!
//! The reader itself is stateless; this handler supplies the "current
//! section" tracking needed to group keys under their headers. Entries are
//! stored verbatim and in order: duplicate keys and repeated section headers
//! are kept, not merged.

use mini_ini_reader::{IniHandler, ReadReport, read_lines};
use serde::Serialize;

/// A `key=value` entry, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IniEntry {
    pub key: String,
    pub value: String,
}

/// One section header and the entries that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IniSection {
    /// Normalized section path (`a/b/c`); `""` for keys before any header
    pub path: String,
    pub entries: Vec<IniEntry>,
}

impl IniSection {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            entries: Vec::new(),
        }
    }

    /// Value of the first entry with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Sections and comments collected from a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IniDocument {
    sections: Vec<IniSection>,
    comments: Vec<String>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from already-split lines.
    ///
    /// The report records which lines were not recognized; those lines
    /// contribute nothing to the document.
    pub fn from_lines<I, S>(lines: I) -> (Self, ReadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut document = Self::new();
        let report = read_lines(lines, &mut document);
        log::debug!(
            "Built INI document with {} sections and {} comments",
            document.sections.len(),
            document.comments.len()
        );
        (document, report)
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// First section with the given path.
    pub fn section(&self, path: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.path == path)
    }

    /// Value of `key` in the first section named `path`.
    pub fn get(&self, path: &str, key: &str) -> Option<&str> {
        self.section(path).and_then(|s| s.get(key))
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    fn current_section(&mut self) -> &mut IniSection {
        if self.sections.is_empty() {
            self.sections.push(IniSection::new(""));
        }
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}

impl IniHandler for IniDocument {
    fn on_comment(&mut self, line: &str) {
        self.comments.push(line.to_string());
    }

    fn on_section(&mut self, path: &str) {
        self.sections.push(IniSection::new(path));
    }

    fn on_key_value(&mut self, key: &str, value: &str) {
        self.current_section().entries.push(IniEntry {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
}
