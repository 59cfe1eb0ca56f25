use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::AuxBibError;
use crate::latex::greek::replace_greek;
use crate::latex::BIBTEX_ENTRY_REGEX;

/// Per-line options applied while scanning `.bib` files
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Replace unicode Greek letters in field lines with TeX math commands
    pub substitute_unicode: bool,
}

/// One extracted bibliography record, kept as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub key: String,
    pub text: String,
}

impl BibEntry {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Extracted records in output order
#[derive(Default)]
pub struct Bibliography {
    pub entries: Vec<BibEntry>,
}

impl fmt::Debug for Bibliography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bibliography")
            .field("entries_count", &self.entries.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl fmt::Display for Bibliography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            f.write_str(&entry.text)?;
        }
        Ok(())
    }
}

/// Key of a record-start line such as `@article{key,`.
///
/// The key is whatever sits between the first `{` and the next `{`, with
/// surrounding commas and whitespace stripped.
pub fn entry_key(line: &str) -> Option<&str> {
    let captures = BIBTEX_ENTRY_REGEX.captures(line)?;
    let key = captures.get(1)?.as_str().trim_matches(',').trim();
    Some(key)
}

/// Scan the content of one `.bib` file and return the wanted records in file order.
///
/// Records must close with a line holding a lone `}`; anything else yields
/// truncated or merged records rather than an error.
pub fn scan_bib_content(content: &str, wanted: &HashSet<&str>, options: &ScanOptions) -> Vec<BibEntry> {
    let mut found = Vec::new();
    let mut current: Option<BibEntry> = None;

    for line in content.lines() {
        let sline = line.trim();
        if sline.is_empty() {
            continue;
        }

        if sline.starts_with('@') {
            if let Some(key) = entry_key(sline).filter(|key| wanted.contains(key)) {
                if let Some(unclosed) = current.take() {
                    debug!("Dropping unclosed entry '{}'", unclosed.key);
                }
                current = Some(BibEntry::new(key, format!("{}\n", sline)));
                continue;
            }
        }

        let Some(entry) = current.as_mut() else {
            continue;
        };

        if sline.starts_with('@') {
            entry.text.push_str(sline);
            entry.text.push('\n');
        } else if sline == "}" {
            entry.text.push_str("}\n\n");
            if let Some(done) = current.take() {
                found.push(done);
            }
        } else if sline.starts_with('%') {
            // commented out field
        } else {
            entry.text.push('\t');
            if options.substitute_unicode {
                entry.text.push_str(&replace_greek(sline));
            } else {
                entry.text.push_str(sline);
            }
            entry.text.push('\n');
        }
    }

    if let Some(unclosed) = current {
        warn!("Entry '{}' is never closed by a lone '}}' line", unclosed.key);
    }

    found
}

impl Bibliography {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: BibEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BibEntry> {
        self.entries.iter()
    }

    /// Concatenated record text, ready to be written out
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Extract the records matching `keys` from `bib_files`.
    ///
    /// Output is ordered by key first, then by file, then by position in the
    /// file. Each file is read once and its matching records indexed by key.
    pub fn extract(keys: &[String], bib_files: &[PathBuf], options: &ScanOptions) -> Result<Self, AuxBibError> {
        let wanted: HashSet<&str> = keys.iter().map(String::as_str).collect();
        let mut index: HashMap<String, Vec<BibEntry>> = HashMap::new();

        for bib_file in bib_files {
            let content = fs::read_to_string(bib_file).map_err(|e| AuxBibError::io(bib_file, e))?;
            let found = scan_bib_content(&content, &wanted, options);
            debug!("Found {} matching entries in {:?}", found.len(), bib_file);
            for entry in found {
                index.entry(entry.key.clone()).or_default().push(entry);
            }
        }

        let mut bibliography = Self::new();
        for key in keys {
            match index.remove(key.as_str()) {
                Some(entries) => bibliography.entries.extend(entries),
                None => warn!("No entry found for citation key '{}'", key),
            }
        }

        info!("Extracted {} entries for {} citation keys", bibliography.len(), keys.len());
        Ok(bibliography)
    }
}
