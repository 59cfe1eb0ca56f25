use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AuxBibError;
use crate::latex::Bibliography;

/// Environment variable naming the journal name table
pub const JOURNAL_NAMES_ENV: &str = "AUXBIB_JOURNAL_NAMES";
/// File name of the table looked up in the home directory
pub const DEFAULT_JOURNAL_NAMES_FILE: &str = ".journal_names.json";

/// Which way journal names are rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Abbreviation to full title
    ShortToLong,
    /// Full title to abbreviation
    LongToShort,
}

/// Bidirectional table of journal titles and their abbreviations.
///
/// Both mappings keep the order of the source document.
#[derive(Debug, Clone, Default)]
pub struct JournalNames {
    pub long2short: Vec<(String, String)>,
    pub short2long: Vec<(String, String)>,
}

fn read_mapping(root: &Value, name: &str) -> Result<Vec<(String, String)>, String> {
    let object = root
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| format!("missing top-level object '{}'", name))?;

    object
        .iter()
        .map(|(from, to)| {
            to.as_str()
                .map(|to| (from.clone(), to.to_string()))
                .ok_or_else(|| format!("value for '{}' in '{}' is not a string", from, name))
        })
        .collect()
}

impl JournalNames {
    pub fn new(long2short: Vec<(String, String)>, short2long: Vec<(String, String)>) -> Self {
        Self { long2short, short2long }
    }

    /// Parse a table of the form `{"long2short": {...}, "short2long": {...}}`
    pub fn from_json_str(content: &str) -> Result<Self, AuxBibError> {
        Self::from_json_str_at(content, Path::new("<memory>"))
    }

    fn from_json_str_at(content: &str, path: &Path) -> Result<Self, AuxBibError> {
        let root: Value = serde_json::from_str(content)?;
        let invalid = |reason: String| AuxBibError::InvalidJournalNames {
            path: path.to_path_buf(),
            reason,
        };

        let long2short = read_mapping(&root, "long2short").map_err(invalid)?;
        let short2long = read_mapping(&root, "short2long").map_err(invalid)?;
        Ok(Self::new(long2short, short2long))
    }

    /// Load the table from a JSON file
    pub fn load(path: &Path) -> Result<Self, AuxBibError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AuxBibError::JournalNamesNotFound(path.to_path_buf()),
            _ => AuxBibError::io(path, e),
        })?;
        let names = Self::from_json_str_at(&content, path)?;
        info!(
            "Loaded {} journal abbreviations and {} full titles from {:?}",
            names.long2short.len(),
            names.short2long.len(),
            path
        );
        Ok(names)
    }

    /// Where to load the table from: an explicit path, then `AUXBIB_JOURNAL_NAMES`,
    /// then `~/.journal_names.json`.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, AuxBibError> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(JOURNAL_NAMES_ENV) {
            return Ok(PathBuf::from(path));
        }
        std::env::var("HOME")
            .map(|home| Path::new(&home).join(DEFAULT_JOURNAL_NAMES_FILE))
            .map_err(|_| AuxBibError::NoJournalNamesPath)
    }

    fn mapping(&self, direction: Direction) -> &[(String, String)] {
        match direction {
            Direction::ShortToLong => &self.short2long,
            Direction::LongToShort => &self.long2short,
        }
    }

    /// Swap journal names in one record.
    ///
    /// Labels are matched as `{label}` or `"label"` and replaced in the same
    /// delimiter style. This is plain substring replacement, so a label inside
    /// another field is rewritten as well.
    ///
    /// Known limitation: every candidate is applied to the original text, so
    /// when several different labels match only the last one is kept.
    pub fn substitute(&self, text: &str, direction: Direction) -> String {
        let mut substituted = text.to_string();

        for (from, to) in self.mapping(direction) {
            let from_braces = format!("{{{}}}", from);
            if text.contains(&from_braces) {
                debug!("Replacing {} with {{{}}}", from_braces, to);
                substituted = text.replace(&from_braces, &format!("{{{}}}", to));
            }

            let from_quotes = format!("\"{}\"", from);
            if text.contains(&from_quotes) {
                debug!("Replacing {} with \"{}\"", from_quotes, to);
                substituted = text.replace(&from_quotes, &format!("\"{}\"", to));
            }
        }

        substituted
    }
}

impl Bibliography {
    /// Swap journal names in every extracted record
    pub fn substitute_journal_names(&mut self, names: &JournalNames, direction: Direction) {
        for entry in &mut self.entries {
            entry.text = names.substitute(&entry.text, direction);
        }
    }
}
