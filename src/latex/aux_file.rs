use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::error::AuxBibError;

/// Control citations written by REVTeX/apsrev styles, never real keys
const REVTEX_CONTROL_CITATIONS: [&str; 4] = [
    "\\citation{REVTEX41Control}",
    "\\citation{apsrev41Control}",
    "\\citation{REVTEX42Control}",
    "\\citation{apsrev42Control}",
];

/// Which bibliography backend wrote the `.aux` file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuxDialect {
    /// `\citation{key1,key2}`
    #[default]
    Bibtex,
    /// `\abx@aux@cite{key}` or `\abx@aux@cite{0}{key}`
    Biblatex,
}

impl AuxDialect {
    pub fn marker(self) -> &'static str {
        match self {
            AuxDialect::Bibtex => "\\citation{",
            AuxDialect::Biblatex => "\\abx@aux@cite{",
        }
    }

    fn empty_citation(self) -> &'static str {
        match self {
            AuxDialect::Bibtex => "\\citation{}",
            AuxDialect::Biblatex => "\\abx@aux@cite{}",
        }
    }
}

/// Collect the citation keys of an `.aux` file's content.
///
/// The result is sorted and free of duplicates.
pub fn parse_citation_keys(content: &str, dialect: AuxDialect) -> Vec<String> {
    let marker = dialect.marker();
    let mut keys = Vec::new();

    for line in content.lines() {
        let line = line.trim_end_matches('\r');

        if REVTEX_CONTROL_CITATIONS.contains(&line) || line == dialect.empty_citation() {
            continue;
        }

        let Some(start) = line.find(marker) else {
            continue;
        };
        let mut payload = &line[start + marker.len()..];

        // biblatex refsection indirection: \abx@aux@cite{0}{key}
        if let Some(idx) = payload.rfind("}{") {
            payload = &payload[idx + 2..];
        }

        let payload = payload.replace('}', "");
        keys.extend(
            payload
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        );
    }

    keys.sort();
    keys.dedup();
    keys
}

/// Read an `.aux` file and collect its citation keys
pub fn read_citation_keys(path: &Path, dialect: AuxDialect) -> Result<Vec<String>, AuxBibError> {
    let content = fs::read_to_string(path).map_err(|e| AuxBibError::io(path, e))?;
    let keys = parse_citation_keys(&content, dialect);

    info!("Found {} citation keys in {:?}", keys.len(), path);
    debug!("Citation keys: {:?}", keys);

    Ok(keys)
}
