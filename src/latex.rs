pub mod aux_file;
pub mod bibliography;
pub mod doi;
pub mod greek;
pub mod journals;
pub mod parser;

use once_cell::sync::Lazy;
use regex::Regex;

pub use aux_file::{parse_citation_keys, read_citation_keys, AuxDialect};
pub use bibliography::{BibEntry, Bibliography, ScanOptions};
pub use journals::{Direction, JournalNames};

// Commonly used regex patterns compiled once
pub(crate) static BIBTEX_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@[^{]*\{([^{]*)").expect("Invalid BibTeX entry regex pattern")
});
pub(crate) static BIBTEX_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_-]+)\s*=\s*(.*)$").expect("Invalid BibTeX field regex pattern")
});
