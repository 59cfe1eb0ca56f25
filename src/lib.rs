pub mod error;
pub mod latex;

use log::info;
use std::path::PathBuf;

use error::AuxBibError;
use latex::parser::find_bib_files;
use latex::{read_citation_keys, AuxDialect, Bibliography, Direction, JournalNames, ScanOptions};

/// Everything a single extraction run needs to know
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// `.aux` file from a LaTeX run
    pub aux_file: PathBuf,
    /// Directory searched recursively for `.bib` files
    pub bib_dir: PathBuf,
    pub dialect: AuxDialect,
    pub substitute_unicode: bool,
    /// Expand abbreviated journal titles
    pub long_journal_titles: bool,
    /// Abbreviate full journal titles
    pub short_journal_titles: bool,
    pub doi_to_url: bool,
    /// Journal name table; see [`JournalNames::resolve_path`] for the fallbacks
    pub journal_names: Option<PathBuf>,
}

impl ExtractOptions {
    pub fn new(aux_file: impl Into<PathBuf>, bib_dir: impl Into<PathBuf>) -> Self {
        Self {
            aux_file: aux_file.into(),
            bib_dir: bib_dir.into(),
            ..Default::default()
        }
    }

    fn needs_journal_names(&self) -> bool {
        self.long_journal_titles || self.short_journal_titles
    }
}

/// Extract and rewrite the entries cited in `options.aux_file`
pub fn extract_bibliography(options: &ExtractOptions) -> Result<Bibliography, AuxBibError> {
    let keys = read_citation_keys(&options.aux_file, options.dialect)?;
    let bib_files = find_bib_files(&options.bib_dir)?;

    let scan_options = ScanOptions {
        substitute_unicode: options.substitute_unicode,
    };
    let mut bibliography = Bibliography::extract(&keys, &bib_files, &scan_options)?;

    if options.needs_journal_names() {
        let path = JournalNames::resolve_path(options.journal_names.as_deref())?;
        let names = JournalNames::load(&path)?;

        if options.long_journal_titles {
            info!("Expanding journal abbreviations");
            bibliography.substitute_journal_names(&names, Direction::ShortToLong);
        }
        if options.short_journal_titles {
            info!("Abbreviating journal titles");
            bibliography.substitute_journal_names(&names, Direction::LongToShort);
        }
    }

    if options.doi_to_url {
        info!("Synthesizing url fields from doi fields");
        bibliography.doi_to_url();
    }

    Ok(bibliography)
}
