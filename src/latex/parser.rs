use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::AuxBibError;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

/// Find all BibTeX files below a directory, sorted by path string
pub fn find_bib_files(dir: &Path) -> Result<Vec<PathBuf>, AuxBibError> {
    if !dir.is_dir() {
        return Err(AuxBibError::NotADirectory(dir.to_path_buf()));
    }

    let mut bib_files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.path().is_file() &&
            entry.path().extension().map_or(false, |ext| ext == "bib")
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    bib_files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    if bib_files.is_empty() {
        warn!("No .bib files found below {:?}", dir);
    } else {
        info!("Found {} .bib files below {:?}", bib_files.len(), dir);
    }
    for file in &bib_files {
        debug!("Searching {:?}", file);
    }

    Ok(bib_files)
}
