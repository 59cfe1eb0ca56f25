use auxbib::error::AuxBibError;
use auxbib::latex::{parse_citation_keys, read_citation_keys, AuxDialect};
use std::path::Path;

fn fixture(file_name: &str) -> std::path::PathBuf {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf();
    path.push("tests");
    path.push("fixtures");
    path.push(file_name);
    path
}

#[test]
fn test_duplicate_keys_are_merged() {
    let content = "\\citation{a,b}\n\\citation{b}\n";
    let keys = parse_citation_keys(content, AuxDialect::Bibtex);
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_keys_are_sorted_and_unique() {
    let content = "\\citation{zeta,alpha}\n\\citation{mu}\n\\citation{alpha,zeta,beta}\n";
    let keys = parse_citation_keys(content, AuxDialect::Bibtex);
    assert_eq!(keys, vec!["alpha", "beta", "mu", "zeta"]);

    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted);
}

#[test]
fn test_revtex_control_and_empty_citations_are_skipped() {
    let content = "\\citation{REVTEX41Control}\r\n\\citation{apsrev41Control}\n\\citation{REVTEX42Control}\n\\citation{apsrev42Control}\n\\citation{}\n\\citation{real}\n";
    let keys = parse_citation_keys(content, AuxDialect::Bibtex);
    assert_eq!(keys, vec!["real"]);
}

#[test]
fn test_other_aux_commands_are_ignored() {
    let content = "\\relax\n\\bibstyle{plain}\n\\bibdata{refs}\n\\bibcite{key}{1}\n";
    assert!(parse_citation_keys(content, AuxDialect::Bibtex).is_empty());
}

#[test]
fn test_dialects_do_not_mix() {
    let content = "\\citation{bibtexkey}\n\\abx@aux@cite{biblatexkey}\n";
    assert_eq!(parse_citation_keys(content, AuxDialect::Bibtex), vec!["bibtexkey"]);
    assert_eq!(parse_citation_keys(content, AuxDialect::Biblatex), vec!["biblatexkey"]);
}

#[test]
fn test_biblatex_refsection_indirection() {
    let content = "\\abx@aux@cite{0}{second}\n\\abx@aux@cite{first}\n\\abx@aux@cite{}\n";
    let keys = parse_citation_keys(content, AuxDialect::Biblatex);
    assert_eq!(keys, vec!["first", "second"]);
}

#[test]
fn test_empty_tokens_are_dropped() {
    let content = "\\citation{a,,b,}\n";
    assert_eq!(parse_citation_keys(content, AuxDialect::Bibtex), vec!["a", "b"]);
}

#[test]
fn test_read_citation_keys_from_fixture() {
    let keys = read_citation_keys(&fixture("paper.aux"), AuxDialect::Bibtex).unwrap();
    assert_eq!(keys, vec!["jones2019", "missing2001", "smith2020"]);

    let keys = read_citation_keys(&fixture("paper_biblatex.aux"), AuxDialect::Biblatex).unwrap();
    assert_eq!(keys, vec!["jones2019", "smith2020"]);
}

#[test]
fn test_read_missing_aux_file() {
    let result = read_citation_keys(&fixture("does_not_exist.aux"), AuxDialect::Bibtex);
    assert!(matches!(result, Err(AuxBibError::Io { .. })));
}
