use auxbib::latex::doi::{doi_to_url, DOI_RESOLVER};
use auxbib::latex::{BibEntry, Bibliography};

#[test]
fn test_appends_url_before_closing_line() {
    let record = "@article{a,\n\ttitle = {T},\n\tdoi = {10.1000/xyz123}\n}\n\n";
    let expected = format!(
        "@article{{a,\n\ttitle = {{T}},\n\tdoi = {{10.1000/xyz123}},\n\turl = {{{}10.1000/xyz123}},\n}}\n\n",
        DOI_RESOLVER
    );
    assert_eq!(doi_to_url(record), expected);
}

#[test]
fn test_every_line_but_the_last_ends_with_comma() {
    let record = "@article{a,\n\tdoi = \"10.1000/abc\"\n\tyear = {2000}\n}\n\n";
    let output = doi_to_url(record);
    let lines: Vec<&str> = output.lines().filter(|l| !l.is_empty()).collect();

    let (last, rest) = lines.split_last().unwrap();
    assert_eq!(*last, "}");
    assert!(rest.iter().all(|line| line.ends_with(',')));
    assert!(output.ends_with("}\n\n"));
}

#[test]
fn test_overwrites_existing_url() {
    let record = "@article{a,\n\tURL = {http://old.example.com},\n\tDOI = { 10.1000/ABC },\n\tyear = {2000}\n}\n\n";
    assert_eq!(
        doi_to_url(record),
        "@article{a,\n\turl = {https://doi.org/10.1000/ABC},\n\tDOI = { 10.1000/ABC },\n\tyear = {2000},\n}\n\n"
    );
}

#[test]
fn test_field_names_ignore_case_and_spacing() {
    let record = "@article{a,\n\tDoi    =   \"10.1/x\",\n}\n\n";
    assert!(doi_to_url(record).contains("\turl = {https://doi.org/10.1/x}"));
}

#[test]
fn test_record_without_doi_is_unchanged() {
    let record = "@article{a,\n\ttitle = {T},\n\turl = {http://example.com}\n}\n\n";
    assert_eq!(doi_to_url(record), record);
}

#[test]
fn test_doi_inside_other_field_is_not_a_doi_field() {
    let record = "@article{a,\n\tnote = {doi = 10.1/x}\n}\n\n";
    assert_eq!(doi_to_url(record), record);
}

#[test]
fn test_bibliography_doi_to_url() {
    let mut bibliography = Bibliography::new();
    bibliography.push(BibEntry::new("a", "@article{a,\n\tdoi = {10.1/a}\n}\n\n"));
    bibliography.push(BibEntry::new("b", "@article{b,\n\tyear = {2000}\n}\n\n"));

    bibliography.doi_to_url();

    assert_eq!(
        bibliography.entries[0].text,
        "@article{a,\n\tdoi = {10.1/a},\n\turl = {https://doi.org/10.1/a},\n}\n\n"
    );
    assert_eq!(bibliography.entries[1].text, "@article{b,\n\tyear = {2000}\n}\n\n");
}

#[test]
fn test_comma_inside_doi_is_kept() {
    let record = "@article{a,\n\tdoi = {10.1000/a,b}\n}\n\n";
    assert_eq!(
        doi_to_url(record),
        "@article{a,\n\tdoi = {10.1000/a,b},\n\turl = {https://doi.org/10.1000/a,b},\n}\n\n"
    );
}
