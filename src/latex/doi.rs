use log::debug;

use crate::latex::{Bibliography, BIBTEX_FIELD_REGEX};

/// Resolver prefixed to a bare DOI to build its URL
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Lowercased field name of a `name = value` line
fn field_name(line: &str) -> Option<String> {
    BIBTEX_FIELD_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().to_lowercase())
}

/// Raw value of a `name = value` line
fn field_value(line: &str) -> Option<&str> {
    BIBTEX_FIELD_REGEX
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|value| value.as_str())
}

/// Strip the field separator, then quoting, braces and whitespace from a raw value
fn strip_value(raw: &str) -> String {
    raw.trim_end()
        .trim_end_matches(',')
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '"') && !c.is_whitespace())
        .collect()
}

/// Point the `url` field of a record at the resolver URL of its `doi` field.
///
/// Records without a `doi` field come back unchanged. An existing `url` line
/// is overwritten, otherwise a new one goes just before the closing line.
pub fn doi_to_url(record: &str) -> String {
    let mut lines: Vec<String> = record
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    let doi = lines
        .iter()
        .find(|line| field_name(line).as_deref() == Some("doi"))
        .and_then(|line| field_value(line))
        .map(strip_value);

    let Some(doi) = doi else {
        return record.to_string();
    };

    let url_line = format!("\turl = {{{}{}}}", DOI_RESOLVER, doi);
    debug!("Setting url from doi {}", doi);

    match lines
        .iter()
        .position(|line| field_name(line).as_deref() == Some("url"))
    {
        Some(idx) => lines[idx] = url_line,
        None => {
            let closing = lines.len().saturating_sub(1);
            lines.insert(closing, url_line);
        }
    }

    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        if !line.ends_with(',') {
            line.push(',');
        }
    }

    let mut output = lines.join("\n");
    output.push_str("\n\n");
    output
}

impl Bibliography {
    /// Synthesize `url` fields from `doi` fields in every extracted record
    pub fn doi_to_url(&mut self) {
        for entry in &mut self.entries {
            entry.text = doi_to_url(&entry.text);
        }
    }
}
