use anyhow::{Context, Result};
use auxbib::latex::AuxDialect;
use auxbib::{extract_bibliography, ExtractOptions};
use clap::{ArgAction, Parser};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// auxbib: a bibliography generator for BibTeX and BibLaTeX/Biber
#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Auxiliary file (.aux) from LaTeX compilation
    aux_file: PathBuf,
    /// Directory to search recursively for .bib files
    bib_dir: PathBuf,
    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Substitute unicode Greek literals with (escaped) Greek math TeX commands
    #[arg(short, long)]
    substitute_unicode: bool,
    /// Assume BibLaTeX/Biber as the bibliography backend
    #[arg(short, long)]
    biblatex: bool,
    /// Substitute journal title abbreviations with their full names
    #[arg(short, long)]
    long_journal_titles: bool,
    /// Substitute full journal titles with their abbreviations
    #[arg(short, long)]
    abbreviate_journal_titles: bool,
    /// Set the url field of entries with a doi to the doi's resolver URL
    #[arg(short, long)]
    doi_to_url: bool,
    /// Journal name table (JSON); defaults to $AUXBIB_JOURNAL_NAMES or ~/.journal_names.json
    #[arg(short, long)]
    journal_names: Option<PathBuf>,
    /// Verbose logging
    #[arg(long)]
    verbose: bool,
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let options = ExtractOptions {
        aux_file: args.aux_file,
        bib_dir: args.bib_dir,
        dialect: if args.biblatex { AuxDialect::Biblatex } else { AuxDialect::Bibtex },
        substitute_unicode: args.substitute_unicode,
        long_journal_titles: args.long_journal_titles,
        short_journal_titles: args.abbreviate_journal_titles,
        doi_to_url: args.doi_to_url,
        journal_names: args.journal_names,
    };

    let bibliography = extract_bibliography(&options)
        .with_context(|| format!("Failed to extract entries cited in {:?}", options.aux_file))?;
    let output = bibliography.render();

    // Write output to file or stdout
    if let Some(output_file) = &args.output {
        fs::write(output_file, output)
            .with_context(|| format!("Failed to write output to {:?}", output_file))?;
        info!("Output written to {:?}", output_file);
    } else {
        io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("Failed to write output to stdout")?;
    }

    Ok(())
}
