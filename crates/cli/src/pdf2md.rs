//! pdf2md - Convert a PDF file to Markdown
//!
//! A command line tool that extracts the text of each page of a PDF and
//! writes it to a Markdown file with page-boundary headers.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use marcador_core::{ConvertOptions, DEFAULT_PAGE_HEADER_TEMPLATE, convert};

/// A command line tool for converting a PDF file to a Markdown file with
/// one delimited section per text-bearing page.
#[derive(Parser, Debug)]
#[command(name = "pdf2md")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the PDF file to convert
    pdf: PathBuf,

    /// Output Markdown path (default: the input path with a .md extension)
    #[arg(short = 'o', long)]
    outfile: Option<PathBuf>,

    /// Page header label template; `{n}` is replaced with the page number
    #[arg(long = "header-template", default_value = DEFAULT_PAGE_HEADER_TEMPLATE)]
    header_template: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// Default output path: the input path with its extension replaced by `.md`.
fn default_outfile(pdf: &Path) -> PathBuf {
    pdf.with_extension("md")
}

fn run(args: &Args) -> anyhow::Result<PathBuf> {
    let outfile = args
        .outfile
        .clone()
        .unwrap_or_else(|| default_outfile(&args.pdf));
    let options = ConvertOptions {
        page_header_template: args.header_template.clone(),
    };
    convert(&args.pdf, &outfile, &options)?;
    Ok(outfile)
}

fn main() {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    // Existence is checked here, before conversion begins; the core
    // operation itself performs no existence check.
    if !args.pdf.exists() {
        eprintln!("PDF file not found: {}", args.pdf.display());
        std::process::exit(1);
    }

    match run(&args) {
        Ok(outfile) => {
            println!("Conversion complete. Markdown saved to: {}", outfile.display());
        }
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
