//! PDF to Markdown conversion.
//!
//! Provides the main public API:
//! - `convert()` - one-shot conversion of a PDF file to a Markdown file
//! - `render_document()` - render an open document to a Markdown string
//! - `ConvertOptions` - conversion options (page header template)

use std::fs;
use std::path::Path;

use crate::document::PdfDocument;
use crate::error::{ConvertError, Result};

/// Page header label used by the original tool: `第 N 页` ("Page N").
pub const DEFAULT_PAGE_HEADER_TEMPLATE: &str = "第 {n} 页";

/// Options for PDF to Markdown conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Template for the bolded page header. `{n}` is replaced with the
    /// 1-based page number. Defaults to the original localized label; pass
    /// e.g. `"Page {n}"` for an English header.
    pub page_header_template: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            page_header_template: DEFAULT_PAGE_HEADER_TEMPLATE.to_string(),
        }
    }
}

/// Render one page section: blank line, delimiter, bolded header, delimiter,
/// blank line, then the extracted text verbatim (no trimming, no escaping of
/// Markdown special characters).
pub fn render_page_section(page: u32, text: &str, template: &str) -> String {
    let label = template.replace("{n}", &page.to_string());
    format!("\n\n---\n**{label}**\n---\n\n{text}")
}

/// Render a whole document to a Markdown string.
///
/// Pages are visited in ascending page-number order. Each page with
/// extractable text contributes exactly one section; pages without text
/// contribute nothing, not even a header. A zero-page document renders to
/// the empty string.
pub fn render_document(doc: &PdfDocument, options: &ConvertOptions) -> Result<String> {
    let mut markdown = String::new();
    for &page in doc.page_numbers() {
        if let Some(text) = doc.extract_page_text(page)? {
            markdown.push_str(&render_page_section(
                page,
                &text,
                &options.page_header_template,
            ));
        }
    }
    Ok(markdown)
}

/// Convert the PDF at `pdf_path` into a Markdown file at `md_path`.
///
/// Opens the document, renders every text-bearing page into an in-memory
/// buffer, releases the document, then writes the buffer to `md_path` as
/// UTF-8, overwriting any existing file there. The parent directory of
/// `md_path` must already exist.
///
/// On any failure nothing is written: a pre-existing file at `md_path` is
/// left untouched and no new file is created.
pub fn convert(pdf_path: &Path, md_path: &Path, options: &ConvertOptions) -> Result<()> {
    let doc = PdfDocument::open(pdf_path)?;
    let markdown = render_document(&doc, options)?;
    drop(doc);

    fs::write(md_path, &markdown).map_err(|source| ConvertError::Write {
        path: md_path.to_path_buf(),
        source,
    })?;
    tracing::info!(output = %md_path.display(), bytes = markdown.len(), "conversion complete");
    Ok(())
}
