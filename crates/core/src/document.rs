//! Scoped handle over an open PDF document.
//!
//! Parsing is delegated entirely to [lopdf](https://crates.io/crates/lopdf);
//! this module only exposes the small surface the converter needs: ordered
//! page numbers and per-page plain-text extraction.

use std::path::Path;

use crate::error::{ConvertError, Result};

/// An open PDF document.
///
/// The handle exclusively owns the parsed document for the duration of one
/// conversion and is released on drop, on every exit path. Page numbers are
/// 1-based and cached in ascending order at open time.
pub struct PdfDocument {
    inner: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Open and parse the PDF at `path`.
    ///
    /// Fails with [`ConvertError::DocumentOpen`] if the file cannot be read
    /// or is not a valid PDF. Nothing is written on failure.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = lopdf::Document::load(path).map_err(|source| ConvertError::DocumentOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_inner(inner))
    }

    /// Parse a PDF from an in-memory buffer.
    pub fn load_mem(bytes: &[u8]) -> Result<Self> {
        let inner = lopdf::Document::load_mem(bytes)?;
        Ok(Self::from_inner(inner))
    }

    fn from_inner(inner: lopdf::Document) -> Self {
        // BTreeMap keys are already ascending; collect once so page
        // iteration never re-walks the page tree.
        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();
        Self {
            inner,
            page_numbers,
        }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// The document's 1-based page numbers in ascending order.
    pub fn page_numbers(&self) -> &[u32] {
        &self.page_numbers
    }

    /// Extract the plain text of one page.
    ///
    /// Returns `None` when the page has no extractable text: blank pages and
    /// image-only pages extract to an empty or all-whitespace string, which
    /// counts as "no text". Text that passes the check is returned verbatim,
    /// untrimmed.
    pub fn extract_page_text(&self, page: u32) -> Result<Option<String>> {
        let text = self
            .inner
            .extract_text(&[page])
            .map_err(|source| ConvertError::Extraction { page, source })?;
        if text.trim().is_empty() {
            tracing::debug!(page, "no extractable text, skipping page");
            return Ok(None);
        }
        tracing::debug!(page, chars = text.len(), "extracted page text");
        Ok(Some(text))
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}
