//! marcador - PDF to Markdown conversion.
//!
//! Extracts the plain text of each page of a PDF (via lopdf) and writes it
//! to a Markdown file with page-boundary markers:
//!
//! ```text
//!
//! ---
//! **第 1 页**
//! ---
//!
//! <text of page 1>
//! ```
//!
//! Pages without extractable text are skipped silently.

pub mod converter;
pub mod document;
pub mod error;

pub use converter::{ConvertOptions, DEFAULT_PAGE_HEADER_TEMPLATE, convert, render_document};
pub use document::PdfDocument;
pub use error::{ConvertError, Result};
