//! Error types for PDF to Markdown conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for conversion operations.
///
/// Every variant is fatal for the invocation that produced it: there is no
/// retry and no partial output. A failed conversion never creates or
/// modifies the destination file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to open PDF document {path}: {source}")]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("failed to parse PDF document: {0}")]
    DocumentParse(#[from] lopdf::Error),

    #[error("failed to extract text from page {page}: {source}")]
    Extraction {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
