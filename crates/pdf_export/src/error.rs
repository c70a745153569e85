//! Error and warning types for PDF export

use crate::pdf::PdfError;
use crate::SurfaceId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Settings rejected before any page was drawn
    #[error("Invalid export configuration: {0}")]
    Configuration(String),

    #[error("Export cancelled")]
    Cancelled,

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Non-fatal problem recorded while composing a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportWarning {
    /// The rasterizer produced nothing for a page surface
    #[error("Page {page_index}: no image could be captured from {surface}")]
    RenderUnavailable { page_index: usize, surface: SurfaceId },

    /// The captured image cannot be placed on a page
    #[error("Page {page_index}: invalid image ({reason})")]
    InvalidImage { page_index: usize, reason: String },

    /// Every page was skipped; the document holds a single blank page
    #[error("No pages were exported; the document contains one blank page")]
    EmptyDocument,
}
