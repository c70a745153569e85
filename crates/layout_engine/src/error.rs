//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Unsupported page size: {0}")]
    UnsupportedPageSize(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
