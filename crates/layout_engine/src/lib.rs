//! Layout Engine - Grid placement and pagination for worksheets
//!
//! This crate maps worksheet settings onto a deterministic visual arrangement:
//! row-major placement of problems into grid cells, page sizes, and chunking of
//! a problem set into numbered pages. Every function here is a pure transform
//! of its inputs.

mod error;
mod geometry;
mod grid_layout;
mod page_size;
mod paginator;

pub use error::*;
pub use geometry::*;
pub use grid_layout::*;
pub use page_size::*;
pub use paginator::*;
