//! PDF Export - Composition of worksheet pages into a PDF document
//!
//! Each worksheet page is rasterized by an injected [`Rasterizer`] and embedded
//! as one image per PDF page, with optional page numbering. Pages are processed
//! strictly one at a time because the rasterizer captures a single shared
//! surface.
//!
//! # Architecture
//!
//! - `pdf`: PDF object model, writer, content streams, fonts, images
//! - `settings`: page size, margins, numbering, page selection
//! - `options`: document metadata and compression
//! - `raster`: rasterizer boundary and rendered images
//! - `placement`: margin and numbering geometry
//! - `composer`: incremental, synchronous document composition
//! - `exporter`: sequential async export pipeline

mod composer;
mod error;
mod exporter;
mod options;
pub mod pdf;
mod placement;
mod raster;
mod settings;

pub use composer::*;
pub use error::*;
pub use exporter::*;
pub use options::*;
pub use placement::*;
pub use raster::*;
pub use settings::*;

/// File name used when saving an exported worksheet
pub const DEFAULT_FILE_NAME: &str = "math-worksheet.pdf";
