//! Minimal PDF writer
//!
//! Only the subset needed for worksheet export: image XObjects, Helvetica
//! text, and a flat page tree.
//!
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `writer`: object numbering, cross-reference table, trailer
//! - `content`: content stream operators
//! - `document`: catalog, page tree, page and info dictionaries
//! - `fonts`: standard Type1 fonts and Helvetica metrics
//! - `images`: image XObjects and soft masks

mod content;
mod document;
mod fonts;
mod images;
mod objects;
mod writer;

pub use content::*;
pub use document::*;
pub use fonts::*;
pub use images::*;
pub use objects::*;
pub use writer::*;
