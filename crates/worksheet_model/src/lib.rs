//! Worksheet Model - Arithmetic problems, worksheet settings, and pages
//!
//! This crate provides the data model for practice worksheets together with
//! the problem generator. Generation is a pure function of the operator, the
//! requested count, the operand range, and an injected random source; the
//! [`WorksheetSession`] owns the pages and drives regeneration.

mod error;
mod generator;
mod page;
mod problem;
mod session;
mod settings;

pub use error::*;
pub use generator::*;
pub use page::*;
pub use problem::*;
pub use session::*;
pub use settings::*;
