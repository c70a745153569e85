//! Standard page sizes
//!
//! Worksheet geometry is expressed in inches; PDF output works in points
//! (72 per inch). Screen surfaces use CSS pixels (96 per inch).

use crate::{LayoutError, Result, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// CSS pixels per inch
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Supported page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// A4 (210mm x 297mm)
    A4,
}

impl PageSize {
    /// Width and height in inches
    pub fn inches(&self) -> Size {
        match self {
            PageSize::Letter => Size::new(8.5, 11.0),
            PageSize::A4 => Size::new(210.0 / MM_PER_INCH, 297.0 / MM_PER_INCH),
        }
    }

    /// Width and height in points
    pub fn points(&self) -> Size {
        let inches = self.inches();
        Size::new(inches.width * POINTS_PER_INCH, inches.height * POINTS_PER_INCH)
    }

    /// Width and height in CSS pixels
    pub fn pixels(&self) -> Size {
        let inches = self.inches();
        Size::new(inches.width * PIXELS_PER_INCH, inches.height * PIXELS_PER_INCH)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "a4",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageSize {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(LayoutError::UnsupportedPageSize(other.to_string())),
        }
    }
}
