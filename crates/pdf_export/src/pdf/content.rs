//! PDF Content Stream Generation
//!
//! Builder for the page content streams. Worksheet pages only need image
//! placement and a page number, so just those operators exist:
//!
//! - q/Q: save/restore graphics state
//! - cm: concatenate transformation matrix
//! - Do: paint an XObject
//! - BT/ET, Tf, Td, Tj, g: text in a gray fill

use super::objects::{format_real, write_literal_string};
use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    // =========================================================================
    // Graphics State Operators
    // =========================================================================

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Concatenate a transformation matrix (cm)
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.write_operands(&[a, b, c, d, e, f], "cm");
        self
    }

    // =========================================================================
    // Color Operators
    // =========================================================================

    /// Set the fill color to grayscale (g)
    pub fn set_fill_gray(&mut self, gray: f64) -> &mut Self {
        self.write_operands(&[gray], "g");
        self
    }

    // =========================================================================
    // XObject Operators
    // =========================================================================

    /// Paint a named XObject (Do)
    pub fn draw_xobject(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(self.data, "/{} Do", name);
        self
    }

    /// Paint an image XObject into the rectangle with lower-left `(x, y)`
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.save_state()
            .transform(width, 0.0, 0.0, height, x, y)
            .draw_xobject(name)
            .restore_state()
    }

    // =========================================================================
    // Text Operators
    // =========================================================================

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Select a font resource and size (Tf)
    pub fn set_font(&mut self, name: &str, size: f64) -> &mut Self {
        let _ = writeln!(self.data, "/{} {} Tf", name, format_real(size));
        self
    }

    /// Move to the start of the next line (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_operands(&[tx, ty], "Td");
        self
    }

    /// Show a text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        let _ = write_literal_string(&mut self.data, text.as_bytes());
        self.write_line(" Tj");
        self
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_operands(&mut self, operands: &[f64], operator: &str) {
        for n in operands {
            self.data.extend_from_slice(format_real(*n).as_bytes());
            self.data.push(b' ');
        }
        self.write_line(operator);
    }
}
