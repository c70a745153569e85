//! PDF Font Handling
//!
//! Page numbers are set in Helvetica, one of the standard 14 fonts every PDF
//! viewer provides, so nothing is embedded. Advance widths come from the
//! Helvetica AFM metrics and are used to right-align or center text.

use super::objects::{PdfDictionary, PdfObject};

/// Base font name of the page-number font
pub const HELVETICA: &str = "Helvetica";

/// Advance widths for printable ASCII (32..=126) in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for characters outside printable ASCII
const DEFAULT_WIDTH: u16 = 556;

/// Create a Type1 font dictionary for Helvetica
pub fn create_helvetica_font_dict() -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Font");
    dict.insert("Subtype", PdfObject::name("Type1"));
    dict.insert("BaseFont", PdfObject::name(HELVETICA));
    dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
    dict
}

/// Advance width of a character in 1/1000 em
pub fn helvetica_char_width(c: char) -> u16 {
    match c as u32 {
        code @ 32..=126 => HELVETICA_WIDTHS[(code - 32) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` set at `font_size`, in the same unit as `font_size`
pub fn text_width(text: &str, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| helvetica_char_width(c) as u32).sum();
    units as f64 * font_size / 1000.0
}
