//! PDF Document Structure
//!
//! Catalog, flat page tree, page dictionaries, and the document information
//! dictionary.

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Utc};
use layout_engine::PageSize;
use std::collections::BTreeMap;

/// PDF document information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    /// Document info with creator and producer filled in
    pub fn new() -> Self {
        Self {
            creator: Some("Math Worksheet".to_string()),
            producer: Some(format!("pdf_export {}", env!("CARGO_PKG_VERSION"))),
            ..Default::default()
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();

        let text_entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                dict.insert(key, PdfObject::string(value.as_bytes()));
            }
        }
        if let Some(date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::string(format_pdf_date(&date)));
        }

        dict
    }
}

/// Format a timestamp as a PDF date string (`D:YYYYMMDDHHmmSS+00'00'`)
pub fn format_pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%S+00'00'").to_string()
}

/// Page media box in points (origin at lower-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_page_size(size: PageSize) -> Self {
        let points = size.points();
        Self::from_dimensions(points.width, points.height)
    }

    pub fn to_array(&self) -> PdfObject {
        PdfObject::rect([0.0, 0.0, self.width, self.height])
    }
}

impl Default for MediaBox {
    fn default() -> Self {
        Self::from_page_size(PageSize::Letter)
    }
}

/// PDF page object
#[derive(Debug, Clone, Default)]
pub struct PdfPage {
    pub media_box: MediaBox,
    /// Content stream object number
    pub content_ref: Option<u32>,
    /// Font resources (name -> object number)
    pub fonts: BTreeMap<String, u32>,
    /// Image XObject resources (name -> object number)
    pub images: BTreeMap<String, u32>,
}

impl PdfPage {
    pub fn new(media_box: MediaBox) -> Self {
        Self {
            media_box,
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content_ref: u32) -> Self {
        self.content_ref = Some(content_ref);
        self
    }

    pub fn add_font(&mut self, name: impl Into<String>, obj_ref: u32) {
        self.fonts.insert(name.into(), obj_ref);
    }

    pub fn add_image(&mut self, name: impl Into<String>, obj_ref: u32) {
        self.images.insert(name.into(), obj_ref);
    }

    /// Build the resources dictionary
    pub fn build_resources(&self) -> PdfDictionary {
        let mut resources = PdfDictionary::new();

        if !self.fonts.is_empty() {
            resources.insert("Font", reference_dict(&self.fonts));
        }
        if !self.images.is_empty() {
            resources.insert("XObject", reference_dict(&self.images));
        }

        // ProcSet is obsolete but still expected by PDF 1.4 readers
        resources.insert(
            "ProcSet",
            PdfObject::Array(
                ["PDF", "Text", "ImageB", "ImageC"]
                    .into_iter()
                    .map(PdfObject::name)
                    .collect(),
            ),
        );

        resources
    }

    /// Build the page dictionary
    pub fn to_dictionary(&self, parent_ref: u32) -> PdfDictionary {
        let mut dict = PdfDictionary::typed("Page");
        dict.insert("Parent", PdfObject::Reference(parent_ref));
        dict.insert("MediaBox", self.media_box.to_array());
        dict.insert("Resources", self.build_resources());
        if let Some(content_ref) = self.content_ref {
            dict.insert("Contents", PdfObject::Reference(content_ref));
        }
        dict
    }
}

fn reference_dict(refs: &BTreeMap<String, u32>) -> PdfDictionary {
    let mut dict = PdfDictionary::new();
    for (name, obj_ref) in refs {
        dict.insert(name.clone(), PdfObject::Reference(*obj_ref));
    }
    dict
}

/// Create a catalog dictionary
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Catalog");
    dict.insert("Pages", PdfObject::Reference(pages_ref));
    dict
}

/// Create the page tree root
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Pages");
    dict.insert(
        "Kids",
        PdfObject::Array(page_refs.iter().map(|&r| PdfObject::Reference(r)).collect()),
    );
    dict.insert("Count", page_refs.len() as i64);
    dict
}
