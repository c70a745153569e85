//! Page settings for PDF export
//!
//! Physical page size, margins in inches, page numbering, and which worksheet
//! pages to include. Settings are plain values handed to the composer; nothing
//! here reads from a settings store.

use crate::{ExportError, Result};
use layout_engine::PageSize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    /// Same margin on every side
    pub fn uniform(inches: f64) -> Self {
        Self {
            top: inches,
            bottom: inches,
            left: inches,
            right: inches,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Page number placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageNumbering {
    pub enabled: bool,
    /// Number printed on the first worksheet page
    pub start_from: u32,
    /// Centered when true, otherwise flush with the right margin
    pub centered: bool,
}

impl Default for PageNumbering {
    fn default() -> Self {
        Self {
            enabled: true,
            start_from: 1,
            centered: true,
        }
    }
}

impl PageNumbering {
    /// Label for the worksheet page at `page_index`
    pub fn label(&self, page_index: usize) -> String {
        (self.start_from as u64 + page_index as u64).to_string()
    }
}

/// Worksheet pages included in the export
///
/// Serialized as the string `"all"` or an array of 0-based page indices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SelectionRepr", into = "SelectionRepr")]
pub enum PageSelection {
    #[default]
    All,
    Pages(BTreeSet<usize>),
}

impl PageSelection {
    pub fn pages(indices: impl IntoIterator<Item = usize>) -> Self {
        PageSelection::Pages(indices.into_iter().collect())
    }

    pub fn includes(&self, page_index: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Pages(set) => set.contains(&page_index),
        }
    }

    /// Number of pages selected out of a worksheet of `page_count` pages
    pub fn selected_count(&self, page_count: usize) -> usize {
        match self {
            PageSelection::All => page_count,
            PageSelection::Pages(set) => set.iter().filter(|&&i| i < page_count).count(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Keyword(String),
    Indices(Vec<usize>),
}

impl TryFrom<SelectionRepr> for PageSelection {
    type Error = String;

    fn try_from(repr: SelectionRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            SelectionRepr::Keyword(word) if word.eq_ignore_ascii_case("all") => {
                Ok(PageSelection::All)
            }
            SelectionRepr::Keyword(word) => Err(format!(
                "expected \"all\" or a list of page indices, found \"{}\"",
                word
            )),
            SelectionRepr::Indices(indices) => Ok(PageSelection::pages(indices)),
        }
    }
}

impl From<PageSelection> for SelectionRepr {
    fn from(selection: PageSelection) -> Self {
        match selection {
            PageSelection::All => SelectionRepr::Keyword("all".to_string()),
            PageSelection::Pages(set) => SelectionRepr::Indices(set.into_iter().collect()),
        }
    }
}

/// Page-level export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub page_size: PageSize,
    pub margins: Margins,
    pub page_numbering: PageNumbering,
    /// Whether the page surface shows margin guides
    pub show_margins: bool,
    pub pages_to_download: PageSelection,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margins: Margins::default(),
            page_numbering: PageNumbering::default(),
            show_margins: true,
            pages_to_download: PageSelection::All,
        }
    }
}

impl PageSettings {
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_page_numbering(mut self, numbering: PageNumbering) -> Self {
        self.page_numbering = numbering;
        self
    }

    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.pages_to_download = selection;
        self
    }

    /// Check the settings against a worksheet of `page_count` pages
    pub fn validate(&self, page_count: usize) -> Result<()> {
        let m = &self.margins;
        for (side, value) in [
            ("top", m.top),
            ("bottom", m.bottom),
            ("left", m.left),
            ("right", m.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ExportError::Configuration(format!(
                    "{} margin must be a non-negative number of inches, got {}",
                    side, value
                )));
            }
        }

        let page = self.page_size.inches();
        if m.horizontal() >= page.width {
            return Err(ExportError::Configuration(format!(
                "Left and right margins ({}in) leave no room on a {}in wide page",
                m.horizontal(),
                page.width
            )));
        }
        if m.vertical() >= page.height {
            return Err(ExportError::Configuration(format!(
                "Top and bottom margins ({}in) leave no room on a {}in tall page",
                m.vertical(),
                page.height
            )));
        }

        if let PageSelection::Pages(set) = &self.pages_to_download {
            if set.is_empty() {
                return Err(ExportError::Configuration(
                    "No pages selected for download".to_string(),
                ));
            }
            if let Some(&last) = set.iter().next_back() {
                if last >= page_count {
                    return Err(ExportError::Configuration(format!(
                        "Page index {} out of range for {} pages",
                        last, page_count
                    )));
                }
            }
        }

        Ok(())
    }
}
