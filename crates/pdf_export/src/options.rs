//! Document-level export options

use crate::pdf::DocumentInfo;
use chrono::{DateTime, Utc};

/// Metadata and encoding options for the exported PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Flate-compress content and image streams
    pub compress: bool,
    /// Fixed creation timestamp; the current time is used when unset
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            compress: true,
            creation_date: None,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Information dictionary contents for these options
    pub fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.title.clone(),
            author: self.author.clone(),
            subject: self.subject.clone(),
            creation_date: Some(self.creation_date.unwrap_or_else(Utc::now)),
            ..DocumentInfo::new()
        }
    }
}
