//! Sequential export pipeline
//!
//! The rasterizer captures a single shared surface, so pages are processed
//! strictly in order: page `i + 1` is not requested until page `i` has been
//! captured and embedded. Cancellation is observed between pages only.

use crate::{
    DocumentComposer, ExportError, ExportOptions, ExportOutput, PageOutcome, PageSettings,
    Rasterizer, Result, SurfaceId,
};
use tokio::sync::watch;
use worksheet_model::Page;

/// Exports worksheet pages to a PDF through a [`Rasterizer`]
#[derive(Debug, Clone, Default)]
pub struct DocumentExporter {
    settings: PageSettings,
    options: ExportOptions,
}

impl DocumentExporter {
    pub fn new(settings: PageSettings, options: ExportOptions) -> Self {
        Self { settings, options }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export every selected page
    pub async fn export<R>(&self, pages: &[Page], rasterizer: &R) -> Result<ExportOutput>
    where
        R: Rasterizer,
    {
        self.export_with_cancel(pages, rasterizer, None).await
    }

    /// Export every selected page, stopping early when `cancel` turns true.
    ///
    /// A cancelled export returns [`ExportError::Cancelled`] and the partial
    /// document is dropped.
    pub async fn export_with_cancel<R>(
        &self,
        pages: &[Page],
        rasterizer: &R,
        cancel: Option<&watch::Receiver<bool>>,
    ) -> Result<ExportOutput>
    where
        R: Rasterizer,
    {
        let mut composer =
            DocumentComposer::new(self.settings.clone(), self.options.clone(), pages.len())?;
        let selected = self.settings.pages_to_download.selected_count(pages.len());
        tracing::info!(
            "Exporting {} of {} worksheet pages ({})",
            selected,
            pages.len(),
            self.settings.page_size
        );

        for (index, page) in pages.iter().enumerate() {
            if cancel.is_some_and(|rx| *rx.borrow()) {
                tracing::info!("Export cancelled before page {}", index);
                return Err(ExportError::Cancelled);
            }

            // unselected pages are never captured
            if !self.settings.pages_to_download.includes(index) {
                composer.add_page(index, page, None)?;
                continue;
            }

            let surface = SurfaceId(index);
            tracing::debug!("Capturing {}", surface);
            let image = rasterizer.rasterize(surface).await;

            if let PageOutcome::Composed = composer.add_page(index, page, image.as_ref())? {
                tracing::debug!("Embedded {} ({}/{})", surface, composer.page_count(), selected);
            }
        }

        composer.finish()
    }
}
