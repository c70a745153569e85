//! Incremental document composition
//!
//! [`DocumentComposer`] turns captured page images into a PDF one page at a
//! time. Each page's objects are written to the output as soon as the page is
//! added, so only the current image is held in memory. `finish` consumes the
//! composer and writes the page tree, catalog, and cross-reference table.

use crate::pdf::{
    create_catalog, create_helvetica_font_dict, create_pages, ContentStream, MediaBox, PdfObject,
    PdfPage, PdfStream, PdfWriter,
};
use crate::{
    ExportError, ExportOptions, ExportWarning, PagePlacement, PageSettings, RenderedImage, Result,
    SurfaceId, PAGE_NUMBER_FONT_SIZE,
};
use worksheet_model::Page;

const IMAGE_RESOURCE: &str = "Im0";
const FONT_RESOURCE: &str = "F1";

/// What happened to a page handed to [`DocumentComposer::add_page`]
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// A PDF page was written
    Composed,
    /// Not part of the page selection
    Excluded,
    /// Could not be placed; the warning is also kept for the final output
    Skipped(ExportWarning),
}

/// Finished PDF document
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub bytes: Vec<u8>,
    /// Pages in the PDF
    pub page_count: usize,
    pub warnings: Vec<ExportWarning>,
}

/// Streaming PDF composer for worksheet pages
pub struct DocumentComposer {
    settings: PageSettings,
    options: ExportOptions,
    worksheet_len: usize,
    writer: PdfWriter<Vec<u8>>,
    pages_ref: u32,
    /// Written on first use, shared by every page
    font_ref: Option<u32>,
    page_refs: Vec<u32>,
    warnings: Vec<ExportWarning>,
    next_index: usize,
}

impl DocumentComposer {
    /// Validate the settings for a worksheet of `worksheet_len` pages and
    /// start a new document
    pub fn new(settings: PageSettings, options: ExportOptions, worksheet_len: usize) -> Result<Self> {
        settings.validate(worksheet_len)?;

        let mut writer = PdfWriter::new(Vec::new());
        writer.set_compression(options.compress);
        writer.write_header()?;
        let pages_ref = writer.allocate_object();

        Ok(Self {
            settings,
            options,
            worksheet_len,
            writer,
            pages_ref,
            font_ref: None,
            page_refs: Vec::new(),
            warnings: Vec::new(),
            next_index: 0,
        })
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Pages written so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn warnings(&self) -> &[ExportWarning] {
        &self.warnings
    }

    /// Add the worksheet page at `page_index` with its captured image.
    ///
    /// Pages must arrive in increasing index order. A missing or unusable
    /// image skips the page with a warning.
    pub fn add_page(
        &mut self,
        page_index: usize,
        page: &Page,
        image: Option<&RenderedImage>,
    ) -> Result<PageOutcome> {
        if page_index >= self.worksheet_len {
            return Err(ExportError::Configuration(format!(
                "Page index {} out of range for {} pages",
                page_index, self.worksheet_len
            )));
        }
        if page_index < self.next_index {
            return Err(ExportError::Configuration(format!(
                "Page {} added out of order, expected index {} or later",
                page_index, self.next_index
            )));
        }
        self.next_index = page_index + 1;

        if !self.settings.pages_to_download.includes(page_index) {
            tracing::debug!("Page {} not selected, skipping", page_index);
            return Ok(PageOutcome::Excluded);
        }

        let Some(image) = image else {
            return Ok(self.skip(ExportWarning::RenderUnavailable {
                page_index,
                surface: SurfaceId(page_index),
            }));
        };

        let computed = image.validate().and_then(|_| {
            PagePlacement::compute(&self.settings, page_index, image.width, image.height)
        });
        let placement = match computed {
            Ok(placement) => placement,
            Err(reason) => {
                return Ok(self.skip(ExportWarning::InvalidImage { page_index, reason }));
            }
        };

        self.write_page(image, &placement)?;
        tracing::debug!(
            "Composed page {} (worksheet page {}, {} problems)",
            self.page_refs.len(),
            page.page_number,
            page.len()
        );
        Ok(PageOutcome::Composed)
    }

    fn skip(&mut self, warning: ExportWarning) -> PageOutcome {
        tracing::warn!("{}", warning);
        self.warnings.push(warning.clone());
        PageOutcome::Skipped(warning)
    }

    fn write_page(&mut self, image: &RenderedImage, placement: &PagePlacement) -> Result<()> {
        let data = image.to_image_data();
        let mask_ref = match data.soft_mask_xobject() {
            Some(mask) => {
                let num = self.writer.allocate_object();
                self.writer.write_stream_object(num, mask)?;
                Some(num)
            }
            None => None,
        };
        let image_ref = self.writer.allocate_object();
        self.writer
            .write_stream_object(image_ref, data.to_xobject(mask_ref))?;

        let mut page = PdfPage::new(MediaBox::from_page_size(self.settings.page_size));
        page.add_image(IMAGE_RESOURCE, image_ref);

        let mut content = ContentStream::new();
        let (x, y, width, height) = placement.image_rect_points();
        content.draw_image(IMAGE_RESOURCE, x, y, width, height);

        if let (Some(number), Some((tx, ty))) =
            (placement.number.as_ref(), placement.number_origin_points())
        {
            page.add_font(FONT_RESOURCE, self.font_ref()?);
            content
                .begin_text()
                .set_font(FONT_RESOURCE, PAGE_NUMBER_FONT_SIZE)
                .set_fill_gray(0.0)
                .move_text(tx, ty)
                .show_text(&number.label)
                .end_text();
        }

        let content_ref = self.writer.allocate_object();
        self.writer
            .write_stream_object(content_ref, PdfStream::new(content.into_bytes()))?;

        self.push_page(page.with_content(content_ref))
    }

    fn font_ref(&mut self) -> Result<u32> {
        if let Some(num) = self.font_ref {
            return Ok(num);
        }
        let num = self.writer.allocate_object();
        self.writer
            .write_object(num, &PdfObject::Dictionary(create_helvetica_font_dict()))?;
        self.font_ref = Some(num);
        Ok(num)
    }

    fn push_page(&mut self, page: PdfPage) -> Result<()> {
        let page_ref = self.writer.allocate_object();
        self.writer
            .write_object(page_ref, &PdfObject::Dictionary(page.to_dictionary(self.pages_ref)))?;
        self.page_refs.push(page_ref);
        Ok(())
    }

    /// Write the page tree, catalog, and trailer and return the document
    pub fn finish(mut self) -> Result<ExportOutput> {
        if self.page_refs.is_empty() {
            tracing::warn!("{}", ExportWarning::EmptyDocument);
            self.warnings.push(ExportWarning::EmptyDocument);
            let blank = PdfPage::new(MediaBox::from_page_size(self.settings.page_size));
            self.push_page(blank)?;
        }

        self.writer.write_object(
            self.pages_ref,
            &PdfObject::Dictionary(create_pages(&self.page_refs)),
        )?;

        let catalog_ref = self.writer.allocate_object();
        self.writer
            .write_object(catalog_ref, &PdfObject::Dictionary(create_catalog(self.pages_ref)))?;

        let info_ref = self.writer.allocate_object();
        let info = self.options.document_info().to_dictionary();
        self.writer
            .write_object(info_ref, &PdfObject::Dictionary(info))?;

        self.writer.write_xref_and_trailer(catalog_ref, Some(info_ref))?;

        let page_count = self.page_refs.len();
        let bytes = self.writer.finish()?;
        tracing::info!(
            "Finished PDF: {} pages, {} bytes, {} warnings",
            page_count,
            bytes.len(),
            self.warnings.len()
        );

        Ok(ExportOutput {
            bytes,
            page_count,
            warnings: self.warnings,
        })
    }
}

/// Compose already captured pages in one call
pub fn compose(
    pages: &[(Page, Option<RenderedImage>)],
    settings: PageSettings,
    options: ExportOptions,
) -> Result<ExportOutput> {
    let mut composer = DocumentComposer::new(settings, options, pages.len())?;
    for (index, (page, image)) in pages.iter().enumerate() {
        composer.add_page(index, page, image.as_ref())?;
    }
    composer.finish()
}
