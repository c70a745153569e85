//! Image and page-number geometry
//!
//! Geometry is worked out in inches with a top-left origin, the way the page
//! surface is laid out, then converted to PDF points with a bottom-left origin
//! when emitted.
//!
//! The captured image is scaled to the full page width. Its scaled height
//! (`drawn_height`) decides the vertical extent: the image box runs from the
//! top margin to `drawn_height - bottom`, and the page number sits 0.3in below
//! that edge.

use crate::pdf::text_width;
use crate::PageSettings;
use layout_engine::{Rect, Size, POINTS_PER_INCH};

/// Page number font size in points
pub const PAGE_NUMBER_FONT_SIZE: f64 = 16.0;

/// Distance from the bottom of the image box to the number baseline, inches
pub const PAGE_NUMBER_OFFSET: f64 = 0.3;

/// Where a page number is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPlacement {
    pub label: String,
    /// Left edge of the text, inches from the page's left edge
    pub x: f64,
    /// Baseline, inches from the page's top edge
    pub baseline: f64,
}

/// Placement of one captured page image on a PDF page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Physical page size in inches
    pub page: Size,
    /// Image height after scaling to the page width
    pub drawn_height: f64,
    /// Image box in inches, top-left origin
    pub image_box: Rect,
    pub number: Option<NumberPlacement>,
}

impl PagePlacement {
    /// Compute the placement for a `image_width x image_height` capture of
    /// the worksheet page at `page_index`.
    ///
    /// Fails with a reason when the image cannot be placed.
    pub fn compute(
        settings: &PageSettings,
        page_index: usize,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, String> {
        if image_width == 0 || image_height == 0 {
            return Err(format!("empty image {}x{}", image_width, image_height));
        }

        let page = settings.page_size.inches();
        let margins = settings.margins;
        let drawn_height = image_height as f64 * page.width / image_width as f64;

        let image_box = Rect::new(
            margins.left,
            margins.top,
            page.width - margins.horizontal(),
            drawn_height - margins.vertical(),
        );
        if image_box.width <= 0.0 || image_box.height <= 0.0 {
            return Err(format!(
                "scaled image is {:.3}in tall, margins need more than {:.3}in",
                drawn_height,
                margins.vertical()
            ));
        }

        let number = settings.page_numbering.enabled.then(|| {
            let label = settings.page_numbering.label(page_index);
            let width = text_width(&label, PAGE_NUMBER_FONT_SIZE) / POINTS_PER_INCH;
            let x = if settings.page_numbering.centered {
                (page.width - width) / 2.0
            } else {
                page.width - margins.right - width
            };
            NumberPlacement {
                label,
                x,
                baseline: drawn_height - margins.bottom + PAGE_NUMBER_OFFSET,
            }
        });

        Ok(Self {
            page,
            drawn_height,
            image_box,
            number,
        })
    }

    /// Image rectangle in PDF points as `(x, y, width, height)`, lower-left origin
    pub fn image_rect_points(&self) -> (f64, f64, f64, f64) {
        let b = &self.image_box;
        (
            b.x * POINTS_PER_INCH,
            (self.page.height - b.bottom()) * POINTS_PER_INCH,
            b.width * POINTS_PER_INCH,
            b.height * POINTS_PER_INCH,
        )
    }

    /// Page number text origin in PDF points, lower-left origin
    pub fn number_origin_points(&self) -> Option<(f64, f64)> {
        self.number.as_ref().map(|n| {
            (
                n.x * POINTS_PER_INCH,
                (self.page.height - n.baseline) * POINTS_PER_INCH,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Margins, PageNumbering};
    use layout_engine::PageSize;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_letter_two_to_one_image() {
        let placement = PagePlacement::compute(&PageSettings::default(), 0, 1600, 800).unwrap();

        assert!(close(placement.drawn_height, 4.25));
        assert_eq!(placement.image_box, Rect::new(0.5, 0.5, 7.5, 3.25));

        let number = placement.number.as_ref().unwrap();
        assert_eq!(number.label, "1");
        assert!(close(number.baseline, 4.05));
        let text = 556.0 * 16.0 / 1000.0 / 72.0;
        assert!(close(number.x, (8.5 - text) / 2.0));
    }

    #[test]
    fn test_points_conversion() {
        let placement = PagePlacement::compute(&PageSettings::default(), 0, 1600, 800).unwrap();
        let (x, y, w, h) = placement.image_rect_points();
        assert!(close(x, 36.0));
        assert!(close(y, 522.0));
        assert!(close(w, 540.0));
        assert!(close(h, 234.0));

        let (_, baseline) = placement.number_origin_points().unwrap();
        assert!(close(baseline, 500.4));
    }

    #[test]
    fn test_right_aligned_number() {
        let settings = PageSettings::default().with_page_numbering(PageNumbering {
            start_from: 10,
            centered: false,
            ..Default::default()
        });
        let placement = PagePlacement::compute(&settings, 2, 816, 1056).unwrap();
        let number = placement.number.unwrap();
        assert_eq!(number.label, "12");
        let text = 2.0 * 556.0 * 16.0 / 1000.0 / 72.0;
        assert!(close(number.x, 8.5 - 0.5 - text));
        assert!(close(placement.drawn_height, 11.0));
    }

    #[test]
    fn test_numbering_disabled() {
        let settings = PageSettings::default().with_page_numbering(PageNumbering {
            enabled: false,
            ..Default::default()
        });
        let placement = PagePlacement::compute(&settings, 0, 816, 1056).unwrap();
        assert!(placement.number.is_none());
        assert!(placement.number_origin_points().is_none());
    }

    #[test]
    fn test_short_image_rejected() {
        // 8.5in wide at 10:1 is only 0.85in tall, less than the 1in of margins
        assert!(PagePlacement::compute(&PageSettings::default(), 0, 1000, 100).is_err());
        assert!(PagePlacement::compute(&PageSettings::default(), 0, 0, 100).is_err());
    }

    #[test]
    fn test_a4_zero_margins() {
        let settings = PageSettings::default()
            .with_page_size(PageSize::A4)
            .with_margins(Margins::uniform(0.0));
        let placement = PagePlacement::compute(&settings, 0, 100, 100).unwrap();
        assert!(close(placement.image_box.width, 210.0 / 25.4));
        assert!(close(placement.image_box.height, 210.0 / 25.4));
    }
}
