//! Bitmap page rasterizer
//!
//! Draws a worksheet page the way it appears on screen, at 96 pixels per
//! inch: white page, optional dashed margin guides, the title, and one cell
//! per problem with its number, right-aligned operands, and an answer rule.
//! Text uses the built-in 5x7 glyphs scaled up.

use crate::glyphs::{is_set, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use image::{GrayImage, Luma};
use layout_engine::{place, CellPlacement, PageSize, Rect, PIXELS_PER_INCH};
use pdf_export::{Margins, PageSettings, PixelFormat, Rasterizer, RenderedImage, SurfaceId};
use worksheet_model::{GridSpec, Page};

const WHITE: u8 = 255;
const INK: u8 = 0;
const LABEL_GRAY: u8 = 110;
const GUIDE_GRAY: u8 = 170;

const TITLE_SCALE: usize = 3;
const TITLE_OFFSET: i64 = 8;
/// Vertical space reserved above the grid for the title
const HEADER_HEIGHT: i64 = 48;

const OPERAND_SCALE: usize = 3;
const CELL_PADDING: i64 = 12;

/// Renders worksheet pages into grayscale bitmaps
#[derive(Debug, Clone)]
pub struct BitmapRasterizer {
    pages: Vec<Page>,
    grid: GridSpec,
    page_size: PageSize,
    margins: Margins,
    show_margins: bool,
}

impl BitmapRasterizer {
    pub fn new(pages: &[Page], grid: GridSpec, settings: &PageSettings) -> Self {
        Self {
            pages: pages.to_vec(),
            grid,
            page_size: settings.page_size,
            margins: settings.margins,
            show_margins: settings.show_margins,
        }
    }

    /// Render one page
    pub fn render(&self, page: &Page) -> layout_engine::Result<RenderedImage> {
        let size = self.page_size.pixels();
        let mut canvas = GrayImage::from_pixel(
            size.width.round() as u32,
            size.height.round() as u32,
            Luma([WHITE]),
        );

        let origin_x = px(self.margins.left);
        let origin_y = px(self.margins.top);

        if self.show_margins {
            let guide = Rect::new(
                origin_x as f64,
                origin_y as f64,
                size.width - (self.margins.left + self.margins.right) * PIXELS_PER_INCH,
                size.height - (self.margins.top + self.margins.bottom) * PIXELS_PER_INCH,
            );
            dashed_outline(&mut canvas, &guide, GUIDE_GRAY);
        }

        if let Some(title) = page.title() {
            let content_width = canvas.width() as i64 - origin_x - px(self.margins.right);
            let title = title.to_uppercase();
            let x = origin_x + (content_width - text_width(&title, TITLE_SCALE)) / 2;
            draw_text(&mut canvas, x, origin_y + TITLE_OFFSET, &title, TITLE_SCALE, INK);
        }

        for cell in place(&self.grid, &page.problems)? {
            let bounds = cell
                .bounds
                .translate(origin_x as f64, (origin_y + HEADER_HEIGHT) as f64);
            draw_cell(&mut canvas, &cell, &bounds);
        }

        let (width, height) = canvas.dimensions();
        Ok(RenderedImage::new(
            width,
            height,
            PixelFormat::Gray8,
            canvas.into_raw(),
        ))
    }
}

impl Rasterizer for BitmapRasterizer {
    async fn rasterize(&self, surface: SurfaceId) -> Option<RenderedImage> {
        let page = self.pages.get(surface.page_index())?;
        match self.render(page) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Cannot render {}: {}", surface, e);
                None
            }
        }
    }
}

fn px(inches: f64) -> i64 {
    (inches * PIXELS_PER_INCH).round() as i64
}

fn text_width(text: &str, scale: usize) -> i64 {
    let chars = text.chars().count();
    if chars == 0 {
        return 0;
    }
    ((chars * GLYPH_ADVANCE - 1) * scale) as i64
}

fn draw_cell(canvas: &mut GrayImage, cell: &CellPlacement, bounds: &Rect) {
    let left = bounds.x.round() as i64;
    let top = bounds.y.round() as i64;
    let right = bounds.right().round() as i64;
    let line_height = (GLYPH_HEIGHT * OPERAND_SCALE) as i64;

    draw_text(canvas, left + 4, top + 4, &format!("{}.", cell.index + 1), 1, LABEL_GRAY);

    let problem = &cell.problem;
    let first = problem.first_operand.to_string();
    let second = problem.second_operand.to_string();

    let first_y = top + 16;
    draw_text(
        canvas,
        right - CELL_PADDING - text_width(&first, OPERAND_SCALE),
        first_y,
        &first,
        OPERAND_SCALE,
        INK,
    );

    let second_y = first_y + line_height + 8;
    draw_text(
        canvas,
        left + CELL_PADDING,
        second_y,
        &problem.operator.symbol().to_string(),
        OPERAND_SCALE,
        INK,
    );
    draw_text(
        canvas,
        right - CELL_PADDING - text_width(&second, OPERAND_SCALE),
        second_y,
        &second,
        OPERAND_SCALE,
        INK,
    );

    let rule_y = second_y + line_height + 6;
    fill_rect(canvas, left + 8, rule_y, right - left - 16, 2, INK);
}

/// Set one pixel; anything off the page is clipped
fn plot(canvas: &mut GrayImage, x: i64, y: i64, value: u8) {
    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
        canvas.put_pixel(x as u32, y as u32, Luma([value]));
    }
}

fn fill_rect(canvas: &mut GrayImage, x: i64, y: i64, width: i64, height: i64, value: u8) {
    for row in y..y + height {
        for col in x..x + width {
            plot(canvas, col, row, value);
        }
    }
}

/// One-pixel dashed rectangle outline (6 on, 4 off)
fn dashed_outline(canvas: &mut GrayImage, rect: &Rect, value: u8) {
    let left = rect.x.round() as i64;
    let top = rect.y.round() as i64;
    let right = rect.right().round() as i64 - 1;
    let bottom = rect.bottom().round() as i64 - 1;
    let dash = |i: i64| i % 10 < 6;

    for x in left..=right {
        if dash(x - left) {
            plot(canvas, x, top, value);
            plot(canvas, x, bottom, value);
        }
    }
    for y in top..=bottom {
        if dash(y - top) {
            plot(canvas, left, y, value);
            plot(canvas, right, y, value);
        }
    }
}

fn draw_text(canvas: &mut GrayImage, x: i64, y: i64, text: &str, scale: usize, value: u8) {
    let scale_px = scale as i64;
    for (i, c) in text.chars().enumerate() {
        let glyph_x = x + (i * GLYPH_ADVANCE * scale) as i64;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if is_set(c, col, row) {
                    fill_rect(
                        canvas,
                        glyph_x + col as i64 * scale_px,
                        y + row as i64 * scale_px,
                        scale_px,
                        scale_px,
                        value,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worksheet_model::{Operator, Problem};

    fn page() -> Page {
        Page::new(
            vec![
                Problem::new(8, 2, Operator::Subtract),
                Problem::new(63, 9, Operator::Divide),
            ],
            1,
        )
    }

    fn pixel(image: &RenderedImage, x: usize, y: usize) -> u8 {
        image.pixels[y * image.width as usize + x]
    }

    #[test]
    fn test_letter_page_at_96_dpi() {
        let rasterizer =
            BitmapRasterizer::new(&[page()], GridSpec::default(), &PageSettings::default());
        let image = rasterizer.render(&page()).unwrap();

        assert_eq!((image.width, image.height), (816, 1056));
        assert_eq!(image.format, PixelFormat::Gray8);
        assert!(image.validate().is_ok());
        assert!(image.pixels.contains(&INK));
    }

    #[test]
    fn test_margin_guides_follow_setting() {
        let with_guides =
            BitmapRasterizer::new(&[page()], GridSpec::default(), &PageSettings::default());
        assert_eq!(pixel(&with_guides.render(&page()).unwrap(), 48, 48), GUIDE_GRAY);

        let settings = PageSettings {
            show_margins: false,
            ..Default::default()
        };
        let without = BitmapRasterizer::new(&[page()], GridSpec::default(), &settings);
        assert_eq!(pixel(&without.render(&page()).unwrap(), 48, 48), WHITE);
    }

    #[test]
    fn test_answer_rule_under_first_cell() {
        let rasterizer =
            BitmapRasterizer::new(&[page()], GridSpec::default(), &PageSettings::default());
        let image = rasterizer.render(&page()).unwrap();
        // first cell starts at (48, 96); the rule sits 16 + 21 + 8 + 21 + 6 px down
        let rule_y = 96 + 72;
        assert_eq!(pixel(&image, 48 + 60, rule_y), INK);
        assert_eq!(pixel(&image, 48 + 60, rule_y + 1), INK);
        assert_eq!(pixel(&image, 48 + 60, rule_y + 2), WHITE);
    }

    #[test]
    fn test_render_is_deterministic() {
        let rasterizer =
            BitmapRasterizer::new(&[page()], GridSpec::default(), &PageSettings::default());
        assert_eq!(rasterizer.render(&page()).unwrap(), rasterizer.render(&page()).unwrap());
    }

    #[test]
    fn test_drawing_clips_at_page_edge() {
        let mut canvas = GrayImage::from_pixel(4, 4, Luma([WHITE]));
        fill_rect(&mut canvas, -2, 2, 10, 10, INK);
        assert_eq!(canvas.get_pixel(0, 1).0, [WHITE]);
        assert_eq!(canvas.get_pixel(0, 2).0, [INK]);
        assert_eq!(canvas.get_pixel(3, 3).0, [INK]);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("7", 3), 15);
        assert_eq!(text_width("63", 3), 33);
    }

    #[tokio::test]
    async fn test_unknown_surface_is_unavailable() {
        let rasterizer =
            BitmapRasterizer::new(&[page()], GridSpec::default(), &PageSettings::default());
        assert!(rasterizer.rasterize(SurfaceId(0)).await.is_some());
        assert!(rasterizer.rasterize(SurfaceId(1)).await.is_none());
    }
}
