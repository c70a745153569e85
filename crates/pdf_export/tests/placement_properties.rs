//! Property tests for image placement on PDF pages

use layout_engine::PageSize;
use pdf_export::{Margins, PagePlacement, PageSettings};
use proptest::prelude::*;

fn margins_strategy() -> impl Strategy<Value = Margins> {
    (0.0f64..1.5, 0.0f64..1.5, 0.0f64..1.5, 0.0f64..1.5).prop_map(
        |(top, bottom, left, right)| Margins {
            top,
            bottom,
            left,
            right,
        },
    )
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    prop_oneof![Just(PageSize::Letter), Just(PageSize::A4)]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

proptest! {
    #[test]
    fn image_fills_width_inside_margins(
        page_size in page_size_strategy(),
        margins in margins_strategy(),
        image_width in 100u32..4000,
        ratio in 0.5f64..3.0,
    ) {
        let image_height = ((image_width as f64 * ratio).round() as u32).max(1);
        let settings = PageSettings::default()
            .with_page_size(page_size)
            .with_margins(margins);
        let placement = PagePlacement::compute(&settings, 0, image_width, image_height).unwrap();

        let page = page_size.inches();
        let drawn_height = image_height as f64 * page.width / image_width as f64;
        prop_assert!(close(placement.drawn_height, drawn_height));
        prop_assert!(close(placement.image_box.x, margins.left));
        prop_assert!(close(placement.image_box.y, margins.top));
        prop_assert!(close(placement.image_box.width, page.width - margins.left - margins.right));
        prop_assert!(close(
            placement.image_box.height,
            drawn_height - margins.top - margins.bottom
        ));

        let number = placement.number.as_ref().unwrap();
        prop_assert!(close(number.baseline, drawn_height - margins.bottom + 0.3));
    }

    #[test]
    fn points_match_inches(
        margins in margins_strategy(),
        image_width in 100u32..4000,
        ratio in 0.5f64..3.0,
    ) {
        let image_height = ((image_width as f64 * ratio).round() as u32).max(1);
        let settings = PageSettings::default().with_margins(margins);
        let placement = PagePlacement::compute(&settings, 0, image_width, image_height).unwrap();

        let (x, y, width, height) = placement.image_rect_points();
        let b = &placement.image_box;
        prop_assert!(close(x, b.x * 72.0));
        prop_assert!(close(y, (11.0 - b.y - b.height) * 72.0));
        prop_assert!(close(width, b.width * 72.0));
        prop_assert!(close(height, b.height * 72.0));
    }
}
