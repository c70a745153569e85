//! Property tests for grid placement

use layout_engine::{chunk_into_pages, GridLayout};
use proptest::prelude::*;
use worksheet_model::{GridSpec, Operator, Problem};

fn grid_strategy() -> impl Strategy<Value = GridSpec> {
    (1u32..9, 1u32..9, 80.0f64..200.0, 80.0f64..200.0, 0.0f64..48.0, 0.0f64..48.0).prop_map(
        |(columns, rows, item_width, item_height, row_spacing, column_spacing)| GridSpec {
            columns,
            rows,
            item_width,
            item_height,
            row_spacing,
            column_spacing,
        },
    )
}

fn problems(n: usize) -> Vec<Problem> {
    (0..n)
        .map(|i| Problem::new(i as i64, 3, Operator::Add))
        .collect()
}

proptest! {
    #[test]
    fn placement_is_row_major(spec in grid_strategy(), n in 0usize..100) {
        let layout = GridLayout::new(spec).unwrap();
        let placed = layout.place(&problems(n));
        prop_assert_eq!(placed.len(), n);
        for (i, cell) in placed.iter().enumerate() {
            prop_assert_eq!(cell.index, i);
            prop_assert_eq!(cell.row, i / spec.columns as usize);
            prop_assert_eq!(cell.column, i % spec.columns as usize);
            prop_assert_eq!(cell.bounds.width, spec.item_width);
            prop_assert_eq!(cell.bounds.height, spec.item_height);
        }
    }

    #[test]
    fn placement_is_deterministic(spec in grid_strategy(), n in 0usize..60) {
        let layout = GridLayout::new(spec).unwrap();
        let input = problems(n);
        prop_assert_eq!(layout.place(&input), layout.place(&input));
    }

    #[test]
    fn chunking_preserves_order(n in 0usize..200, per_page in 1usize..40) {
        let input = problems(n);
        let pages = chunk_into_pages(&input, per_page).unwrap();
        let flattened: Vec<Problem> = pages.iter().flat_map(|p| p.problems.clone()).collect();
        prop_assert_eq!(flattened, input);
        prop_assert!(pages.iter().all(|p| !p.is_empty() && p.len() <= per_page));
    }
}
