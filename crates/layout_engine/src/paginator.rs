//! Pagination of a problem set
//!
//! A flat problem sequence is split into consecutive pages of the configured
//! problem count. That count is independent of the grid capacity; a page may
//! hold more problems than `columns * rows` cells.

use crate::{LayoutError, Result};
use worksheet_model::{Page, Problem};

/// Split `problems` into pages of `per_page` problems, numbered from 1.
///
/// The last page holds the remainder. An empty problem set yields no pages.
pub fn chunk_into_pages(problems: &[Problem], per_page: usize) -> Result<Vec<Page>> {
    paginate(problems, per_page, 1)
}

/// Split `problems` into pages of `per_page` problems numbered from
/// `first_page_number`
pub fn paginate(problems: &[Problem], per_page: usize, first_page_number: u32) -> Result<Vec<Page>> {
    if per_page == 0 {
        return Err(LayoutError::InvalidPagination(
            "Problems per page must be at least 1".to_string(),
        ));
    }
    if first_page_number == 0 {
        return Err(LayoutError::InvalidPagination(
            "Page numbers start at 1".to_string(),
        ));
    }

    let page_count = problems.len().div_ceil(per_page);
    let last_offset = page_count.saturating_sub(1);
    u32::try_from(last_offset)
        .ok()
        .and_then(|offset| first_page_number.checked_add(offset))
        .ok_or_else(|| {
            LayoutError::InvalidPagination(format!(
                "{} pages starting at {} overflow the page number range",
                page_count, first_page_number
            ))
        })?;

    let pages: Vec<Page> = problems
        .chunks(per_page)
        .enumerate()
        .map(|(i, chunk)| Page::new(chunk.to_vec(), first_page_number + i as u32))
        .collect();

    tracing::debug!(
        "Paginated {} problems into {} pages of up to {}",
        problems.len(),
        pages.len(),
        per_page
    );

    Ok(pages)
}

/// Number of pages needed for `problem_count` problems
pub fn page_count_for(problem_count: usize, per_page: usize) -> Result<usize> {
    if per_page == 0 {
        return Err(LayoutError::InvalidPagination(
            "Problems per page must be at least 1".to_string(),
        ));
    }
    Ok(problem_count.div_ceil(per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use worksheet_model::Operator;

    fn problems(n: usize) -> Vec<Problem> {
        (0..n)
            .map(|i| Problem::new(i as i64, 2, Operator::Multiply))
            .collect()
    }

    #[test]
    fn test_chunking_with_remainder() {
        let pages = chunk_into_pages(&problems(12), 5).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 5);
        assert_eq!(pages[2].len(), 2);
        assert_eq!(
            pages.iter().map(|p| p.page_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(pages[1].problems[0].first_operand, 5);
    }

    #[test]
    fn test_empty_problem_set() {
        assert!(chunk_into_pages(&[], 25).unwrap().is_empty());
    }

    #[test]
    fn test_zero_per_page_rejected() {
        assert!(matches!(
            chunk_into_pages(&problems(3), 0),
            Err(LayoutError::InvalidPagination(_))
        ));
        assert!(page_count_for(3, 0).is_err());
    }

    #[test]
    fn test_custom_first_number() {
        let pages = paginate(&problems(4), 2, 7).unwrap();
        assert_eq!(pages[0].page_number, 7);
        assert_eq!(pages[1].page_number, 8);
        assert!(paginate(&problems(4), 2, 0).is_err());
    }

    #[test]
    fn test_page_number_overflow_rejected() {
        let pages = paginate(&problems(2), 2, u32::MAX).unwrap();
        assert_eq!(pages[0].page_number, u32::MAX);
        assert!(matches!(
            paginate(&problems(3), 2, u32::MAX),
            Err(LayoutError::InvalidPagination(_))
        ));
        assert!(paginate(&problems(6), 2, u32::MAX - 2).is_ok());
    }

    #[test]
    fn test_page_count_for() {
        assert_eq!(page_count_for(0, 25).unwrap(), 0);
        assert_eq!(page_count_for(25, 25).unwrap(), 1);
        assert_eq!(page_count_for(26, 25).unwrap(), 2);
    }
}
