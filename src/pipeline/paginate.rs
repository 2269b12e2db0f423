//! Page slicing and page-button layout

use serde::Serialize;
use utoipa::ToSchema;

/// Pages at or below this count get one button each
const MAX_PLAIN_BUTTONS: usize = 5;

/// One page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    /// 1-indexed page that was requested
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// 1-indexed position of the first item shown (0 when the page is empty)
    pub from: usize,
    /// 1-indexed position of the last item shown (0 when the page is empty)
    pub to: usize,
}

/// Slice `items` into the requested 1-indexed page.
///
/// Out-of-range pages (and a zero page size) yield an empty slice; the
/// caller clamps the page number beforehand.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total = items.len();
    let total_pages = page_count(total, per_page);

    let (slice, from, to) = if page >= 1 && page <= total_pages {
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total);
        (&items[start..end], start + 1, end)
    } else {
        (&items[0..0], 0, 0)
    };

    Page {
        items: slice.to_vec(),
        total,
        page,
        per_page,
        total_pages,
        from,
        to,
    }
}

/// Number of pages needed for `total` items (0 for an empty list)
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Layout of the pagination bar.
///
/// Up to five pages are listed in full. Beyond that the bar shows the first
/// page, the window `current-1..=current+1`, the last page, and an ellipsis
/// wherever the window is not adjacent to the first or last page.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    let button = |number: usize| PageButton::Page {
        number,
        current: number == current,
    };

    if total_pages <= MAX_PLAIN_BUTTONS {
        return (1..=total_pages).map(button).collect();
    }

    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(total_pages - 1);

    let mut buttons = vec![button(1)];
    if low > 2 {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.extend((low..=high).map(button));
    if high < total_pages - 1 {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(button(total_pages));
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(buttons: &[PageButton]) -> Vec<Option<usize>> {
        buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<i32> = (0..12).collect();
        let page = paginate(&items, 2, 5);
        assert_eq!(page.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(page.from, 6);
        assert_eq!(page.to, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_paginate_last_page_clamps_to() {
        let items: Vec<i32> = (0..12).collect();
        let page = paginate(&items, 3, 5);
        assert_eq!(page.items, vec![10, 11]);
        assert_eq!(page.from, 11);
        assert_eq!(page.to, 12);
    }

    #[test]
    fn test_paginate_empty_and_out_of_range() {
        let empty: Vec<i32> = vec![];
        let page = paginate(&empty, 1, 5);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!((page.from, page.to), (0, 0));

        let items: Vec<i32> = (0..3).collect();
        assert!(paginate(&items, 2, 5).items.is_empty());
        assert!(paginate(&items, 0, 5).items.is_empty());
        assert_eq!(paginate(&items, 1, 0).total_pages, 0);
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<i32> = (0..23).collect();
        for per_page in 1..=25 {
            let total_pages = paginate(&items, 1, per_page).total_pages;
            let rebuilt: Vec<i32> = (1..=total_pages)
                .flat_map(|p| paginate(&items, p, per_page).items)
                .collect();
            assert_eq!(rebuilt, items, "per_page {}", per_page);
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_buttons_few_pages() {
        assert!(page_buttons(1, 0).is_empty());
        let buttons = page_buttons(2, 4);
        assert_eq!(numbers(&buttons), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(buttons[1], PageButton::Page { number: 2, current: true });
    }

    #[test]
    fn test_buttons_with_ellipses() {
        assert_eq!(
            numbers(&page_buttons(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn test_buttons_near_edges() {
        assert_eq!(
            numbers(&page_buttons(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(3, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(8, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            numbers(&page_buttons(10, 10)),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }
}
