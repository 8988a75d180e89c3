//! Fixed-size pagination over a sorted result list.
//!
//! Pages are 1-based. Asking for a page outside `1..=total_pages` yields an empty
//! slice rather than an error; callers that want to stay in range use
//! [`clamp_page`].

use serde::Serialize;

/// Records per page.
pub const PAGE_SIZE: usize = 4;

/// Page buttons shown before the trailing gap.
pub const WINDOW_SIZE: usize = 5;

/// `ceil(n / PAGE_SIZE)`, but never less than one so an empty result still has
/// a (blank) first page.
pub fn total_pages(result_count: usize) -> usize {
    result_count.div_ceil(PAGE_SIZE).max(1)
}

/// Items `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `items`, cut at the end.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(PAGE_SIZE)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

pub fn clamp_page(page: usize, result_count: usize) -> usize {
    page.clamp(1, total_pages(result_count))
}

/// One entry of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageSlot {
    Number(usize),
    Gap,
}

/// The navigation bar: pages `1..=min(5, total)`, then a gap and the last page
/// when there are more than five.
pub fn page_window(total_pages: usize) -> Vec<PageSlot> {
    let mut slots: Vec<PageSlot> = (1..=total_pages.min(WINDOW_SIZE))
        .map(PageSlot::Number)
        .collect();
    if total_pages > WINDOW_SIZE {
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Number(total_pages));
    }
    slots
}

/// A single page of results plus what is needed to render its navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub items: Vec<T>,
}

impl<T: Clone> Page<T> {
    pub fn new(results: &[T], number: usize) -> Self {
        Self {
            number,
            total_pages: total_pages(results.len()),
            total_results: results.len(),
            items: paginate(results, number).to_vec(),
        }
    }
}

impl<T> Page<T> {
    /// 1-based inclusive range of the results on this page, for the
    /// "showing X-Y of N" line. `None` when the page is empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.number - 1) * PAGE_SIZE + 1;
        Some((start, start + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn window(&self) -> Vec<PageSlot> {
        page_window(self.total_pages)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            number: self.number,
            total_pages: self.total_pages,
            total_results: self.total_results,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_with_floor_of_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(4), 1);
        assert_eq!(total_pages(5), 2);
        assert_eq!(total_pages(10), 3);
    }

    #[test]
    fn paginate_slices_and_truncates() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 1), &[1, 2, 3, 4]);
        assert_eq!(paginate(&items, 3), &[9, 10]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, usize::MAX).is_empty());
        assert!(paginate::<u32>(&[], 1).is_empty());
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(9, 10), 3);
        assert_eq!(clamp_page(2, 10), 2);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn window_without_gap() {
        assert_eq!(page_window(1), vec![PageSlot::Number(1)]);
        assert_eq!(page_window(5).len(), 5);
    }

    #[test]
    fn window_with_gap_and_last_page() {
        assert_eq!(
            page_window(8),
            vec![
                PageSlot::Number(1),
                PageSlot::Number(2),
                PageSlot::Number(3),
                PageSlot::Number(4),
                PageSlot::Number(5),
                PageSlot::Gap,
                PageSlot::Number(8),
            ]
        );
    }

    #[test]
    fn page_reports_showing_range() {
        let items: Vec<u32> = (1..=10).collect();
        let last = Page::new(&items, 3);
        assert_eq!(last.showing(), Some((9, 10)));
        assert!(last.has_previous());
        assert!(!last.has_next());

        let first = Page::new(&items, 1);
        assert_eq!(first.showing(), Some((1, 4)));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let empty = Page::<u32>::new(&[], 1);
        assert_eq!(empty.showing(), None);
        assert_eq!(empty.total_pages, 1);
    }
}
