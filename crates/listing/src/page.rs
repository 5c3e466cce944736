//! Catalog pagination.

use serde::{Deserialize, Serialize};

use vitrine_core::DomainResult;

/// Products shown per catalog page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// One page of results plus enough metadata to render the pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Splits a result set into fixed-size pages.
///
/// Page selection is forgiving: an unparseable request lands on the first
/// page, while a number outside `1..=total_pages` (in either direction)
/// lands on the last one. An empty result set still has one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn new(per_page: u32) -> DomainResult<Self> {
        if per_page == 0 {
            return Err(vitrine_core::DomainError::validation(
                "per_page must be at least 1",
            ));
        }

        Ok(Self { per_page })
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page as usize).max(1)
    }

    /// Cuts the requested page out of `items`. `requested` carries the raw
    /// page parameter after integer parsing; `None` means absent or not a
    /// number.
    pub fn get_page<T: Clone>(&self, items: &[T], requested: Option<i64>) -> Page<T> {
        let total_items = items.len();
        let total_pages = self.total_pages(total_items);

        let number = match requested {
            None => 1,
            Some(n) if n < 1 => total_pages,
            Some(n) if n as u128 > total_pages as u128 => total_pages,
            Some(n) => n as usize,
        };

        let start = (number - 1) * self.per_page as usize;
        let end = (start + self.per_page as usize).min(total_items);
        let items = if start < total_items {
            items[start..end].to_vec()
        } else {
            Vec::new()
        };

        Page {
            items,
            number,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_by_default() {
        let page = Paginator::default().get_page(&numbers(30), None);

        assert_eq!(page.number, 1);
        assert_eq!(page.items, numbers(12));
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let page = Paginator::default().get_page(&numbers(30), Some(3));

        assert_eq!(page.items.len(), 6);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn overflowing_page_clamps_to_last() {
        let page = Paginator::default().get_page(&numbers(30), Some(99));

        assert_eq!(page.number, 3);
    }

    #[test]
    fn page_below_one_clamps_to_last() {
        let page = Paginator::default().get_page(&numbers(30), Some(0));

        assert_eq!(page.number, 3);
    }

    #[test]
    fn empty_results_still_have_one_page() {
        let page = Paginator::default().get_page(&Vec::<usize>::new(), Some(5));

        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(Paginator::new(0).is_err());
    }

    #[test]
    fn custom_page_size_splits_evenly() {
        let paginator = Paginator::new(5).unwrap();

        assert_eq!(paginator.total_pages(10), 2);
        assert_eq!(paginator.get_page(&numbers(10), Some(2)).items, numbers(10)[5..]);
    }
}
