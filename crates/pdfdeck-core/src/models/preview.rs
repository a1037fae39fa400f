//! Preview state: page position and renderer load correlation.

use serde::{Deserialize, Serialize};

use super::FileKey;
use crate::config::FIRST_PAGE;

// =============================================================================
// Pagination
// =============================================================================

/// Current page and, once the renderer has reported it, the page count.
///
/// Invariant: `current_page >= 1`, and `current_page <= total_pages` whenever
/// the total is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: u32,
    total_pages: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: FIRST_PAGE,
            total_pages: None,
        }
    }
}

impl Pagination {
    #[inline]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[inline]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > FIRST_PAGE
    }

    /// Only true once the page count is known and there is a later page.
    pub fn can_go_next(&self) -> bool {
        self.total_pages.is_some_and(|total| self.current_page < total)
    }

    /// Page indicator text, e.g. `"3 / 12"`. `None` until the count is known.
    pub fn label(&self) -> Option<String> {
        self.total_pages
            .map(|total| format!("{} / {}", self.current_page, total))
    }

    /// Move by `offset` pages, clamped to the first page and, when known, the
    /// last page. Returns `true` if the current page changed.
    pub(crate) fn step(&mut self, offset: i32) -> bool {
        let last = self.total_pages.unwrap_or(u32::MAX);
        let target = (i64::from(self.current_page) + i64::from(offset))
            .clamp(i64::from(FIRST_PAGE), i64::from(last));
        let target = u32::try_from(target).unwrap_or(last);

        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    /// Record the page count and pull the current page back inside it.
    /// Returns `true` if the current page had to be clamped.
    pub(crate) fn set_total_pages(&mut self, total: u32) -> bool {
        self.total_pages = Some(total);
        if self.current_page > total {
            self.current_page = total;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Load Correlation
// =============================================================================

/// Token issued when a file is selected for preview.
///
/// The renderer hands it back with its load-success signal; a ticket from an
/// earlier selection no longer matches and its signal is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    key: FileKey,
    generation: u64,
}

impl LoadTicket {
    pub(crate) fn new(key: FileKey, generation: u64) -> Self {
        Self { key, generation }
    }

    #[inline]
    pub fn key(&self) -> &FileKey {
        &self.key
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a load-success signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page count recorded. `clamped` is set when the current page was past
    /// the end and had to be pulled back.
    Applied { clamped: bool },
    /// The ticket belongs to a selection that is no longer active.
    Stale,
    /// The renderer reported zero pages.
    InvalidPageCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(total: u32) -> Pagination {
        let mut pagination = Pagination::default();
        pagination.set_total_pages(total);
        pagination
    }

    #[test]
    fn test_default_is_first_page_unknown_total() {
        let pagination = Pagination::default();
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), None);
        assert_eq!(pagination.label(), None);
    }

    #[test]
    fn test_step_within_bounds() {
        let mut pagination = loaded(5);
        assert!(pagination.step(1));
        assert!(pagination.step(2));
        assert_eq!(pagination.current_page(), 4);
        assert!(pagination.step(-1));
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let mut pagination = loaded(5);
        assert!(!pagination.step(-1));
        assert_eq!(pagination.current_page(), 1);

        assert!(pagination.step(10));
        assert_eq!(pagination.current_page(), 5);
        assert!(!pagination.step(1));
        assert_eq!(pagination.current_page(), 5);

        assert!(pagination.step(i32::MIN));
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_step_without_total_has_no_upper_bound() {
        let mut pagination = Pagination::default();
        assert!(pagination.step(3));
        assert_eq!(pagination.current_page(), 4);
        assert!(!pagination.can_go_next());
    }

    #[test]
    fn test_set_total_clamps_current_page() {
        let mut pagination = Pagination::default();
        pagination.step(7);
        assert!(pagination.set_total_pages(3));
        assert_eq!(pagination.current_page(), 3);
        assert!(!pagination.set_total_pages(10));
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_navigation_flags() {
        let mut pagination = loaded(2);
        assert!(!pagination.can_go_previous());
        assert!(pagination.can_go_next());
        pagination.step(1);
        assert!(pagination.can_go_previous());
        assert!(!pagination.can_go_next());
    }

    #[test]
    fn test_label() {
        let mut pagination = loaded(12);
        pagination.step(2);
        assert_eq!(pagination.label().as_deref(), Some("3 / 12"));
    }
}
