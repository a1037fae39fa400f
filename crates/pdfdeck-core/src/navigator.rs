//! Preview navigation: which file is shown, which page, and at what width.

use crate::log;
use crate::models::{FileKey, LoadOutcome, LoadTicket, Pagination};

/// Selection, pagination, and render width for the preview pane.
///
/// The selection is a key into the file collection, never a copy of the
/// record. Every selection change bumps a generation counter so that a
/// renderer signal for an earlier selection can be recognised and dropped.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    selected: Option<FileKey>,
    pagination: Pagination,
    generation: u64,
    render_width: Option<f64>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected(&self) -> Option<&FileKey> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, key: &FileKey) -> bool {
        self.selected.as_ref() == Some(key)
    }

    #[inline]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    #[inline]
    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    #[inline]
    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.total_pages()
    }

    /// Width the renderer should draw pages at, once measured.
    #[inline]
    pub fn render_width(&self) -> Option<f64> {
        self.render_width
    }

    /// Select `key` for preview and reset to page 1 with an unknown count.
    ///
    /// Re-selecting the current file also resets and issues a new ticket.
    pub fn select(&mut self, key: FileKey) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.selected = Some(key.clone());
        self.pagination = Pagination::default();
        LoadTicket::new(key, self.generation)
    }

    /// Drop the selection. Any outstanding ticket becomes stale.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.selected = None;
        self.pagination = Pagination::default();
    }

    /// Whether `ticket` was issued for the selection that is still active.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation() == self.generation && self.is_selected(ticket.key())
    }

    /// Apply the renderer's load-success signal.
    ///
    /// Navigation may have moved past the real end of the document while it
    /// was loading, so the current page is clamped to the reported count.
    pub fn on_document_loaded(&mut self, ticket: &LoadTicket, total_pages: u32) -> LoadOutcome {
        if !self.is_current(ticket) {
            log::info(&format!(
                "Ignoring stale page count for {} (generation {})",
                ticket.key(),
                ticket.generation()
            ));
            return LoadOutcome::Stale;
        }
        if total_pages == 0 {
            log::warn(&format!("Renderer reported zero pages for {}", ticket.key()));
            return LoadOutcome::InvalidPageCount;
        }

        let clamped = self.pagination.set_total_pages(total_pages);
        LoadOutcome::Applied { clamped }
    }

    /// Move by `offset` pages.
    ///
    /// The result never leaves `1..=total_pages` (or `1..` while the count is
    /// unknown): an offset that would overshoot lands on the boundary page.
    /// Returns `true` if the page changed. Does nothing without a selection.
    pub fn go_to_page(&mut self, offset: i32) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.pagination.step(offset)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(-1)
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Record the preview container's measured width.
    ///
    /// Non-finite and non-positive widths (detached or hidden container) are
    /// ignored. Returns `true` if the stored width changed.
    pub fn viewport_width_changed(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            return false;
        }
        if self.render_width == Some(width) {
            return false;
        }
        self.render_width = Some(width);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> FileKey {
        FileKey::new(name, "application/pdf")
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_select_resets_pagination() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        nav.on_document_loaded(&ticket, 8);
        nav.go_to_page(4);
        assert_eq!(nav.current_page(), 5);

        nav.select(key("b.pdf"));
        assert_eq!(nav.current_page(), 1);
        assert_eq!(nav.total_pages(), None);
        assert!(nav.is_selected(&key("b.pdf")));
    }

    #[test]
    fn test_reselect_issues_new_ticket() {
        let mut nav = Navigator::new();
        let first = nav.select(key("a.pdf"));
        let second = nav.select(key("a.pdf"));
        assert_ne!(first, second);
        assert!(!nav.is_current(&first));
        assert!(nav.is_current(&second));
    }

    #[test]
    fn test_clear_drops_selection() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        nav.go_to_page(2);
        nav.clear();

        assert_eq!(nav.selected(), None);
        assert_eq!(nav.pagination(), Pagination::default());
        assert_eq!(nav.on_document_loaded(&ticket, 4), LoadOutcome::Stale);
    }

    // =========================================================================
    // Load Signal
    // =========================================================================

    #[test]
    fn test_load_sets_total() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        assert_eq!(
            nav.on_document_loaded(&ticket, 5),
            LoadOutcome::Applied { clamped: false }
        );
        assert_eq!(nav.total_pages(), Some(5));
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut nav = Navigator::new();
        let old = nav.select(key("a.pdf"));
        let current = nav.select(key("b.pdf"));

        assert_eq!(nav.on_document_loaded(&old, 40), LoadOutcome::Stale);
        assert_eq!(nav.total_pages(), None);

        nav.on_document_loaded(&current, 3);
        assert_eq!(nav.total_pages(), Some(3));
    }

    #[test]
    fn test_late_load_clamps_early_navigation() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        nav.go_to_page(1);
        nav.go_to_page(1);
        nav.go_to_page(1);
        assert_eq!(nav.current_page(), 4);

        assert_eq!(
            nav.on_document_loaded(&ticket, 2),
            LoadOutcome::Applied { clamped: true }
        );
        assert_eq!(nav.current_page(), 2);
    }

    #[test]
    fn test_zero_pages_is_rejected() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        assert_eq!(nav.on_document_loaded(&ticket, 0), LoadOutcome::InvalidPageCount);
        assert_eq!(nav.total_pages(), None);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn test_previous_on_first_page_stays() {
        let mut nav = Navigator::new();
        nav.select(key("a.pdf"));
        assert!(!nav.go_to_page(-1));
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_overshoot_lands_on_last_page() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        nav.on_document_loaded(&ticket, 5);
        assert!(nav.go_to_page(10));
        assert_eq!(nav.current_page(), 5);
        assert!(!nav.next_page());
        assert!(nav.previous_page());
        assert_eq!(nav.current_page(), 4);
    }

    #[test]
    fn test_navigation_requires_selection() {
        let mut nav = Navigator::new();
        assert!(!nav.next_page());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_page_stays_in_bounds_for_any_offsets() {
        let mut nav = Navigator::new();
        let ticket = nav.select(key("a.pdf"));
        nav.on_document_loaded(&ticket, 7);

        let offsets = [3, -10, 1, 1, 1, 1, 1, 1, 1, 50, -2, i32::MAX, i32::MIN, 0, 6, -1];
        for offset in offsets {
            nav.go_to_page(offset);
            assert!((1..=7).contains(&nav.current_page()), "offset {offset}");
        }
    }

    // =========================================================================
    // Render Width
    // =========================================================================

    #[test]
    fn test_viewport_width() {
        let mut nav = Navigator::new();
        assert_eq!(nav.render_width(), None);
        assert!(nav.viewport_width_changed(640.0));
        assert!(!nav.viewport_width_changed(640.0));
        assert!(!nav.viewport_width_changed(0.0));
        assert!(!nav.viewport_width_changed(f64::NAN));
        assert_eq!(nav.render_width(), Some(640.0));
    }

    #[test]
    fn test_width_survives_selection_change() {
        let mut nav = Navigator::new();
        nav.viewport_width_changed(500.0);
        nav.select(key("a.pdf"));
        assert_eq!(nav.render_width(), Some(500.0));
    }
}
