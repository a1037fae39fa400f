//! Viewer session: file collection, preview navigation, and the validation
//! error slot, updated together so cross-component invariants hold after
//! every operation.

use crate::error::{IntakeError, ViewerError};
use crate::file_set::FileSet;
use crate::log;
use crate::models::{FileKey, FileRecord, LoadOutcome, LoadTicket, Pagination};
use crate::navigator::Navigator;

/// State behind the viewer UI.
///
/// Every UI event maps to one method here. Invariants maintained:
/// - the selection, when set, names a file in the collection
/// - at most one validation error is held, and each intake clears it first
#[derive(Clone, Debug)]
pub struct Viewer<H> {
    files: FileSet<H>,
    navigator: Navigator,
    error: Option<IntakeError>,
}

impl<H> Default for Viewer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Viewer<H> {
    pub fn new() -> Self {
        Self {
            files: FileSet::new(),
            navigator: Navigator::new(),
            error: None,
        }
    }

    #[inline]
    pub fn files(&self) -> &FileSet<H> {
        &self.files
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[inline]
    pub fn pagination(&self) -> Pagination {
        self.navigator.pagination()
    }

    /// The validation error from the most recent intake, if it failed.
    #[inline]
    pub fn error(&self) -> Option<IntakeError> {
        self.error
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// The record currently shown in the preview.
    pub fn selected(&self) -> Option<&FileRecord<H>> {
        self.navigator
            .selected()
            .and_then(|key| self.files.get(key))
    }

    // =========================================================================
    // File Set
    // =========================================================================

    /// Add a batch of files from the picker or a drop.
    ///
    /// The previous error is cleared first. On rejection nothing is added and
    /// the error is stored for display as well as returned.
    pub fn intake(&mut self, candidates: Vec<FileRecord<H>>) -> Result<usize, IntakeError> {
        self.error = None;
        let offered = candidates.len();

        match self.files.intake(candidates) {
            Ok(added) => Ok(added),
            Err(err) => {
                log::info(&format!("Rejected batch of {}: {}", offered, err));
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Remove a file. If it was being previewed, the preview closes.
    pub fn remove(&mut self, key: &FileKey) -> Option<FileRecord<H>> {
        let removed = self.files.remove(key)?;
        if self.navigator.is_selected(key) {
            self.navigator.clear();
        }
        Some(removed)
    }

    /// Preview a file from the collection, starting at page 1.
    ///
    /// The returned ticket must accompany the renderer's page count.
    pub fn select(&mut self, key: &FileKey) -> Result<LoadTicket, ViewerError> {
        if !self.files.contains(key) {
            log::warn(&format!("Cannot select {}: not in collection", key));
            return Err(ViewerError::NotInCollection(key.clone()));
        }
        Ok(self.navigator.select(key.clone()))
    }

    /// Close the preview.
    pub fn deselect(&mut self) {
        self.navigator.clear();
    }

    // =========================================================================
    // Preview
    // =========================================================================

    pub fn on_document_loaded(&mut self, ticket: &LoadTicket, total_pages: u32) -> LoadOutcome {
        self.navigator.on_document_loaded(ticket, total_pages)
    }

    pub fn go_to_page(&mut self, offset: i32) -> bool {
        self.navigator.go_to_page(offset)
    }

    pub fn previous_page(&mut self) -> bool {
        self.navigator.previous_page()
    }

    pub fn next_page(&mut self) -> bool {
        self.navigator.next_page()
    }

    pub fn viewport_width_changed(&mut self, width: f64) -> bool {
        self.navigator.viewport_width_changed(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> FileRecord<()> {
        FileRecord::new(name, "application/pdf", 2048, ())
    }

    fn key(name: &str) -> FileKey {
        FileKey::new(name, "application/pdf")
    }

    #[test]
    fn test_error_slot_is_cleared_by_next_intake() {
        let mut viewer = Viewer::new();
        let bad = FileRecord::new("a.txt", "text/plain", 1, ());
        assert!(viewer.intake(vec![bad]).is_err());
        assert_eq!(viewer.error(), Some(IntakeError::InvalidFileType));

        viewer.intake(vec![pdf("a.pdf")]).unwrap();
        assert_eq!(viewer.error(), None);
    }

    #[test]
    fn test_empty_intake_clears_error() {
        let mut viewer: Viewer<()> = Viewer::new();
        let _ = viewer.intake(vec![FileRecord::new("a.txt", "text/plain", 1, ())]);
        assert!(viewer.error().is_some());

        assert_eq!(viewer.intake(Vec::new()), Ok(0));
        assert_eq!(viewer.error(), None);
        assert!(viewer.files().is_empty());
    }

    #[test]
    fn test_error_slot_holds_latest() {
        let mut viewer = Viewer::new();
        viewer.intake(vec![pdf("a.pdf")]).unwrap();
        let _ = viewer.intake(vec![FileRecord::new("a.txt", "text/plain", 1, ())]);
        let _ = viewer.intake(vec![pdf("a.pdf")]);
        assert_eq!(viewer.error(), Some(IntakeError::DuplicateFile));

        viewer.dismiss_error();
        assert_eq!(viewer.error(), None);
    }

    #[test]
    fn test_remove_selected_clears_preview() {
        let mut viewer = Viewer::new();
        viewer.intake(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        let ticket = viewer.select(&key("a.pdf")).unwrap();
        viewer.on_document_loaded(&ticket, 5);
        viewer.next_page();
        viewer.next_page();

        viewer.remove(&key("a.pdf"));
        assert!(viewer.selected().is_none());
        assert_eq!(viewer.pagination().current_page(), 1);
        assert_eq!(viewer.pagination().total_pages(), None);
        assert_eq!(viewer.on_document_loaded(&ticket, 5), LoadOutcome::Stale);
    }

    #[test]
    fn test_remove_other_keeps_preview() {
        let mut viewer = Viewer::new();
        viewer.intake(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        let ticket = viewer.select(&key("a.pdf")).unwrap();
        viewer.on_document_loaded(&ticket, 5);
        viewer.next_page();

        viewer.remove(&key("b.pdf"));
        assert_eq!(viewer.selected().map(FileRecord::name), Some("a.pdf"));
        assert_eq!(viewer.pagination().current_page(), 2);
    }

    #[test]
    fn test_select_unknown_is_reported() {
        let mut viewer: Viewer<()> = Viewer::new();
        assert_eq!(
            viewer.select(&key("ghost.pdf")),
            Err(ViewerError::NotInCollection(key("ghost.pdf")))
        );
        assert!(viewer.navigator().selected().is_none());
    }

    #[test]
    fn test_select_unknown_keeps_current_preview() {
        let mut viewer = Viewer::new();
        viewer.intake(vec![pdf("a.pdf")]).unwrap();
        let ticket = viewer.select(&key("a.pdf")).unwrap();

        assert!(viewer.select(&key("ghost.pdf")).is_err());
        assert_eq!(
            viewer.on_document_loaded(&ticket, 3),
            LoadOutcome::Applied { clamped: false }
        );
    }

    #[test]
    fn test_deselect() {
        let mut viewer = Viewer::new();
        viewer.intake(vec![pdf("a.pdf")]).unwrap();
        viewer.select(&key("a.pdf")).unwrap();
        viewer.deselect();
        assert!(viewer.selected().is_none());
        assert_eq!(viewer.files().len(), 1);
    }
}
