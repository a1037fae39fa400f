//! Root application module.
//!
//! Contains the main App component and the ViewerContext that wraps the core
//! [`Viewer`] session in Leptos signals.

use leptos::prelude::*;
use pdfdeck_core::{FileKey, FileRecord, LoadOutcome, LoadTicket, Viewer};
use web_sys::File;

use crate::components::Workspace;
use crate::config::PDFJS_WORKER_SRC;
use crate::utils::{dom, pdfjs};

// ============================================================================
// ViewerContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<ViewerContext>()`. All state changes go through the methods
/// below so that the core session stays the single source of truth.
///
/// # Note
///
/// The session holds browser `File` handles, which are not `Send`, so it
/// lives in local signal storage.
#[derive(Clone, Copy)]
pub struct ViewerContext {
    /// Files, selection, pagination, and the validation error.
    pub viewer: RwSignal<Viewer<File>, LocalStorage>,
    /// Ticket for the document currently being loaded or shown.
    pub ticket: RwSignal<Option<LoadTicket>>,
}

impl ViewerContext {
    pub fn new() -> Self {
        Self {
            viewer: RwSignal::new_local(Viewer::new()),
            ticket: RwSignal::new(None),
        }
    }

    /// Add files from the picker or a drop. Rejections land in the error slot.
    ///
    /// An empty batch still goes through so the previous error is cleared.
    pub fn intake(&self, files: Vec<FileRecord<File>>) {
        self.viewer.update(|v| {
            let _ = v.intake(files);
        });
    }

    pub fn remove(&self, key: &FileKey) {
        let closed_preview = self
            .viewer
            .try_update(|v| {
                let was_selected = v.navigator().is_selected(key);
                v.remove(key).is_some() && was_selected
            })
            .unwrap_or(false);

        if closed_preview {
            self.replace_ticket(None);
        }
    }

    pub fn select(&self, key: &FileKey) {
        let ticket = self.viewer.try_update(|v| v.select(key).ok()).flatten();
        if let Some(ticket) = ticket {
            self.replace_ticket(Some(ticket));
        }
    }

    pub fn deselect(&self) {
        self.viewer.update(|v| v.deselect());
        self.replace_ticket(None);
    }

    pub fn dismiss_error(&self) {
        self.viewer.update(|v| v.dismiss_error());
    }

    /// Load-success signal from the renderer.
    ///
    /// A stale load is released straight away: its selection is gone and
    /// nothing will render from it.
    pub fn document_loaded(&self, ticket: &LoadTicket, total_pages: u32) {
        let mut outcome = LoadOutcome::Stale;
        self.viewer.maybe_update(|v| {
            outcome = v.on_document_loaded(ticket, total_pages);
            matches!(outcome, LoadOutcome::Applied { .. })
        });

        if outcome == LoadOutcome::Stale {
            pdfjs::release(ticket);
        }
    }

    pub fn previous_page(&self) {
        self.viewer.maybe_update(|v| v.previous_page());
    }

    pub fn next_page(&self) {
        self.viewer.maybe_update(|v| v.next_page());
    }

    pub fn set_render_width(&self, width: f64) {
        self.viewer.maybe_update(|v| v.viewport_width_changed(width));
    }

    /// Swap the active ticket, freeing the renderer's copy of the old document.
    fn replace_ticket(&self, next: Option<LoadTicket>) {
        if let Some(previous) = self.ticket.get_untracked() {
            pdfjs::release(&previous);
        }
        self.ticket.set(next);
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global ViewerContext
/// - Configures the PDF.js worker and blocks the browser context menu
/// - Renders the Workspace inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = ViewerContext::new();
    provide_context(ctx);

    pdfjs::configure_worker(PDFJS_WORKER_SRC);
    dom::suppress_context_menu();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            margin-top: 1.5rem;
                            background: #1f2937;
                            color: white;
                            border: none;
                            padding: 0.6rem 1.5rem;
                            border-radius: 0.5rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Workspace />
        </ErrorBoundary>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use pdfdeck_core::IntakeError;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn record(name: &str, mime_type: &str) -> FileRecord<File> {
        let parts = js_sys::Array::of1(&"hello".into());
        let options = FilePropertyBag::new();
        options.set_type(mime_type);
        let file = File::new_with_str_sequence_and_options(&parts, name, &options).unwrap();
        FileRecord::new(name, mime_type, file.size() as u64, file)
    }

    #[wasm_bindgen_test]
    fn test_empty_drop_clears_error_banner() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ViewerContext::new();
            ctx.intake(vec![record("notes.txt", "text/plain")]);
            assert_eq!(
                ctx.viewer.with_untracked(|v| v.error()),
                Some(IntakeError::InvalidFileType)
            );

            ctx.intake(Vec::new());
            assert_eq!(ctx.viewer.with_untracked(|v| v.error()), None);
        });
    }
}
