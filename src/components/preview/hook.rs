//! Preview wiring hook.
//!
//! Connects the core session to the PDF.js bridge:
//! 1. a new ticket starts a document load and feeds the page count back
//! 2. the container is measured on mount, on every selection, and on
//!    throttled window resizes
//! 3. any change of page, width, or page count re-renders the canvas

use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use pdfdeck_core::{Pagination, Viewer, log};
use wasm_bindgen_futures::spawn_local;

use crate::app::ViewerContext;
use crate::config::{FALLBACK_RENDER_WIDTH, RESIZE_THROTTLE_MS};
use crate::utils::{dom, on_resize_throttled, pdfjs};

/// Signals the preview pane renders from.
#[derive(Clone, Copy)]
pub struct PreviewData {
    /// Name of the previewed file
    pub file_name: Signal<String>,
    /// Current page and page count
    pub pagination: Signal<Pagination>,
}

type SessionSignal<H> = RwSignal<Viewer<H>, LocalStorage>;

/// Page state that only notifies when the page or page count changes, so
/// intake, removal, and error changes don't redraw the canvas.
fn pagination_memo<H: 'static>(viewer: SessionSignal<H>) -> Memo<Pagination> {
    Memo::new(move |_| viewer.with(|v| v.pagination()))
}

fn render_width_memo<H: 'static>(viewer: SessionSignal<H>) -> Memo<f64> {
    Memo::new(move |_| {
        viewer
            .with(|v| v.navigator().render_width())
            .unwrap_or(FALLBACK_RENDER_WIDTH)
    })
}

/// Hook that drives loading, measuring, and rendering for the preview pane.
///
/// Call once from the component that owns `container` and `canvas`.
pub fn use_preview(container: NodeRef<Div>, canvas: NodeRef<Canvas>) -> PreviewData {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let file_name = Signal::derive(move || {
        ctx.viewer.with(|v| {
            v.selected()
                .map(|record| record.name().to_string())
                .unwrap_or_default()
        })
    });

    let pagination = pagination_memo(ctx.viewer);
    let render_width = render_width_memo(ctx.viewer);

    // Load the document whenever a new ticket is issued
    Effect::new(move |_| {
        let Some(ticket) = ctx.ticket.get() else {
            return;
        };
        let file = ctx.viewer.with_untracked(|v| {
            v.files()
                .get(ticket.key())
                .map(|record| record.handle().clone())
        });
        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            match pdfjs::load_document(&ticket, &file).await {
                Ok(total_pages) => ctx.document_loaded(&ticket, total_pages),
                // No page count arrives; the pane stays on page 1.
                Err(err) => log::warn(&format!("{}: {}", ticket.key(), err)),
            }
        });
    });

    // Measure immediately on mount and on each selection
    Effect::new(move |_| {
        ctx.ticket.track();
        if let Some(element) = container.get() {
            ctx.set_render_width(dom::element_width(&element));
        }
    });

    on_resize_throttled(RESIZE_THROTTLE_MS, move || {
        // The timer can outlive the panel; a disposed node ref reads as None.
        if let Some(element) = container.try_get_untracked().flatten() {
            ctx.set_render_width(dom::element_width(&element));
        }
    });

    // Render the current page
    Effect::new(move |_| {
        let Some(ticket) = ctx.ticket.get() else {
            return;
        };
        let state = pagination.get();
        let width = render_width.get();
        if state.total_pages().is_none() {
            return;
        }
        let Some(canvas) = canvas.get() else {
            return;
        };

        let page = state.current_page();
        spawn_local(async move {
            if let Err(err) = pdfjs::render_page(&ticket, canvas, page, width).await {
                log::warn(&format!("{} page {}: {}", ticket.key(), page, err));
            }
        });
    });

    PreviewData {
        file_name,
        pagination: pagination.into(),
    }
}
