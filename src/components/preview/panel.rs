//! Preview pane component.

use leptos::html::{Canvas, Div};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::{PageControls, use_preview};
use crate::app::ViewerContext;
use crate::components::icons as ic;
use crate::config::keys;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Preview pane: header, rendered page, and page controls.
///
/// Keyboard: arrow keys and Page Up/Down turn pages, Escape closes.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let container_ref = NodeRef::<Div>::new();
    let canvas_ref = NodeRef::<Canvas>::new();
    let data = use_preview(container_ref, canvas_ref);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let key = ev.key();
        let key = key.as_str();
        if keys::PREVIOUS_PAGE.contains(&key) {
            ev.prevent_default();
            ctx.previous_page();
        } else if keys::NEXT_PAGE.contains(&key) {
            ev.prevent_default();
            ctx.next_page();
        } else if keys::CLOSE_PREVIEW.contains(&key) {
            ev.prevent_default();
            ctx.deselect();
        }
    };

    let is_loading = move || data.pagination.with(|p| p.total_pages().is_none());

    view! {
        <section
            class=css::panel
            tabindex="0"
            on:keydown=handle_keydown
            aria-label="PDF preview"
        >
            <header class=css::header>
                <span class=css::filename>{move || data.file_name.get()}</span>
                <button
                    class=css::closeButton
                    on:click=move |_| ctx.deselect()
                    title="Close preview (Esc)"
                    aria-label="Close preview"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::pageWrapper node_ref=container_ref>
                <canvas class=css::page node_ref=canvas_ref />
                <Show when=is_loading>
                    <div class=css::loading>"Loading document..."</div>
                </Show>
            </div>

            <PageControls pagination=data.pagination />
        </section>
    }
}
