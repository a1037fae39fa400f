//! Main workspace component.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: Sidebar with intake and file list on the left,
//!   preview on the right
//! - **Mobile (< 768px)**: Single column, sidebar above the preview

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use super::{DropZone, ErrorBanner, FileList};
use crate::app::ViewerContext;
use crate::components::icons as ic;
use crate::components::preview::PreviewPanel;
use crate::config::{APP_NAME, COMPACT_LAYOUT_QUERY};

stylance::import_crate_style!(css, "src/components/workspace/workspace.module.css");

/// Workspace view component.
#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let compact = use_media_query(COMPACT_LAYOUT_QUERY.to_string());
    let has_selection =
        Signal::derive(move || ctx.viewer.with(|v| v.navigator().selected().is_some()));

    let layout_class = move || {
        if compact.get() {
            format!("{} {}", css::workspace, css::compact)
        } else {
            css::workspace.to_string()
        }
    };

    view! {
        <div class=layout_class>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
            </header>

            <div class=css::body>
                // Left: intake and file list
                <aside class=css::sidebar aria-label="Files">
                    <DropZone />
                    <ErrorBanner />
                    <FileList />
                </aside>

                // Right: preview
                <main class=css::main>
                    <Show
                        when=move || has_selection.get()
                        fallback=|| view! {
                            <div class=css::placeholder>
                                <span class=css::placeholderIcon><Icon icon=ic::FILE_PDF /></span>
                                <p>"Select a file to preview it."</p>
                            </div>
                        }
                    >
                        <PreviewPanel />
                    </Show>
                </main>
            </div>
        </div>
    }
}
