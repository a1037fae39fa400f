//! File list component.
//!
//! One row per uploaded file in upload order. Clicking a row previews it;
//! the trash button removes it.

use leptos::prelude::*;
use leptos_icons::Icon;
use pdfdeck_core::{FileKey, FileRecord};

use crate::app::ViewerContext;
use crate::components::icons as ic;
use crate::utils::format_size;

stylance::import_crate_style!(css, "src/components/workspace/file_list.module.css");

/// Display data for one row, detached from the browser file handle.
#[derive(Clone, PartialEq)]
struct FileRow {
    key: FileKey,
    size: String,
}

impl<H> From<&FileRecord<H>> for FileRow {
    fn from(record: &FileRecord<H>) -> Self {
        Self {
            key: record.key().clone(),
            size: format_size(record.size_bytes()),
        }
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let rows = Signal::derive(move || {
        ctx.viewer
            .with(|v| v.files().iter().map(FileRow::from).collect::<Vec<_>>())
    });

    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <p class=css::empty>"No files yet."</p> }
        >
            <ul class=css::list role="listbox" aria-label="Uploaded files">
                <For
                    each=move || rows.get()
                    key=|row| row.key.clone()
                    children=move |row| view! { <FileListItem row=row /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn FileListItem(row: FileRow) -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let key_for_select = row.key.clone();
    let key_for_check = row.key.clone();
    let key_for_remove = row.key.clone();

    let is_selected = Signal::derive(move || {
        ctx.viewer
            .with(|v| v.navigator().is_selected(&key_for_check))
    });

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.select(&key_for_select);
    };

    // Remove without also selecting the row underneath
    let handle_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.remove(&key_for_remove);
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };

    let name = row.key.name.clone();
    let title = name.clone();
    let aria_label = format!("Remove {}", name);

    view! {
        <li
            class=item_class
            on:click=handle_click
            role="option"
            tabindex="0"
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE_PDF /></span>
            <span class=css::name title=title>{name}</span>
            <span class=css::size>{row.size}</span>
            <button
                class=css::removeButton
                on:click=handle_remove
                title="Remove"
                aria-label=aria_label
            >
                <Icon icon=ic::TRASH />
            </button>
        </li>
    }
}
