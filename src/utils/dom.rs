//! DOM and Web API utility functions.

use leptos::ev;
use leptos::prelude::*;
use pdfdeck_core::FileRecord;
use web_sys::{Element, File, FileList, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Milliseconds since the epoch, as seen by the browser.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Rendered width of an element (its bounding box, including padding).
pub fn element_width(element: &Element) -> f64 {
    element.get_bounding_client_rect().width()
}

/// Convert a browser `FileList` into intake candidates, keeping its order.
///
/// The browser reports an empty `type` when it cannot guess one; that is
/// passed through so the extension check can decide.
pub fn file_records(list: &FileList) -> Vec<FileRecord<File>> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| {
            let size = file.size().max(0.0) as u64;
            FileRecord::new(file.name(), file.type_(), size, file)
        })
        .collect()
}

/// Block the browser context menu for the lifetime of the calling owner.
pub fn suppress_context_menu() {
    let handle = window_event_listener(ev::contextmenu, |event| event.prevent_default());
    on_cleanup(move || handle.remove());
}
