//! File intake: picker, drop zone, and the validation error banner.
//!
//! Both the picker and a drop feed the same [`ViewerContext::intake`], so
//! validation is identical whichever way the files arrive.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use web_sys::HtmlInputElement;

use crate::app::ViewerContext;
use crate::components::icons as ic;
use crate::config::PICKER_ACCEPT;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/workspace/intake.module.css");

/// Drop target that doubles as the file picker.
///
/// The hidden input sits inside a `<label>`, so a click anywhere on the zone
/// opens the native picker.
#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let (hovering, set_hovering) = signal(false);

    let handle_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            ctx.intake(dom::file_records(&list));
        }
        // Let the same file be picked again after a removal
        input.set_value("");
    };

    let handle_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_hovering.set(true);
    };

    let handle_dragleave = move |_: ev::DragEvent| set_hovering.set(false);

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_hovering.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            ctx.intake(dom::file_records(&list));
        }
    };

    let zone_class = move || {
        if hovering.get() {
            format!("{} {}", css::dropZone, css::dropZoneActive)
        } else {
            css::dropZone.to_string()
        }
    };

    view! {
        <label
            class=zone_class
            on:dragover=handle_dragover
            on:dragleave=handle_dragleave
            on:drop=handle_drop
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
            <span class=css::prompt>"Drop PDF files here or click to browse"</span>
            <input
                type="file"
                class=css::hiddenInput
                accept=PICKER_ACCEPT
                multiple=true
                on:change=handle_change
            />
        </label>
    }
}

/// Validation error from the most recent intake, until dismissed or replaced.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    let error = Signal::derive(move || ctx.viewer.with(|v| v.error()));

    view! {
        {move || error.get().map(|err| view! {
            <div class=css::errorBanner role="alert">
                <span class=css::errorIcon aria-hidden="true"><Icon icon=ic::INFO /></span>
                <span class=css::errorText>{err.to_string()}</span>
                <button
                    class=css::dismissButton
                    on:click=move |_| ctx.dismiss_error()
                    title="Dismiss"
                    aria-label="Dismiss error"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        })}
    }
}
