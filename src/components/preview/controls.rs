//! Page indicator and previous/next buttons.

use leptos::prelude::*;
use leptos_icons::Icon;
use pdfdeck_core::Pagination;

use crate::app::ViewerContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview/controls.module.css");

/// Page controls.
///
/// The disabled states only mirror the core's own bounds checks. Next stays
/// disabled until the renderer has reported a page count, so a document that
/// never loads is pinned to page 1.
#[component]
pub fn PageControls(pagination: Signal<Pagination>) -> impl IntoView {
    let ctx = use_context::<ViewerContext>().expect("ViewerContext must be provided");

    view! {
        <div class=css::controls>
            {move || pagination.get().label().map(|label| view! {
                <p class=css::indicator>{label}</p>
            })}
            <div class=css::buttons>
                <button
                    type="button"
                    class=css::navButton
                    disabled=move || !pagination.get().can_go_previous()
                    on:click=move |_| ctx.previous_page()
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Previous"
                </button>
                <button
                    type="button"
                    class=css::navButton
                    disabled=move || !pagination.get().can_go_next()
                    on:click=move |_| ctx.next_page()
                >
                    "Next"
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </div>
    }
}
