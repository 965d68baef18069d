//! Drag handle for resizing the terminal panel.
//!
//! Pressing the handle (mouse or touch) starts a resize; moving the pointer
//! anywhere in the window sets the panel height to the space below the
//! pointer; releasing ends it.

use leptos::ev;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::resize::panel_height;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/resizer.module.css");

#[component]
pub fn DragHandle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let resizing = ctx.terminal.resizing;
    let height = ctx.terminal.height;

    let resize_to = move |pointer_y: i32| {
        if !resizing.get_untracked() {
            return;
        }
        if let Some(viewport) = dom::viewport_height() {
            height.set(Some(panel_height(viewport, f64::from(pointer_y))));
        }
    };

    let handles = vec![
        window_event_listener(ev::mousemove, move |e| resize_to(e.client_y())),
        window_event_listener(ev::mouseup, move |_| resizing.set(false)),
        window_event_listener(ev::touchmove, move |e| {
            if let Some(touch) = e.touches().get(0) {
                resize_to(touch.client_y());
            }
        }),
        window_event_listener(ev::touchend, move |_| resizing.set(false)),
    ];
    on_cleanup(move || handles.into_iter().for_each(|h| h.remove()));

    let on_mousedown = move |e: ev::MouseEvent| {
        e.prevent_default();
        resizing.set(true);
    };
    let on_touchstart = move |e: ev::TouchEvent| {
        e.prevent_default();
        resizing.set(true);
    };

    let class = move || {
        if resizing.get() {
            format!("{} {}", css::handle, css::dragging)
        } else {
            css::handle.to_string()
        }
    };

    view! {
        <div
            class=class
            role="separator"
            aria-orientation="horizontal"
            aria-label="Resize terminal"
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <div class=css::grip></div>
        </div>
    }
}
