//! Workbench layout.
//!
//! Sidebar on the left, editor above a resizable terminal panel on the
//! right. On narrow screens the sidebar collapses into a strip above the
//! editor.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::editor::Editor;
use crate::components::sidebar::Sidebar;
use crate::components::terminal::{DragHandle, TerminalPanel};
use crate::config::MOBILE_QUERY;

stylance::import_crate_style!(css, "src/components/workbench.module.css");

#[component]
pub fn Workbench() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_mobile = use_media_query(MOBILE_QUERY);
    let resizing = ctx.terminal.resizing;

    let class = move || {
        let mut class = css::workbench.to_string();
        if is_mobile.get() {
            class.push(' ');
            class.push_str(css::stacked);
        }
        if resizing.get() {
            class.push(' ');
            class.push_str(css::resizing);
        }
        class
    };

    view! {
        <div class=class>
            <Sidebar compact=is_mobile />
            <main class=css::main>
                <Editor />
                <DragHandle />
                <TerminalPanel />
            </main>
        </div>
    }
}
