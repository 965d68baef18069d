//! File list sidebar.
//!
//! Lists the bundled files. Clicking an entry switches the editor, unless
//! the intro animation is still typing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::FileId;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn Sidebar(#[prop(into)] compact: Signal<bool>) -> impl IntoView {
    let class = move || {
        if compact.get() {
            format!("{} {}", css::sidebar, css::compact)
        } else {
            css::sidebar.to_string()
        }
    };

    view! {
        <nav class=class aria-label="Files">
            <div class=css::title>"EXPLORER"</div>
            <div class=css::folder>
                <span class=css::folderIcon><Icon icon=ic::CHEVRON_DOWN /></span>
                <span class=css::folderIcon><Icon icon=ic::EXPLORER /></span>
                <span>{APP_NAME}</span>
            </div>
            <ul class=css::files role="listbox">
                {FileId::ALL
                    .into_iter()
                    .map(|file| view! { <FileItem file=file /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn FileItem(file: FileId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.editor.session;

    let label = file.tab_label();
    let is_active = Signal::derive(move || session.with(|s| s.active() == file));

    let item_class = move || {
        if is_active.get() {
            format!("{} {}", css::fileItem, css::active)
        } else {
            css::fileItem.to_string()
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.editor.select(file);
    };

    view! {
        <li
            class=item_class
            data-file=file.as_str()
            role="option"
            aria-selected=move || is_active.get()
            on:click=handle_click
        >
            {label.icon.map(|kind| view! {
                <span class=css::fileIcon><Icon icon=ic::file_icon(kind) /></span>
            })}
            <span class=css::fileName>{label.name}</span>
        </li>
    }
}
