//! Editor pane.
//!
//! Tab bar, line-number gutter and code view for the active file.
//!
//! The code element's text is written directly rather than through a view
//! child: Prism replaces the element's children with highlighted spans, so
//! the content must be re-set as a whole on every change.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::highlight_element;

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

#[component]
pub fn Editor() -> impl IntoView {
    view! {
        <section class=css::editor>
            <TabBar />
            <div class=css::body>
                <Gutter />
                <CodeView />
            </div>
        </section>
    }
}

/// Tab bar showing the active file's name and icon.
#[component]
fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let label = Memo::new(move |_| ctx.editor.session.with(|s| s.tab_label()));

    view! {
        <div class=css::tabBar>
            <div class=css::tab>
                {move || label.get().icon.map(|kind| view! {
                    <span class=css::tabIcon><Icon icon=ic::file_icon(kind) /></span>
                })}
                <span>{move || label.get().name}</span>
                <span class=css::tabClose aria-hidden="true"><Icon icon=ic::CLOSE /></span>
            </div>
        </div>
    }
}

/// Line-number column, one row per line of the displayed text.
#[component]
fn Gutter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let lines = Memo::new(move |_| ctx.editor.session.with(|s| s.line_numbers()));

    view! {
        <div class=css::gutter aria-hidden="true">
            <For
                each=move || lines.get().labels()
                key=|n| *n
                children=|n| view! { <div class=css::lineNumber>{n}</div> }
            />
        </div>
    }
}

/// Code display surface.
#[component]
fn CodeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.editor.session;
    let code_ref = NodeRef::<leptos::html::Code>::new();

    // Mirror the display buffer into the DOM and highlight once per
    // completed animation or file switch.
    Effect::new(move || {
        let Some(code) = code_ref.get() else {
            return;
        };
        session.with(|s| code.set_text_content(Some(s.display())));

        let mut pending = false;
        session.try_update_untracked(|s| pending = s.take_highlight());
        if pending {
            highlight_element(&code);
        }
    });

    let code_class = move || {
        session.with(|s| {
            let lang = s.active().language();
            if s.is_busy() {
                format!("{} {} language-{}", css::code, css::typing, lang)
            } else {
                format!("{} language-{}", css::code, lang)
            }
        })
    };

    view! {
        <pre class=css::pre>
            <code node_ref=code_ref class=code_class></code>
        </pre>
    }
}
