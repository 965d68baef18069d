//! Terminal panel.
//!
//! A tabbed panel under the editor with static content:
//! - `TERMINAL` prints the status lines from `site.toml`
//! - `LOCAL` shows a greeting card
//!
//! The panel's height is controlled by the [`DragHandle`] above it.

mod resizer;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::TerminalTab;

pub use resizer::DragHandle;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn TerminalPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let height = ctx.terminal.height;

    let style = move || {
        height
            .get()
            .map(|h| format!("height: {}px;", h))
            .unwrap_or_default()
    };

    view! {
        <section class=css::panel style=style>
            <div class=css::tabs role="tablist">
                {TerminalTab::ALL
                    .into_iter()
                    .map(|tab| view! { <TabButton tab=tab /> })
                    .collect_view()}
            </div>
            {TerminalTab::ALL
                .into_iter()
                .map(|tab| view! { <TabContent tab=tab /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn TabButton(tab: TerminalTab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_active = Signal::derive(move || ctx.terminal.active_tab.get() == tab);

    let class = move || {
        if is_active.get() {
            format!("{} {}", css::tab, css::active)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <button
            class=class
            role="tab"
            aria-selected=move || is_active.get()
            on:click=move |_| ctx.terminal.switch_tab(tab)
        >
            {tab.title()}
        </button>
    }
}

/// Content block for one tab; hidden unless its tab is active.
#[component]
fn TabContent(tab: TerminalTab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_active = Signal::derive(move || ctx.terminal.active_tab.get() == tab);

    let body = match tab {
        TerminalTab::Terminal => view! { <StatusOutput /> }.into_any(),
        TerminalTab::Local => view! { <LocalMessageCard /> }.into_any(),
    };

    view! {
        <div class=css::content role="tabpanel" hidden=move || !is_active.get()>
            {body}
        </div>
    }
}

#[component]
fn StatusOutput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let lines = ctx.config.with_value(|c| c.terminal.status.clone());

    view! {
        <div class=css::output>
            {lines
                .into_iter()
                .map(|line| view! { <div class=css::line>{line}</div> })
                .collect_view()}
        </div>
    }
}

#[component]
fn LocalMessageCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let local = ctx.config.with_value(|c| c.terminal.local.clone());

    view! {
        <div class=css::localMessage>
            <div class=css::successIcon><Icon icon=ic::CHECK /></div>
            <div class=css::helloText>{local.title}</div>
            <div class=css::systemMsg>{local.subtitle}</div>
        </div>
    }
}
