//! Root application module.
//!
//! Contains the main App component, AppContext definition, EditorState,
//! TerminalState, and application-level setup logic following Leptos
//! conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Workbench;
use crate::config::SiteConfig;
use crate::core::{EditorSession, Tick};
use crate::models::{FileId, TerminalTab};

// ============================================================================
// EditorState
// ============================================================================

/// Editor state managed with Leptos signals.
///
/// Wraps a single [`EditorSession`] so that the busy check, the display
/// buffer and the line-number gutter are always updated together.
#[derive(Clone, Copy)]
pub struct EditorState {
    pub session: RwSignal<EditorSession>,
}

impl EditorState {
    pub fn new(initial: FileId) -> Self {
        Self {
            session: RwSignal::new(EditorSession::new(initial)),
        }
    }

    /// Handle a sidebar click.
    ///
    /// Ignored while the intro animation is typing.
    pub fn select(&self, file: FileId) {
        let result = self.session.try_update(|s| s.switch_to(file));
        if let Some(Err(e)) = result {
            web_sys::console::debug_1(&format!("switch to {} ignored: {}", file, e).into());
        }
    }

    /// Type `file` out character by character, one character every
    /// `delay_ms` milliseconds.
    ///
    /// The first character appears immediately. The task ends when the run
    /// completes or the session signal is disposed.
    pub fn play_intro(&self, file: FileId, delay_ms: u32) {
        let session = self.session;
        let run = match session.try_update(|s| s.begin_typing(file)) {
            Some(Ok(run)) => run,
            Some(Err(e)) => {
                web_sys::console::debug_1(&format!("intro not started: {}", e).into());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            while let Some(Tick::Typed { .. }) = session.try_update(|s| s.tick(run)) {
                TimeoutFuture::new(delay_ms).await;
            }
        });
    }
}

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal panel state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Currently visible tab.
    pub active_tab: RwSignal<TerminalTab>,
    /// Panel height in pixels; `None` keeps the stylesheet default.
    pub height: RwSignal<Option<f64>>,
    /// True while the drag handle is held.
    pub resizing: RwSignal<bool>,
}

impl TerminalState {
    pub fn new(default_tab: TerminalTab) -> Self {
        Self {
            active_tab: RwSignal::new(default_tab),
            height: RwSignal::new(None),
            resizing: RwSignal::new(false),
        }
    }

    /// Make `tab` the only active terminal tab.
    pub fn switch_tab(&self, tab: TerminalTab) {
        self.active_tab.set(tab);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Editor pane: active file, typing animation, line numbers.
    pub editor: EditorState,

    /// Terminal panel: tabs and size.
    pub terminal: TerminalState,

    /// Settings loaded from `site.toml`.
    pub config: StoredValue<SiteConfig>,
}

impl AppContext {
    /// Creates a new application context from the bundled settings.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            editor: EditorState::new(config.editor.intro_file),
            terminal: TerminalState::new(config.terminal.default_tab),
            config: StoredValue::new(config),
        }
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, renders the workbench and
/// starts the intro animation once.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(SiteConfig::load());
    provide_context(ctx);

    // Intro runs once, after the editor has mounted
    let intro_started = StoredValue::new(false);
    Effect::new(move || {
        if !intro_started.get_value() {
            intro_started.set_value(true);
            let (file, delay_ms) = ctx
                .config
                .with_value(|c| (c.editor.intro_file, c.editor.typing_speed_ms));
            ctx.editor.play_intro(file, delay_ms);
        }
    });

    view! { <Workbench /> }
}
