//! UI components built with Leptos.
//!
//! - [`Workbench`] - Root layout (sidebar, editor, terminal)
//! - [`editor`] - Tab bar, line numbers and code view
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sidebar`] - File list
//! - [`terminal`] - Tabbed terminal panel and its drag handle

pub mod editor;
pub mod icons;
pub mod sidebar;
pub mod terminal;
mod workbench;

pub use workbench::Workbench;
