//! Core editor logic, independent of the DOM.
//!
//! This module provides:
//! - [`Tick`] steps of the intro typing animation
//! - line-number gutter state
//! - [`EditorSession`] as the controller for file switching
//! - [`resize`] math for the terminal drag handle

mod animator;
mod editor;
pub mod error;
mod line_numbers;
pub mod resize;

pub use animator::Tick;
pub use editor::EditorSession;
pub use error::ConfigError;
