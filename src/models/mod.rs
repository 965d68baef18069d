//! Data models and types for the application.
//!
//! - [`FileId`], [`TabLabel`], [`FileIcon`] - bundled editor files
//! - [`TerminalTab`] - terminal panel tabs

mod file;
mod terminal;

pub use file::{FileIcon, FileId, TabLabel};
pub use terminal::TerminalTab;
