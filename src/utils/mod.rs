//! Utility modules for browser interop.
//!
//! Provides:
//! - [`dom`] - window and viewport access
//! - [`highlight_element`] - Prism syntax highlighting

pub mod dom;
mod highlight;

pub use highlight::highlight_element;
