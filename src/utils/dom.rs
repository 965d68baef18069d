//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every accessor returns
//! `Option` so a missing window or element turns into a no-op at the call
//! site.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Inner height of the viewport in CSS pixels.
pub fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}
