//! Syntax highlighting through the page's Prism instance.
//!
//! Prism is loaded by `index.html`; this module only calls into it via the
//! Reflect API. When Prism is not present the code is left unstyled.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom;

/// Get the global `window.Prism` object.
fn get_prism() -> Option<Object> {
    let window = dom::window()?;
    Reflect::get(&window, &"Prism".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
}

/// Run `Prism.highlightElement(element)`.
///
/// Returns `true` if Prism was found and the call succeeded.
pub fn highlight_element(element: &Element) -> bool {
    let Some(prism) = get_prism() else {
        web_sys::console::warn_1(&"Prism not loaded; skipping highlight".into());
        return false;
    };

    Reflect::get(&prism, &"highlightElement".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .is_some_and(|highlight| highlight.call1(&prism, element).is_ok())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_prism_is_noop() {
        let document = dom::window().and_then(|w| w.document()).unwrap();
        let code = document.create_element("code").unwrap();
        code.set_text_content(Some("print('hi')"));

        assert!(!highlight_element(&code));
        assert_eq!(code.text_content().as_deref(), Some("print('hi')"));
    }
}
