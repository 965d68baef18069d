mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the mount point in `index.html`.
const ROOT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(ROOT_ID)
        .expect("index.html must contain the #app mount point")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
