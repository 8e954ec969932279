mod app;
mod components;
mod config;
mod core;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // Every visit starts at the top, regardless of the previous session or
    // a hash in the URL.
    utils::dom::disable_scroll_restoration();
    utils::dom::reset_scroll();

    let root = document()
        .get_element_by_id(config::ids::APP_ROOT)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
