//! Name card for developers who open the console.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::OWNER_NAME;

/// Renders nothing; prints the card once on mount.
#[component]
pub fn ConsoleCard() -> impl IntoView {
    Effect::new(move || print_console_card());

    view! {}
}

fn print_console_card() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{OWNER_NAME} — AI/ML Engineer")),
        &JsValue::from_str("color: #c084fc; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cVoice AI, RAG systems, and GenAI products."),
        &JsValue::from_str("color: #888;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(^_^) [code] github.com/gaur3009-p"),
        &JsValue::from_str("color: #4f81e1;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(o_o) [site] Built with Rust + Leptos, compiled to WASM"),
        &JsValue::from_str("color: #666; font-size: 10px;"),
    );
}
