use wasm_bindgen::prelude::*;

use navcanvas_shared::DEFAULT_LANGUAGE;
use navcanvas_shared::locale::normalize_language;

/// The user's preferred language: `navigator.languages[0]`, then
/// `navigator.language`, normalized so any `ja-*` becomes `ja`.
pub fn browser_language() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_LANGUAGE.to_string();
    };
    let navigator = window.navigator();
    let raw = navigator
        .languages()
        .get(0)
        .as_string()
        .or_else(|| navigator.language())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    normalize_language(&raw)
}

#[wasm_bindgen(js_name = getLanguage)]
pub fn get_language() -> String {
    browser_language()
}
