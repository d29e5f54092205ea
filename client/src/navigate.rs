use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

use crate::dom::document;

/// Browsing contexts accepted by an anchor's `target`.
pub const LINK_TARGETS: [&str; 4] = ["_blank", "_self", "_top", "_parent"];

/// Whether `target` is one of [`LINK_TARGETS`].
pub fn is_link_target(target: &str) -> bool {
    LINK_TARGETS.contains(&target)
}

/// Navigate via a detached `<a>` so popup blockers treat it like a link.
pub fn open_url(url: &str, target: Option<&str>) -> Result<(), String> {
    let anchor = document()?
        .create_element("a")
        .map_err(|e| format!("createElement(a) failed: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(url);
    if let Some(target) = target.filter(|t| !t.is_empty()) {
        if !is_link_target(target) {
            web_sys::console::warn_1(&format!("unusual link target `{target}`").into());
        }
        anchor.set_target(target);
    }
    anchor.click();
    Ok(())
}

#[wasm_bindgen(js_name = jumpToURL)]
pub fn jump_to_url(url: &str, target: Option<String>) -> Result<(), JsValue> {
    open_url(url, target.as_deref()).map_err(|e| JsValue::from_str(&e))
}
