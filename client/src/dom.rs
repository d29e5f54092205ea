use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub(crate) fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())
}

/// `document.querySelectorAll(selector)` collected into elements.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| format!("bad selector {selector:?}: {e:?}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Set `style.visibility`; non-HTML elements are skipped.
pub(crate) fn set_visible(element: &Element, visible: bool) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        el.style()
            .set_property("visibility", if visible { "visible" } else { "hidden" })
            .ok();
    }
}
