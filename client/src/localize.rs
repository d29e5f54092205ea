use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use navcanvas_shared::locale::{ContentTable, localized_image_path, select_language};

use crate::dom::{document, query_all};
use crate::language::browser_language;

const CONTENT_ATTR: &str = "data-localize-content";
const IMAGE_ATTR: &str = "data-localize-image-name";

/// Fill every `[data-localize-content]` element from `table` in `language`.
/// Returns how many elements were updated.
pub fn apply_contents(table: &ContentTable, language: &str) -> Result<usize, String> {
    let document = document()?;
    let resolved = table.language_for(language);
    let entries = table
        .entries_for(language)
        .ok_or_else(|| format!("no contents for `{resolved}` and no \"default\" entry"))?;

    let mut updated = 0;
    for element in query_all(&document, &format!("[{CONTENT_ATTR}]"))? {
        let Some(id) = element.get_attribute(CONTENT_ATTR) else {
            continue;
        };
        match entries.get(&id) {
            Some(html) => {
                element.set_inner_html(html);
                updated += 1;
            }
            None => web_sys::console::warn_1(
                &format!("no `{resolved}` content for `{id}`").into(),
            ),
        }
    }
    Ok(updated)
}

/// Point every `img[data-localize-image-name]` at `./images/<lang>/<name>`,
/// where `lang` is `language` if listed in `optional_languages`, else
/// `"default"`.
pub fn apply_images(optional_languages: &[String], language: &str) -> Result<usize, String> {
    let document = document()?;
    let resolved = select_language(language, optional_languages.iter().map(String::as_str));

    let mut updated = 0;
    for element in query_all(&document, &format!("img[{IMAGE_ATTR}]"))? {
        let (Some(name), Ok(img)) = (
            element.get_attribute(IMAGE_ATTR),
            element.dyn_into::<HtmlImageElement>(),
        ) else {
            continue;
        };
        img.set_src(&localized_image_path(&resolved, &name));
        updated += 1;
    }
    Ok(updated)
}

#[wasm_bindgen(js_name = localizeContents)]
pub fn localize_contents(contents: JsValue) -> Result<usize, JsValue> {
    let table: ContentTable = serde_wasm_bindgen::from_value(contents)?;
    apply_contents(&table, &browser_language()).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = localizeImages)]
pub fn localize_images(optional_languages: Vec<String>) -> Result<usize, JsValue> {
    apply_images(&optional_languages, &browser_language()).map_err(|e| JsValue::from_str(&e))
}
