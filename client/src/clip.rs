use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use navcanvas_shared::Rect;

use crate::surface::{context_2d, image_metrics};

/// Copy the `source` region (natural image coordinates) of `image` onto
/// `canvas`, sizing the canvas to that region at the image's on-page scale.
pub fn draw_clipped(
    image: &HtmlImageElement,
    canvas: &HtmlCanvasElement,
    source: Rect,
) -> Result<(), String> {
    let dest = source.scaled(image_metrics(image).scale());
    canvas.set_width(dest.width.max(0.0) as u32);
    canvas.set_height(dest.height.max(0.0) as u32);
    let ctx = context_2d(canvas)?;
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        image,
        source.x,
        source.y,
        source.width,
        source.height,
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )
    .map_err(|e| format!("drawImage failed: {e:?}"))
}

#[wasm_bindgen(js_name = drawClippedImage)]
pub fn draw_clipped_image(
    img: &HtmlImageElement,
    canvas: &HtmlCanvasElement,
    rect: JsValue,
) -> Result<(), JsValue> {
    let source: Rect = serde_wasm_bindgen::from_value(rect)?;
    draw_clipped(img, canvas, source).map_err(|e| JsValue::from_str(&e))
}
