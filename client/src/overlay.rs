use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent};

use navcanvas_shared::{
    EventSource, HotspotSet, OverlayBinding, OverlayConfig, Point, Rgb, SharedOverlay,
    pointer_event,
};

use crate::language::browser_language;
use crate::surface::CanvasSurface;

/// The canvas element as a listener target.
struct CanvasEvents(HtmlCanvasElement);

impl EventSource for CanvasEvents {
    type Handler = Closure<dyn FnMut(MouseEvent)>;

    fn add_listener(&self, event: &'static str, handler: &Self::Handler) -> Result<(), String> {
        self.0
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(|e| format!("addEventListener({event}) failed: {e:?}"))
    }

    fn remove_listener(&self, event: &'static str, handler: &Self::Handler) {
        let _ = self
            .0
            .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
}

/// A live hotspot overlay bound to a canvas.
///
/// Owns the four mouse listeners; dropping the handle detaches them.
#[wasm_bindgen]
pub struct NavigationCanvas {
    binding: OverlayBinding<CanvasSurface, CanvasEvents>,
}

impl NavigationCanvas {
    /// Draw `image` with `hotspots` onto `canvas` and start tracking the mouse.
    /// `on_click` receives the key of the clicked hotspot, after the overlay
    /// has released its internal borrow.
    pub fn attach(
        image: HtmlImageElement,
        canvas: HtmlCanvasElement,
        hotspots: HotspotSet,
        config: OverlayConfig,
        on_click: impl Fn(&str) + 'static,
    ) -> Result<Self, String> {
        let surface = CanvasSurface::new(canvas.clone(), image)?;
        let overlay = SharedOverlay::new(surface, hotspots, config).map_err(|e| e.to_string())?;

        overlay.with(|o| {
            for key in o.untranslated_keys() {
                web_sys::console::warn_1(
                    &format!(
                        "hotspot `{key}` has no `{}` name; its label is left blank",
                        o.label_language()
                    )
                    .into(),
                );
            }
        });

        let on_click: Rc<dyn Fn(&str)> = Rc::new(on_click);
        let source = CanvasEvents(canvas.clone());
        let binding = OverlayBinding::bind(overlay, source, |event, overlay| {
            let canvas = canvas.clone();
            let on_click = on_click.clone();
            Closure::new(move |e: MouseEvent| {
                let bounds = canvas.get_bounding_client_rect();
                let at = Point::new(
                    f64::from(e.client_x()) - bounds.left(),
                    f64::from(e.client_y()) - bounds.top(),
                );
                let Some(event) = pointer_event(event, at) else {
                    return;
                };
                if let Some(key) = overlay.dispatch(event) {
                    on_click(&key);
                }
            })
        })?;

        Ok(Self { binding })
    }
}

#[wasm_bindgen]
impl NavigationCanvas {
    /// Detach every listener, restore the default cursor and clear the hover
    /// highlight. Idempotent.
    pub fn dispose(&mut self) {
        self.binding.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool {
        self.binding.is_disposed()
    }

    /// Key of the hotspot under the pointer, if any.
    pub fn hovered(&self) -> Option<String> {
        self.binding.overlay().hovered()
    }

    /// Redraw after the image's on-page size changed.
    pub fn repaint(&self) {
        self.binding.overlay().repaint();
    }
}

fn optional_color(value: JsValue) -> Result<Option<Rgb>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JS entry point: `drawNavigationCanvas(img, canvas, hotspots, onClick,
/// rectColor?, nameColor?)`. `onClick(key, record)` gets the caller's own
/// hotspot object back.
///
/// The overlay stays attached only while the returned handle is alive. Keep
/// a reference to it on the page: once it is freed (explicitly, or by the
/// garbage collector when built with weak references) the listeners are
/// removed.
#[wasm_bindgen(js_name = drawNavigationCanvas)]
pub fn draw_navigation_canvas(
    img: HtmlImageElement,
    canvas: HtmlCanvasElement,
    hotspots: JsValue,
    on_click: Function,
    rect_color: JsValue,
    name_color: JsValue,
) -> Result<NavigationCanvas, JsValue> {
    let set: HotspotSet = serde_wasm_bindgen::from_value(hotspots.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = OverlayConfig {
        rect_color: optional_color(rect_color)?,
        name_color: optional_color(name_color)?,
        locale: browser_language(),
    };

    NavigationCanvas::attach(img, canvas, set, config, move |key| {
        let record =
            Reflect::get(&hotspots, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED);
        if let Err(e) = on_click.call2(&JsValue::NULL, &JsValue::from_str(key), &record) {
            web_sys::console::warn_1(&e);
        }
    })
    .map_err(|e| JsValue::from_str(&e))
}
