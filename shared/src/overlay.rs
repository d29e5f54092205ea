use serde::Deserialize;

use crate::color::{DEFAULT_NAME_COLOR, DEFAULT_RECT_COLOR, Rgb};
use crate::error::OverlayError;
use crate::geometry::{Point, Scale};
use crate::hotspot::{Hotspot, HotspotSet};
use crate::locale::select_label_language;
use crate::render::{Cursor, HOTSPOT_LINE_WIDTH, HOVER_FILL_ALPHA, LABEL_STYLE, RenderTarget};

/// Caller-tunable overlay settings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    pub rect_color: Option<Rgb>,
    pub name_color: Option<Rgb>,
    /// Preferred language tag, e.g. `navigator.language`.
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(String),
}

impl HoverState {
    pub fn key(&self) -> Option<&str> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(key) => Some(key),
        }
    }
}

/// Pointer input, positions relative to the canvas's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    PointerEnter(Point),
    PointerMove(Point),
    PointerLeave,
    Click,
}

pub type ClickHandler = Box<dyn FnMut(&str, &Hotspot)>;

/// Image + hotspot overlay with hover highlighting and click dispatch.
///
/// All drawing goes through the [`RenderTarget`]; the overlay itself holds
/// only the hotspot set, the resolved colors/language and the hover state.
pub struct HotspotOverlay<T: RenderTarget> {
    target: T,
    hotspots: HotspotSet,
    rect_color: Rgb,
    name_color: Rgb,
    label_language: String,
    hover: HoverState,
    on_click: ClickHandler,
}

impl<T: RenderTarget> HotspotOverlay<T> {
    /// Validate inputs, size the surface to the rendered image and draw the
    /// initial frame.
    pub fn new(
        target: T,
        hotspots: HotspotSet,
        config: OverlayConfig,
        on_click: impl FnMut(&str, &Hotspot) + 'static,
    ) -> Result<Self, OverlayError> {
        hotspots.validate()?;
        let metrics = target.image_metrics();
        if !metrics.has_natural_size() {
            return Err(OverlayError::InvalidImageMetrics {
                width: metrics.natural_width,
                height: metrics.natural_height,
            });
        }

        let label_language = select_label_language(&config.locale, &hotspots);
        let mut overlay = Self {
            target,
            hotspots,
            rect_color: config.rect_color.unwrap_or(DEFAULT_RECT_COLOR),
            name_color: config.name_color.unwrap_or(DEFAULT_NAME_COLOR),
            label_language,
            hover: HoverState::Idle,
            on_click: Box::new(on_click),
        };
        overlay.draw_base();
        Ok(overlay)
    }

    pub fn hotspots(&self) -> &HotspotSet {
        &self.hotspots
    }

    pub fn label_language(&self) -> &str {
        &self.label_language
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hover.key()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Keys of hotspots with no name in the label language (drawn blank).
    pub fn untranslated_keys(&self) -> impl Iterator<Item = &str> {
        let language = self.label_language.as_str();
        self.hotspots
            .iter()
            .filter(move |(_, h)| !h.name.contains(language))
            .map(|(key, _)| key)
    }

    fn scale(&self) -> Scale {
        self.target.image_metrics().scale()
    }

    /// Feed one pointer event. Returns `true` if the surface was repainted.
    pub fn handle(&mut self, event: OverlayEvent) -> bool {
        match event {
            OverlayEvent::PointerEnter(p) | OverlayEvent::PointerMove(p) => self.pointer_at(p),
            OverlayEvent::PointerLeave => {
                self.hover = HoverState::Idle;
                self.target.set_cursor(Cursor::Default);
                self.draw_base();
                true
            }
            OverlayEvent::Click => {
                self.click();
                false
            }
        }
    }

    fn pointer_at(&mut self, p: Point) -> bool {
        let hit = self
            .hotspots
            .hit_test(p, self.scale())
            .map(|(key, _)| key.to_string());
        if hit.as_deref() == self.hover.key() {
            return false;
        }

        match hit {
            None => {
                self.hover = HoverState::Idle;
                self.target.set_cursor(Cursor::Default);
                self.draw_base();
            }
            Some(key) => {
                self.hover = HoverState::Hovering(key);
                self.target.set_cursor(Cursor::Pointer);
                self.draw_base();
                self.draw_highlight();
            }
        }
        true
    }

    fn click(&mut self) {
        let HoverState::Hovering(key) = &self.hover else {
            return;
        };
        if let Some(hotspot) = self.hotspots.get(key) {
            (self.on_click)(key, hotspot);
        }
    }

    /// Repaint the current frame, including the hover highlight. Use after the
    /// image's rendered size changed.
    pub fn repaint(&mut self) {
        self.draw_base();
        self.draw_highlight();
    }

    fn draw_base(&mut self) {
        let metrics = self.target.image_metrics();
        // Keep the pixel buffer 1:1 with the rendered image.
        if self.target.size() != (metrics.rendered_width, metrics.rendered_height) {
            self.target.resize(metrics.rendered_width, metrics.rendered_height);
        }
        let scale = metrics.scale();

        self.target.clear();
        self.target.draw_image(metrics.rendered_rect());

        let stroke = self.rect_color.css(1.0);
        let fill = self.name_color.css(1.0);
        for (_, hotspot) in self.hotspots.iter() {
            let rect = hotspot.rect().scaled(scale);
            self.target.stroke_rect(rect, &stroke, HOTSPOT_LINE_WIDTH);
            self.target.fill_text(
                hotspot.label(&self.label_language),
                rect.center(),
                &fill,
                LABEL_STYLE,
            );
        }
    }

    fn draw_highlight(&mut self) {
        let Some(hotspot) = self.hover.key().and_then(|key| self.hotspots.get(key)) else {
            return;
        };
        let rect = hotspot.rect().scaled(self.scale());
        self.target.fill_rect(rect, &self.rect_color.css(HOVER_FILL_ALPHA));
    }

    /// Drop hover state, restore the default cursor and repaint without the
    /// highlight. Called when the host stops feeding events.
    pub fn reset(&mut self) {
        self.hover = HoverState::Idle;
        self.target.set_cursor(Cursor::Default);
        self.draw_base();
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
