use crate::geometry::{ImageMetrics, Point, Rect};

/// Outline width of every hotspot rectangle, in canvas pixels.
pub const HOTSPOT_LINE_WIDTH: f64 = 2.0;
/// Opacity of the hovered-hotspot fill.
pub const HOVER_FILL_ALPHA: f64 = 0.2;
pub const LABEL_FONT: &str = "20px sans-serif";

/// Pointer cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Text placement for [`RenderTarget::fill_text`]. Labels are always drawn
/// centered on the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub baseline: &'static str,
    pub align: &'static str,
}

pub const LABEL_STYLE: TextStyle = TextStyle {
    font: LABEL_FONT,
    baseline: "middle",
    align: "center",
};

/// Drawing surface plus the image it overlays. The browser implementation
/// wraps a canvas 2D context; tests use a recording fake.
pub trait RenderTarget {
    /// Current natural and rendered size of the source image.
    fn image_metrics(&self) -> ImageMetrics;
    /// Current pixel-buffer size of the surface.
    fn size(&self) -> (u32, u32);
    /// Resize the pixel buffer. Resizing clears the surface.
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    /// Draw the whole source image into `dest`.
    fn draw_image(&mut self, dest: Rect);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_text(&mut self, text: &str, at: Point, color: &str, style: TextStyle);
    fn set_cursor(&mut self, cursor: Cursor);
}
