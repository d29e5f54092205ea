use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use navcanvas_shared::render::{Cursor, RenderTarget, TextStyle};
use navcanvas_shared::{ImageMetrics, Point, Rect};

pub(crate) fn image_metrics(image: &HtmlImageElement) -> ImageMetrics {
    ImageMetrics {
        natural_width: image.natural_width(),
        natural_height: image.natural_height(),
        rendered_width: image.width(),
        rendered_height: image.height(),
    }
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|e| format!("getContext failed: {e:?}"))?
        .ok_or_else(|| "canvas has no 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2d context has unexpected type".to_string())
}

/// Canvas 2D surface drawing an `<img>` underneath the hotspots.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, image: HtmlImageElement) -> Result<Self, String> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx, image })
    }
}

impl RenderTarget for CanvasSurface {
    fn image_metrics(&self) -> ImageMetrics {
        image_metrics(&self.image)
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn draw_image(&mut self, dest: Rect) {
        let natural_w = f64::from(self.image.natural_width());
        let natural_h = f64::from(self.image.natural_height());
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.image,
                0.0,
                0.0,
                natural_w,
                natural_h,
                dest.x,
                dest.y,
                dest.width,
                dest.height,
            )
            .ok();
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.ctx.set_line_width(line_width);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_text(&mut self, text: &str, at: Point, color: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        // Canvas resize resets 2D context state, so set the style every time.
        self.ctx.set_font(style.font);
        self.ctx.set_text_baseline(style.baseline);
        self.ctx.set_text_align(style.align);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, at.x, at.y).ok();
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.canvas
            .style()
            .set_property("cursor", cursor.css())
            .ok();
    }
}
