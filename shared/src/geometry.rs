use serde::Deserialize;

/// A position in canvas pixel space (relative to the canvas's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Hotspot rects are stored in natural image
/// coordinates and scaled into canvas space on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.right() && self.y <= p.y && p.y <= self.bottom()
    }

    pub fn scaled(&self, scale: Scale) -> Rect {
        Rect {
            x: self.x * scale.horizontal,
            y: self.y * scale.vertical,
            width: self.width * scale.horizontal,
            height: self.height * scale.vertical,
        }
    }
}

/// Ratio between the rendered and natural size of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale {
        horizontal: 1.0,
        vertical: 1.0,
    };
}

/// Intrinsic and on-page dimensions of the source image, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageMetrics {
    pub natural_width: u32,
    pub natural_height: u32,
    pub rendered_width: u32,
    pub rendered_height: u32,
}

impl ImageMetrics {
    pub fn has_natural_size(&self) -> bool {
        self.natural_width > 0 && self.natural_height > 0
    }

    /// Natural → rendered ratio. Falls back to identity while the image has
    /// no natural size yet.
    pub fn scale(&self) -> Scale {
        if !self.has_natural_size() {
            return Scale::IDENTITY;
        }
        Scale {
            horizontal: f64::from(self.rendered_width) / f64::from(self.natural_width),
            vertical: f64::from(self.rendered_height) / f64::from(self.natural_height),
        }
    }

    pub fn rendered_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.rendered_width),
            f64::from(self.rendered_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_counts_every_edge() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(40.0, 60.0)));
        assert!(r.contains(Point::new(10.0, 60.0)));
        assert!(r.contains(Point::new(40.0, 20.0)));
        assert!(!r.contains(Point::new(9.999, 30.0)));
        assert!(!r.contains(Point::new(25.0, 60.001)));
    }

    #[test]
    fn scale_halves_rect() {
        let metrics = ImageMetrics {
            natural_width: 1000,
            natural_height: 500,
            rendered_width: 500,
            rendered_height: 250,
        };
        let scaled = Rect::new(100.0, 100.0, 200.0, 100.0).scaled(metrics.scale());
        assert_eq!(scaled, Rect::new(50.0, 50.0, 100.0, 50.0));
        assert_eq!(scaled.center(), Point::new(100.0, 75.0));
    }

    #[test]
    fn unloaded_image_scales_as_identity() {
        let metrics = ImageMetrics {
            rendered_width: 300,
            rendered_height: 200,
            ..ImageMetrics::default()
        };
        assert_eq!(metrics.scale(), Scale::IDENTITY);
    }

    #[test]
    fn anisotropic_scale() {
        let metrics = ImageMetrics {
            natural_width: 400,
            natural_height: 100,
            rendered_width: 200,
            rendered_height: 200,
        };
        let s = metrics.scale();
        assert_eq!(s.horizontal, 0.5);
        assert_eq!(s.vertical, 2.0);
    }
}
