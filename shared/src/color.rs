use serde::Deserialize;

use crate::error::OverlayError;

/// Default hotspot outline / highlight color.
pub const DEFAULT_RECT_COLOR: Rgb = Rgb::new_const(0, 140, 255);
/// Default hotspot label color.
pub const DEFAULT_NAME_COLOR: Rgb = Rgb::new_const(254, 140, 0);

/// An opaque RGB color. Channels are validated to 0..=255 on construction
/// from host input, so the CSS string built from it is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRgb")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Unvalidated `{r, g, b}` as received from JSON or a JS object.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawRgb {
    r: i64,
    g: i64,
    b: i64,
}

impl TryFrom<RawRgb> for Rgb {
    type Error = OverlayError;

    fn try_from(raw: RawRgb) -> Result<Self, Self::Error> {
        Rgb::new(raw.r, raw.g, raw.b)
    }
}

impl Rgb {
    pub const fn new_const(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from untrusted channel values.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self, OverlayError> {
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }

    /// CSS `rgba(...)` string at the given opacity.
    pub fn css(&self, alpha: f64) -> String {
        rgba_css(self.r, self.g, self.b, alpha)
    }
}

fn channel(name: char, value: i64) -> Result<u8, OverlayError> {
    u8::try_from(value).map_err(|_| OverlayError::ColorChannelOutOfRange {
        channel: name,
        value,
    })
}

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a:.1})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings_carry_alpha() {
        assert_eq!(DEFAULT_RECT_COLOR.css(1.0), "rgba(0,140,255,1.0)");
        assert_eq!(DEFAULT_RECT_COLOR.css(0.2), "rgba(0,140,255,0.2)");
        assert_eq!(DEFAULT_NAME_COLOR.css(1.0), "rgba(254,140,0,1.0)");
    }

    #[test]
    fn channel_bounds_are_inclusive() {
        assert_eq!(Rgb::new(0, 255, 128), Ok(Rgb::new_const(0, 255, 128)));
        assert_eq!(
            Rgb::new(0, 256, 0),
            Err(OverlayError::ColorChannelOutOfRange {
                channel: 'g',
                value: 256
            })
        );
        assert_eq!(
            Rgb::new(-1, 0, 0),
            Err(OverlayError::ColorChannelOutOfRange {
                channel: 'r',
                value: -1
            })
        );
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let ok: Rgb = serde_json::from_str(r#"{"r":10,"g":20,"b":30}"#).unwrap();
        assert_eq!(ok, Rgb::new_const(10, 20, 30));

        let err = serde_json::from_str::<Rgb>(r#"{"r":10,"g":20,"b":300}"#).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }
}
