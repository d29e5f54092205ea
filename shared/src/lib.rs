pub mod binding;
pub mod color;
pub mod error;
pub mod geometry;
pub mod hotspot;
pub mod locale;
pub mod overlay;
pub mod render;

pub use binding::{EventSource, OverlayBinding, POINTER_EVENTS, SharedOverlay, pointer_event};
pub use color::Rgb;
pub use error::OverlayError;
pub use geometry::{ImageMetrics, Point, Rect, Scale};
pub use hotspot::{DEFAULT_LANGUAGE, Hotspot, HotspotSet, LocalizedName};
pub use overlay::{HotspotOverlay, HoverState, OverlayConfig, OverlayEvent};
pub use render::{Cursor, RenderTarget, TextStyle};
