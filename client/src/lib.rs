//! Browser bindings for the hotspot navigation canvas.
//!
//! Everything here is a thin layer over `web_sys`: the overlay logic lives in
//! `navcanvas-shared` and only sees the canvas through
//! [`surface::CanvasSurface`]. The `#[wasm_bindgen]` functions are the surface
//! page scripts call; [`component::HotspotCanvas`] is the Leptos equivalent.

pub mod clip;
pub mod component;
mod dom;
pub mod language;
pub mod localize;
pub mod manifest;
pub mod modal;
pub mod navigate;
pub mod overlay;
pub mod surface;

pub use component::HotspotCanvas;
pub use language::browser_language;
pub use overlay::NavigationCanvas;
