use std::collections::HashMap;

use serde::Deserialize;

use navcanvas_shared::{HotspotSet, OverlayConfig};

/// Where the demo page looks for its manifest.
pub const MANIFEST_URL: &str = "./navcanvas.json";

/// A navigation page: the image, its hotspots and where each one leads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub title: String,
    pub image: String,
    pub hotspots: HotspotSet,
    #[serde(default)]
    pub config: OverlayConfig,
    /// Hotspot key → URL opened on click.
    #[serde(default)]
    pub links: HashMap<String, String>,
    #[serde(default)]
    pub link_target: Option<String>,
}

impl Manifest {
    pub fn link(&self, key: &str) -> Option<&str> {
        self.links.get(key).map(String::as_str)
    }
}

pub async fn fetch_manifest(url: &str) -> Result<Manifest, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Manifest>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
                "title": "Campus",
                "image": "./images/default/campus.png",
                "hotspots": {
                    "library": {"name": {"default": "Library", "ja": "図書館"}, "x": 10, "y": 20, "width": 100, "height": 50},
                    "gym": {"name": {"default": "Gym"}, "x": 200, "y": 20, "width": 80, "height": 80}
                },
                "config": {"rectColor": {"r": 0, "g": 0, "b": 255}},
                "links": {"library": "https://example.org/library"},
                "linkTarget": "_blank"
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.hotspots.len(), 2);
        assert_eq!(manifest.link("library"), Some("https://example.org/library"));
        assert_eq!(manifest.link("gym"), None);
        assert_eq!(manifest.link_target.as_deref(), Some("_blank"));
        assert!(manifest.config.locale.is_empty());
        assert!(manifest.config.name_color.is_none());
    }

    #[test]
    fn minimal_manifest_uses_defaults() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"image": "map.png", "hotspots": {"a": {"name": {"default": "A"}, "x": 0, "y": 0, "width": 1, "height": 1}}}"#,
        )
        .unwrap();
        assert!(manifest.title.is_empty());
        assert!(manifest.links.is_empty());
        assert_eq!(manifest.config, OverlayConfig::default());
    }
}
