use std::collections::HashMap;

use serde::Deserialize;

use crate::hotspot::{DEFAULT_LANGUAGE, HotspotSet};

/// Directory localized images are served from, one subdirectory per language.
pub const IMAGE_ROOT: &str = "./images";

/// Collapse a browser language tag. Only Japanese is reduced to its primary
/// subtag (`"ja-JP"` → `"ja"`); every other tag is kept verbatim.
pub fn normalize_language(tag: &str) -> String {
    let tag = tag.trim();
    if tag.split('-').next() == Some("ja") {
        "ja".to_string()
    } else {
        tag.to_string()
    }
}

/// Pick `preferred` if it is one of `available`, else [`DEFAULT_LANGUAGE`].
pub fn select_language<'a, I>(preferred: &str, available: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let preferred = normalize_language(preferred);
    if available.into_iter().any(|lang| lang == preferred) {
        preferred
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}

/// Label language for a whole overlay. Only the first hotspot's name map is
/// consulted; later hotspots missing that language render a blank label.
pub fn select_label_language(preferred: &str, hotspots: &HotspotSet) -> String {
    match hotspots.first() {
        Some((_, first)) => select_language(preferred, first.name.languages()),
        None => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Page text per language: `{"default": {"title": "..."}, "ja": {...}}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct ContentTable {
    languages: HashMap<String, HashMap<String, String>>,
}

impl ContentTable {
    /// Language to use for `preferred`, falling back to `"default"`.
    pub fn language_for(&self, preferred: &str) -> String {
        select_language(preferred, self.languages.keys().map(String::as_str))
    }

    /// Entries for `preferred`; `None` when even `"default"` is missing.
    pub fn entries_for(&self, preferred: &str) -> Option<&HashMap<String, String>> {
        self.languages.get(&self.language_for(preferred))
    }
}

/// `./images/<language>/<name>`, `language` already resolved.
pub fn localized_image_path(language: &str, name: &str) -> String {
    format!("{IMAGE_ROOT}/{language}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_region_collapses() {
        assert_eq!(normalize_language("ja-JP"), "ja");
        assert_eq!(normalize_language("ja"), "ja");
        assert_eq!(normalize_language("en-US"), "en-US");
        assert_eq!(normalize_language(" fr "), "fr");
        assert_eq!(normalize_language("jav"), "jav");
    }

    #[test]
    fn select_falls_back_to_default() {
        assert_eq!(select_language("ja-JP", ["default", "ja"]), "ja");
        assert_eq!(select_language("en-US", ["default", "en"]), "default");
        assert_eq!(select_language("en", ["default", "en"]), "en");
    }

    #[test]
    fn label_language_follows_first_hotspot_only() {
        let set = HotspotSet::from_json(
            r#"{
                "a": {"name": {"default": "A"}, "x": 0, "y": 0, "width": 1, "height": 1},
                "b": {"name": {"default": "B", "ja": "ビー"}, "x": 0, "y": 0, "width": 1, "height": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(select_label_language("ja", &set), "default");

        let set = HotspotSet::from_json(
            r#"{
                "b": {"name": {"default": "B", "ja": "ビー"}, "x": 0, "y": 0, "width": 1, "height": 1},
                "a": {"name": {"default": "A"}, "x": 0, "y": 0, "width": 1, "height": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(select_label_language("ja-JP", &set), "ja");
        assert_eq!(select_label_language("ja", &HotspotSet::new()), "default");
    }

    #[test]
    fn content_table_resolution() {
        let table: ContentTable = serde_json::from_str(
            r#"{"default": {"title": "Title"}, "ja": {"title": "題名"}}"#,
        )
        .unwrap();
        assert_eq!(table.language_for("ja-JP"), "ja");
        assert_eq!(table.language_for("de"), "default");
        let entries = table.entries_for("de").unwrap();
        assert_eq!(entries.get("title").map(String::as_str), Some("Title"));

        let empty = ContentTable::default();
        assert!(empty.entries_for("en").is_none());
    }

    #[test]
    fn image_paths() {
        let lang = select_language("ja-JP", ["ja", "fr"]);
        assert_eq!(localized_image_path(&lang, "map.png"), "./images/ja/map.png");
        let lang = select_language("en-GB", ["ja", "fr"]);
        assert_eq!(localized_image_path(&lang, "map.png"), "./images/default/map.png");
    }
}
