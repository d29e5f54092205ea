use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::OverlayError;
use crate::geometry::{Point, Rect, Scale};

/// Name-map key every hotspot must carry.
pub const DEFAULT_LANGUAGE: &str = "default";

/// Display names of one hotspot, keyed by language code, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocalizedName {
    entries: Vec<(String, String)>,
}

impl LocalizedName {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, name)| name.as_str())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.get(language).is_some()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(lang, _)| lang.as_str())
    }
}

impl<'de> Deserialize<'de> for LocalizedName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserializer.deserialize_map(OrderedVisitor::<String>::new("a name map"))?;
        Ok(Self { entries })
    }
}

/// A clickable labeled rectangle in natural image coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hotspot {
    pub name: LocalizedName,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hotspot {
    pub fn new(name: LocalizedName, rect: Rect) -> Self {
        Self {
            name,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Label text for `language`; blank when the translation is absent.
    pub fn label(&self, language: &str) -> &str {
        self.name.get(language).unwrap_or_default()
    }
}

/// Ordered key → hotspot mapping. Order decides both draw order and which
/// hotspot wins where rectangles overlap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HotspotSet {
    entries: Vec<(String, Hotspot)>,
}

impl HotspotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hotspot; keys must be unique.
    pub fn insert(&mut self, key: impl Into<String>, hotspot: Hotspot) -> Result<(), OverlayError> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(OverlayError::DuplicateKey { key });
        }
        self.entries.push((key, hotspot));
        Ok(())
    }

    /// Parse a JSON object of hotspots, keeping document order.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Hotspot> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, hotspot)| hotspot)
    }

    pub fn first(&self) -> Option<(&str, &Hotspot)> {
        self.entries.first().map(|(k, h)| (k.as_str(), h))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hotspot)> {
        self.entries.iter().map(|(k, h)| (k.as_str(), h))
    }

    /// First hotspot (in order) whose scaled rect contains `p`.
    pub fn hit_test(&self, p: Point, scale: Scale) -> Option<(&str, &Hotspot)> {
        self.iter().find(|(_, h)| h.rect().scaled(scale).contains(p))
    }

    /// Every hotspot must be nameable in the fallback language.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.is_empty() {
            return Err(OverlayError::NoHotspots);
        }
        if let Some((key, _)) = self
            .iter()
            .find(|(_, h)| !h.name.contains(DEFAULT_LANGUAGE))
        {
            return Err(OverlayError::MissingDefaultName {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for HotspotSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries =
            deserializer.deserialize_map(OrderedVisitor::<Hotspot>::new("a hotspot map"))?;
        Ok(Self { entries })
    }
}

/// Collects a map into a `Vec` so declaration order survives, rejecting
/// repeated keys.
struct OrderedVisitor<V> {
    expecting: &'static str,
    marker: PhantomData<V>,
}

impl<V> OrderedVisitor<V> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(OverlayError::DuplicateKey { key }));
            }
            entries.push((key, value));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "zebra": {"name": {"default": "Zebra", "ja": "シマウマ"}, "x": 0, "y": 0, "width": 50, "height": 50},
        "apple": {"name": {"default": "Apple"}, "x": 40, "y": 40, "width": 50, "height": 50}
    }"#;

    #[test]
    fn json_keeps_document_order() {
        let set = HotspotSet::from_json(SAMPLE).unwrap();
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zebra", "apple"]);

        let (_, zebra) = set.first().unwrap();
        let langs: Vec<&str> = zebra.name.languages().collect();
        assert_eq!(langs, ["default", "ja"]);
        assert_eq!(zebra.label("ja"), "シマウマ");
    }

    #[test]
    fn overlapping_hit_prefers_first_declared() {
        let set = HotspotSet::from_json(SAMPLE).unwrap();
        let hit = set.hit_test(Point::new(45.0, 45.0), Scale::IDENTITY);
        assert_eq!(hit.map(|(k, _)| k), Some("zebra"));

        let hit = set.hit_test(Point::new(60.0, 60.0), Scale::IDENTITY);
        assert_eq!(hit.map(|(k, _)| k), Some("apple"));

        assert!(set.hit_test(Point::new(200.0, 5.0), Scale::IDENTITY).is_none());
    }

    #[test]
    fn duplicate_keys_rejected() {
        let json = r#"{"a": {"name": {"default": "A"}, "x": 0, "y": 0, "width": 1, "height": 1},
                       "a": {"name": {"default": "B"}, "x": 0, "y": 0, "width": 1, "height": 1}}"#;
        let err = HotspotSet::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate hotspot key"), "{err}");

        let mut set = HotspotSet::new();
        let h = Hotspot::new(LocalizedName::new([("default", "A")]), Rect::default());
        set.insert("a", h.clone()).unwrap();
        assert_eq!(
            set.insert("a", h),
            Err(OverlayError::DuplicateKey { key: "a".into() })
        );
    }

    #[test]
    fn validate_requires_default_names() {
        assert_eq!(HotspotSet::new().validate(), Err(OverlayError::NoHotspots));

        let mut set = HotspotSet::new();
        set.insert(
            "ok",
            Hotspot::new(LocalizedName::new([("default", "Ok")]), Rect::default()),
        )
        .unwrap();
        set.insert(
            "ja-only",
            Hotspot::new(LocalizedName::new([("ja", "日本")]), Rect::default()),
        )
        .unwrap();
        assert_eq!(
            set.validate(),
            Err(OverlayError::MissingDefaultName {
                key: "ja-only".into()
            })
        );
    }

    #[test]
    fn missing_translation_labels_blank() {
        let h = Hotspot::new(LocalizedName::new([("default", "Door")]), Rect::default());
        assert_eq!(h.label("fr"), "");
        assert_eq!(h.label(DEFAULT_LANGUAGE), "Door");
    }
}
