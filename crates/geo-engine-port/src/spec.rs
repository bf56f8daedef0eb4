// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Source and layer specification objects submitted through the port.
//!
//! These serialize to the JSON shapes the engine's `addSource`/`addLayer`
//! calls expect.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Engine type tag for GeoJSON sources.
pub const GEOJSON_SOURCE_TYPE: &str = "geojson";

/// Payload of a GeoJSON source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceData {
    /// Remote document the engine fetches itself.
    Url(String),
    /// Inline GeoJSON value.
    GeoJson(Value),
}

/// Source registration passed to `add_source`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Engine source type (always `geojson` here).
    #[serde(rename = "type")]
    pub kind: String,
    /// Initial payload.
    pub data: SourceData,
}

impl SourceSpec {
    /// GeoJSON source with the given payload.
    pub fn geojson(data: SourceData) -> Self {
        Self {
            kind: GEOJSON_SOURCE_TYPE.to_owned(),
            data,
        }
    }
}

/// Full layer specification passed to `add_layer`.
///
/// Once submitted, `kind`, `id`, `source` and `source_layer` never change;
/// paint and layout entries are updated one property at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Engine layer type tag (`circle`, `fill-extrusion`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Layer id. `None` is a caller contract violation forwarded as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source id the layer draws from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Layer inside a multi-layer source.
    #[serde(
        rename = "source-layer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_layer: Option<String>,
    /// Feature filter expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Paint properties keyed by kebab-case name.
    #[serde(default)]
    pub paint: Map<String, Value>,
    /// Layout properties keyed by kebab-case name.
    #[serde(default)]
    pub layout: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn layer_spec_serializes_engine_shape() {
        let mut paint = Map::new();
        paint.insert("circle-radius".into(), json!(5));
        let spec = LayerSpec {
            kind: "circle".into(),
            id: Some("l1".into()),
            source: Some("s1".into()),
            source_layer: Some("sl1".into()),
            filter: Some(json!(["==", "$type", "Polygon"])),
            paint,
            layout: Map::new(),
        };
        let value = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "circle",
                "id": "l1",
                "source": "s1",
                "source-layer": "sl1",
                "filter": ["==", "$type", "Polygon"],
                "paint": {"circle-radius": 5},
                "layout": {}
            })
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let spec = LayerSpec {
            kind: "background".into(),
            ..LayerSpec::default()
        };
        let value = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(value, json!({"type": "background", "paint": {}, "layout": {}}));
    }

    #[test]
    fn source_data_is_untagged() {
        let url = SourceSpec::geojson(SourceData::Url("http://example.com".into()));
        assert_eq!(
            serde_json::to_value(&url).expect("serialize"),
            json!({"type": "geojson", "data": "http://example.com"})
        );
        let inline = SourceSpec::geojson(SourceData::GeoJson(
            json!({"type": "FeatureCollection", "features": []}),
        ));
        assert_eq!(
            serde_json::to_value(&inline).expect("serialize"),
            json!({"type": "geojson", "data": {"type": "FeatureCollection", "features": []}})
        );
    }
}
