use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single GeoJSON feature. Geometry and properties are carried opaquely;
/// the interpreter never looks inside them, it only hands them to whatever
/// renders the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Value,
    #[serde(default)]
    pub properties: Value,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// A GeoJSON feature collection as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}
