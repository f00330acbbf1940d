use serde::Deserialize;
use serde_json::Value;

use crate::client::geojson::FeatureCollection;
use crate::error::{ClientError, ClientResult};

/// The `{type, data}` wrapper the backend puts around every response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.kind == "success"
    }
}

/// Decode an envelope's `data` field into a feature collection.
///
/// Backend contract quirk: for the keyword and bounding-box endpoints, `data`
/// is not a JSON object but a JSON *string* holding a serialized
/// FeatureCollection, so it has to be parsed a second time.
pub fn embedded_collection(data: &Value) -> ClientResult<FeatureCollection> {
    let raw = data
        .as_str()
        .ok_or_else(|| ClientError::Decode("envelope data is not a string".to_string()))?;
    serde_json::from_str(raw)
        .map_err(|e| ClientError::Decode(format!("embedded feature collection: {e}")))
}

/// Extract the broadband result row from a success envelope.
///
/// `data` is a two-dimensional array in census layout: a header row, then a
/// row whose first two cells are the county label and the percentage.
pub fn broadband_row(envelope: &ResponseEnvelope) -> ClientResult<Vec<Vec<String>>> {
    if !envelope.is_success() {
        return Err(ClientError::Backend(format!(
            "envelope type {:?}",
            envelope.kind
        )));
    }

    let row = envelope
        .data
        .get(1)
        .ok_or_else(|| ClientError::Decode("broadband data has no second row".to_string()))?;
    let label = cell_text(row.get(0))?;
    let percentage = cell_text(row.get(1))?;

    Ok(vec![vec![format!(
        "Broadband percentage for {label}: {percentage}"
    )]])
}

// The census passthrough serializes everything as strings, but tolerate a
// bare number rather than fail the row.
fn cell_text(cell: Option<&Value>) -> ClientResult<String> {
    match cell {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        other => Err(ClientError::Decode(format!(
            "unexpected broadband cell: {other:?}"
        ))),
    }
}
