//! Backend query client: HTTP transport, response envelopes, GeoJSON models.

pub mod envelope;
pub mod geojson;
pub mod http;
pub mod source;

pub use geojson::{Feature, FeatureCollection};
pub use http::BackendClient;
pub use source::{BoundingBox, QuerySource};
