use async_trait::async_trait;

use crate::client::geojson::Feature;
use crate::error::ClientResult;
use crate::types::QueryOutcome;

/// Latitude/longitude bounds for the overlay preload endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lower_latitude: f64,
    pub upper_latitude: f64,
    pub lower_longitude: f64,
    pub upper_longitude: f64,
}

impl BoundingBox {
    /// The whole world: what the map view requests at startup to load the
    /// full overlay dataset.
    pub const WORLD: BoundingBox = BoundingBox {
        lower_latitude: -90.0,
        upper_latitude: 90.0,
        lower_longitude: -180.0,
        upper_longitude: 180.0,
    };
}

/// The backend operations the dispatcher depends on.
///
/// `BackendClient` is the real implementation; tests substitute doubles with
/// canned envelopes so dispatch logic runs without a network.
#[async_trait]
pub trait QuerySource: Send + Sync {
    /// Broadband coverage for a state/county pair. Every failure mode
    /// (transport, decode, non-success envelope) resolves to a
    /// [`QueryOutcome::Failure`], never an error the caller must handle.
    async fn lookup_broadband(&self, state: &str, county: &str) -> QueryOutcome;

    /// Features whose area description matches `keyword`, plus the outcome to
    /// render. The feature list is empty whenever the outcome is a failure.
    async fn search_highlight(&self, keyword: &str) -> (Vec<Feature>, QueryOutcome);

    /// All features within `bounds`. Used once at startup to preload the
    /// overlay; has no transcript row, so errors surface directly.
    async fn fetch_bounding_box(&self, bounds: BoundingBox) -> ClientResult<Vec<Feature>>;
}
