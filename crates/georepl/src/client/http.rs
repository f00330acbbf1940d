use async_trait::async_trait;

use crate::client::envelope::{self, ResponseEnvelope};
use crate::client::geojson::Feature;
use crate::client::source::{BoundingBox, QuerySource};
use crate::error::{ClientError, ClientResult};
use crate::types::{self, QueryOutcome};

/// HTTP implementation of [`QuerySource`] against the map/coverage backend.
///
/// No retries and no timeout beyond what the transport itself enforces; a
/// request that never resolves simply leaves its dispatch pending.
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    async fn get_envelope(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<ResponseEnvelope> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        response
            .json::<ResponseEnvelope>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn keyword_features(&self, keyword: &str) -> ClientResult<Vec<Feature>> {
        let env = self.get_envelope("mapsKeyWord", &[("Area", keyword)]).await?;
        // The envelope type is not consulted here: the keyword endpoint
        // carries its payload in `data` on every path that has one.
        let collection = envelope::embedded_collection(&env.data)?;
        Ok(collection.features)
    }
}

#[async_trait]
impl QuerySource for BackendClient {
    async fn lookup_broadband(&self, state: &str, county: &str) -> QueryOutcome {
        let result = self
            .get_envelope("broadband", &[("state", state), ("county", county)])
            .await
            .and_then(|env| envelope::broadband_row(&env));
        match result {
            Ok(rows) => QueryOutcome::Success(rows),
            Err(e) => {
                tracing::debug!(state, county, error = %e, "broadband lookup failed");
                QueryOutcome::Failure(types::BROADBAND_ERROR.to_string())
            }
        }
    }

    async fn search_highlight(&self, keyword: &str) -> (Vec<Feature>, QueryOutcome) {
        match self.keyword_features(keyword).await {
            Ok(features) if !features.is_empty() => {
                let outcome =
                    QueryOutcome::Success(vec![vec![types::HIGHLIGHT_SUCCESS.to_string()]]);
                (features, outcome)
            }
            Ok(_) => (
                Vec::new(),
                QueryOutcome::Failure(types::HIGHLIGHT_NO_RESULTS.to_string()),
            ),
            Err(e) => {
                tracing::debug!(keyword, error = %e, "highlight search failed");
                (
                    Vec::new(),
                    QueryOutcome::Failure(types::HIGHLIGHT_NO_RESULTS.to_string()),
                )
            }
        }
    }

    async fn fetch_bounding_box(&self, bounds: BoundingBox) -> ClientResult<Vec<Feature>> {
        let lower_lat = bounds.lower_latitude.to_string();
        let upper_lat = bounds.upper_latitude.to_string();
        let lower_lon = bounds.lower_longitude.to_string();
        let upper_lon = bounds.upper_longitude.to_string();
        let env = self
            .get_envelope(
                "mapsBoundingBox",
                &[
                    ("lowerLatitude", lower_lat.as_str()),
                    ("upperLatitude", upper_lat.as_str()),
                    ("lowerLongitude", lower_lon.as_str()),
                    ("upperLongitude", upper_lon.as_str()),
                ],
            )
            .await?;
        let collection = envelope::embedded_collection(&env.data)?;
        Ok(collection.features)
    }
}
