//! Token-sequence dispatch: one submitted line in, one result table out.

use crate::client::geojson::Feature;
use crate::client::QuerySource;
use crate::types::{self, QueryOutcome, ResultTable};

/// What one dispatch cycle produced.
///
/// `highlight` is populated only when a highlight query matched at least one
/// feature; every other branch leaves the overlay store untouched.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub table: ResultTable,
    pub highlight: Option<Vec<Feature>>,
}

impl DispatchResult {
    fn table_only(table: ResultTable) -> Self {
        Self {
            table,
            highlight: None,
        }
    }
}

/// Route a token sequence to its backend operation.
///
/// Arity failures are decided locally and never reach the network. The first
/// token picks the branch; anything unrecognized, including an empty line,
/// lands on the generic usage row.
pub async fn dispatch(tokens: &[String], source: &dyn QuerySource) -> DispatchResult {
    match tokens.first().map(String::as_str) {
        Some("broadband") => {
            if tokens.len() != 3 {
                return DispatchResult::table_only(ResultTable::message(types::BROADBAND_USAGE));
            }
            let outcome = source.lookup_broadband(&tokens[1], &tokens[2]).await;
            DispatchResult::table_only(ResultTable::from_outcome(outcome))
        }
        Some("highlight") => {
            if tokens.len() < 2 {
                return DispatchResult::table_only(ResultTable::message(
                    types::HIGHLIGHT_NO_RESULTS,
                ));
            }
            // Extra tokens after the keyword are accepted and ignored.
            let (features, outcome) = source.search_highlight(&tokens[1]).await;
            let highlight = if outcome.is_success() && !features.is_empty() {
                Some(features)
            } else {
                None
            };
            DispatchResult {
                table: ResultTable::from_outcome(outcome),
                highlight,
            }
        }
        _ => DispatchResult::table_only(ResultTable::message(types::INVALID_COMMAND)),
    }
}
