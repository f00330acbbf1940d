use std::fmt;

use chrono::{DateTime, Utc};

/// Row message shown when a broadband command has the wrong argument count.
pub const BROADBAND_USAGE: &str =
    "Please enter a valid broadband command: broadband <state> <county>";

/// Row message for any broadband query that did not produce a percentage.
pub const BROADBAND_ERROR: &str =
    "Broadband error - check server API connection or ensure provided state and county are valid";

/// Row message shown when a highlight query matched at least one feature.
pub const HIGHLIGHT_SUCCESS: &str =
    "Search successful! Look on your map for the highlighted areas!";

/// Row message for a highlight query with no matches, a malformed query, or a
/// backend failure.
pub const HIGHLIGHT_NO_RESULTS: &str =
    "No results for your area description, please try another one and make sure your format is: highlight <area description>";

/// Row message for an unrecognized command word (or empty input).
pub const INVALID_COMMAND: &str =
    "Please enter a valid command (broadband <state> <county> or highlight <area description>)";

/// Outcome of one backend query, decided once at the client boundary.
///
/// Exactly one variant is ever populated; downstream code never inspects raw
/// response JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Rows ready to render.
    Success(Vec<Vec<String>>),
    /// A single user-facing message describing what went wrong.
    Failure(String),
}

impl QueryOutcome {
    /// Collapse the outcome into renderable rows. A failure becomes one
    /// single-cell row holding its message.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        match self {
            QueryOutcome::Success(rows) => rows,
            QueryOutcome::Failure(message) => vec![vec![message]],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success(_))
    }
}

/// The rows produced by one dispatch cycle, stamped at submission time.
///
/// This is what the transcript ledger stores and what renderers display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<Vec<String>>,
    pub submitted_at: DateTime<Utc>,
}

impl ResultTable {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            submitted_at: Utc::now(),
        }
    }

    /// A table holding a single one-cell message row.
    pub fn message(text: impl Into<String>) -> Self {
        Self::from_rows(vec![vec![text.into()]])
    }

    pub fn from_outcome(outcome: QueryOutcome) -> Self {
        Self::from_rows(outcome.into_rows())
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}
