use serde::{Deserialize, Serialize};

use crate::aggregator::WeatherAggregator;
use crate::location::PositionSource;
use crate::model::WeatherSnapshot;

/// The result slot the presentation layer consumes.
///
/// A session writes this at most twice: it starts as `Loading` and moves
/// to exactly one of `Error` or `Ready`. There is no state where both an
/// error and a snapshot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Loading,
    Error(String),
    Ready(WeatherSnapshot),
}

/// Drive one dashboard session: resolve a position, then aggregate.
///
/// Runs once per session, never on a timer. A position failure
/// short-circuits before any network request is issued. Always returns a
/// terminal state; the caller holds `Loading` while this is in flight.
pub async fn run_session(
    source: &dyn PositionSource,
    aggregator: &WeatherAggregator,
) -> SessionState {
    let coord = match source.locate().await {
        Ok(coord) => coord,
        Err(err) => {
            tracing::debug!(error = %err, "position resolution failed");
            return SessionState::Error(err.to_string());
        }
    };

    match aggregator.fetch_snapshot(coord).await {
        Ok(snapshot) => SessionState::Ready(snapshot),
        Err(err) => SessionState::Error(err.to_string()),
    }
}
