use thiserror::Error;

/// Terminal failures surfaced to the presentation layer.
///
/// Each variant carries exactly one fixed user-facing message; whatever
/// detail existed underneath is logged at the point the failure is caught
/// and never propagated past the aggregation boundary. There is no retry
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkywatchError {
    /// The host has no positioning capability at all.
    #[error("Geolocation is not supported on this device")]
    CapabilityUnavailable,

    /// Positioning exists but produced no fix (permission denied or the
    /// host timed out internally).
    #[error("Unable to determine current position")]
    PositionUnavailable,

    /// Any of the three upstream calls failed at the transport level,
    /// returned a non-success status, or the merge hit a malformed
    /// payload. Deliberately indistinguishable to the caller.
    #[error("Failed to fetch weather data")]
    FetchFailed,
}
