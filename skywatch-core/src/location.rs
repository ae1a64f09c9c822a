use async_trait::async_trait;

use crate::error::SkywatchError;
use crate::model::Coordinate;

/// Ambient positioning capability.
///
/// A single asynchronous operation with exactly one suspension point: it
/// resolves with the first available fix or fails, once. No retry, no
/// accuracy filtering, no continuous tracking, no cancellation.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn locate(&self) -> Result<Coordinate, SkywatchError>;
}

/// The host positioning backend.
///
/// No positioning service is wired up on this target yet, so locating
/// reports the capability as unavailable and the caller falls back to an
/// explicit coordinate. No network request is ever made on this path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPositionSource;

#[async_trait]
impl PositionSource for SystemPositionSource {
    async fn locate(&self) -> Result<Coordinate, SkywatchError> {
        Err(SkywatchError::CapabilityUnavailable)
    }
}

/// A fixed coordinate, standing in for the host capability when the user
/// supplies an explicit position or a test needs a deterministic one.
#[derive(Debug, Clone, Copy)]
pub struct StaticPositionSource(pub Coordinate);

#[async_trait]
impl PositionSource for StaticPositionSource {
    async fn locate(&self) -> Result<Coordinate, SkywatchError> {
        Ok(self.0)
    }
}
