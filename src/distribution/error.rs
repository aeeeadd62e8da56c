use std::io;

use thiserror::Error;

/// Errors reported by the distribution layer.
///
/// Receiving from a channel that has been closed is not an error of this
/// type: it surfaces as the channel's own disconnection.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// Channels must carry at least one bit per value.
    #[error("bit width must be at least 1")]
    ZeroWidth,

    /// The channel was closed and cannot be started again.
    #[error("the {bits}-bit channel is closed")]
    Closed { bits: usize },

    /// The production thread could not be created.
    #[error("failed to spawn production thread: {0}")]
    Spawn(#[from] io::Error),
}
