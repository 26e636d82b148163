//! Error types for strip control
use thiserror::Error;

/// Errors produced while queueing or transmitting frame data
#[derive(Error, Debug)]
pub enum ControlError {
    /// A full-strip update did not carry one color per light
    #[error("color count mismatch: device drives {expected} lights, got {actual} colors")]
    LengthMismatch {
        /// The device's configured light count
        expected: usize,
        /// The number of colors supplied
        actual: usize,
    },

    /// A write would run past the last allocated universe.
    ///
    /// Indicates a queueing contract violation (more lights queued than the
    /// buffer was sized for), not a normal runtime condition.
    #[error("frame capacity exceeded: no room for {lights} more lights at universe {universe}, slot {slot}")]
    CapacityExceeded {
        /// Universe index the cursor was on
        universe: usize,
        /// Slot offset the cursor was on
        slot: usize,
        /// Number of lights the rejected write asked for
        lights: usize,
    },

    /// The network transport failed to deliver a universe
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Invalid construction parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
