//! Simulation error types.

use thiserror::Error;

/// Errors that can occur while preparing or running a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid capacity: {capacity} (must be between {min} and {max})")]
    InvalidCapacity {
        capacity: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid reference string length: {length} (must be between {min} and {max})")]
    InvalidSequenceLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid page identifier: {token:?}")]
    InvalidPage { token: String },

    #[error("Simulation is not configured: choose a policy first")]
    NotConfigured,

    #[error("Invalid frame index: {index} (capacity: {capacity})")]
    InvalidFrameIndex { index: usize, capacity: usize },

    #[error("No eviction candidate while all {capacity} frames are occupied")]
    NoVictim { capacity: usize },
}

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
