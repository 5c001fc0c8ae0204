//! Simulation configuration and input limits.

use crate::error::{Result, SimulationError};
use crate::policy::PolicyKind;
use crate::reference::ReferenceString;

/// Smallest number of frames a simulation can run with.
pub const MIN_FRAMES: usize = 1;
/// Largest number of frames a simulation can run with.
pub const MAX_FRAMES: usize = 10;
/// Shortest accepted reference string.
pub const MIN_REFERENCE_LEN: usize = 1;
/// Longest accepted reference string.
pub const MAX_REFERENCE_LEN: usize = 50;
/// Largest page identifier the generator produces.
pub const MAX_PAGE_ID: u32 = 9;

/// Checks that `capacity` is an accepted number of frames.
pub fn validate_capacity(capacity: usize) -> Result<()> {
    if !(MIN_FRAMES..=MAX_FRAMES).contains(&capacity) {
        return Err(SimulationError::InvalidCapacity {
            capacity,
            min: MIN_FRAMES,
            max: MAX_FRAMES,
        });
    }
    Ok(())
}

/// Checks that `length` is an accepted reference string length.
pub fn validate_reference_len(length: usize) -> Result<()> {
    if !(MIN_REFERENCE_LEN..=MAX_REFERENCE_LEN).contains(&length) {
        return Err(SimulationError::InvalidSequenceLength {
            length,
            min: MIN_REFERENCE_LEN,
            max: MAX_REFERENCE_LEN,
        });
    }
    Ok(())
}

/// The validated parameters a simulation is prepared from.
///
/// Kept alongside the running state so that a reset can rebuild an
/// identical simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    capacity: usize,
    reference: ReferenceString,
    policy: PolicyKind,
}

impl SimulationConfig {
    /// Validates the capacity and wraps the parameters.
    ///
    /// The reference string is validated on construction of
    /// [`ReferenceString`] itself.
    pub fn new(capacity: usize, reference: ReferenceString, policy: PolicyKind) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            reference,
            policy,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reference(&self) -> &ReferenceString {
        &self.reference
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }
}
