//! Page replacement simulation.
//!
//! [`Simulator`] is the entry point for drivers. It owns at most one
//! [`SimulationState`] and replays its reference string one access per call
//! to [`Simulator::step`]. The simulator has no notion of time; pacing,
//! pausing and cancellation belong to whoever calls `step`.
//!
//! ```text
//! Unconfigured --configure--> Ready --step--> ... --step--> Complete
//!                               ^                              |
//!                               +-------configure / reset------+
//! ```

pub mod state;
pub mod step;

use log::info;

use crate::config::{validate_capacity, SimulationConfig};
use crate::error::{Result, SimulationError};
use crate::frame::FrameId;
use crate::policy::PolicyKind;
use crate::reference::{Page, ReferenceString};
use crate::report::SimulationSummary;

pub use state::{SimulationPhase, SimulationState};
pub use step::{AccessKind, StepResult};

/// Drives a single page replacement simulation.
#[derive(Debug, Default)]
pub struct Simulator {
    state: Option<SimulationState>,
}

impl Simulator {
    /// Create a simulator with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare a new simulation, replacing any previous one.
    ///
    /// On validation failure the previous simulation (if any) is kept as is.
    pub fn configure(&mut self, capacity: usize, reference: Vec<Page>, policy: PolicyKind) -> Result<()> {
        validate_capacity(capacity)?;
        let reference = ReferenceString::new(reference)?;
        self.configure_with(SimulationConfig::new(capacity, reference, policy)?)
    }

    /// Prepare a new simulation from an already validated configuration.
    pub fn configure_with(&mut self, config: SimulationConfig) -> Result<()> {
        let state = SimulationState::new(config)?;
        info!(
            "Configured {} simulation: {} frames, reference string [{}]",
            state.policy_kind(),
            state.capacity(),
            state.reference()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Restart the current simulation from its first access.
    pub fn reset(&mut self) -> Result<()> {
        let config = self.state()?.config().clone();
        self.configure_with(config)
    }

    /// Replay the next access.
    ///
    /// Returns `Ok(None)` once the simulation is complete.
    pub fn step(&mut self) -> Result<Option<StepResult>> {
        let state = self.state.as_mut().ok_or(SimulationError::NotConfigured)?;
        let result = state.step()?;
        if result.is_some() && state.is_complete() {
            info!(
                "{} simulation complete. Total page faults: {}",
                state.policy_kind(),
                state.fault_count()
            );
        }
        Ok(result)
    }

    /// Replay every remaining access and return their results in order.
    pub fn run_to_completion(&mut self) -> Result<Vec<StepResult>> {
        let mut results = Vec::new();
        while let Some(result) = self.step()? {
            results.push(result);
        }
        Ok(results)
    }

    pub fn phase(&self) -> SimulationPhase {
        match &self.state {
            Some(state) => state.phase(),
            None => SimulationPhase::Unconfigured,
        }
    }

    /// The live simulation state.
    pub fn state(&self) -> Result<&SimulationState> {
        self.state.as_ref().ok_or(SimulationError::NotConfigured)
    }

    pub fn is_complete(&self) -> Result<bool> {
        Ok(self.state()?.is_complete())
    }

    pub fn total_faults(&self) -> Result<usize> {
        Ok(self.state()?.fault_count())
    }

    pub fn total_hits(&self) -> Result<usize> {
        Ok(self.state()?.hit_count())
    }

    pub fn current_index(&self) -> Result<usize> {
        Ok(self.state()?.current_index())
    }

    /// Occupants of `frame_id` after each step so far.
    pub fn history(&self, frame_id: FrameId) -> Result<&[Option<Page>]> {
        self.state()?.history(frame_id)
    }

    /// Fault and hit totals for the steps replayed so far.
    pub fn summary(&self) -> Result<SimulationSummary> {
        Ok(SimulationSummary::from_state(self.state()?))
    }
}
