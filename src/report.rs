//! Text reports for simulation runs.
//!
//! These types only read simulation results; they are what a terminal
//! driver prints for each step and once a run is finished.

use std::fmt;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::policy::PolicyKind;
use crate::reference::ReferenceString;
use crate::simulation::{SimulationState, Simulator, StepResult};

/// One log line describing a step.
pub struct StepLine<'a> {
    result: &'a StepResult,
    policy: PolicyKind,
}

impl<'a> StepLine<'a> {
    pub fn new(result: &'a StepResult, policy: PolicyKind) -> Self {
        Self { result, policy }
    }
}

impl fmt::Display for StepLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.result.page;
        match (self.result.is_fault(), self.result.evicted, self.result.frame) {
            (true, Some(evicted), _) => write!(
                f,
                "Page {}: Not in frames, replacing {} ({}) -> Page Fault!",
                page, evicted, self.policy
            ),
            (true, None, Some(frame)) => write!(
                f,
                "Page {}: Not in frames, adding to empty frame {} -> Page Fault!",
                page, frame
            ),
            (true, None, None) => write!(f, "Page {}: Not in frames -> Page Fault!", page),
            (false, _, _) if self.policy == PolicyKind::Lru => write!(
                f,
                "Page {}: Already in frames, marked most recently used -> Page Hit",
                page
            ),
            (false, _, _) => write!(f, "Page {}: Already in frames -> Page Hit", page),
        }
    }
}

/// Grid of frame contents over time.
///
/// The first row lists the pages replayed so far; each following row shows
/// one frame's occupant after every step. Empty frames print as `-`.
pub struct HistoryTable<'a> {
    state: &'a SimulationState,
}

impl<'a> HistoryTable<'a> {
    pub fn new(state: &'a SimulationState) -> Self {
        Self { state }
    }
}

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let processed = &self.state.reference().as_slice()[..self.state.current_index()];

        write!(f, "{:<5}", "Ref:")?;
        for page in processed {
            write!(f, "{:>3}", page)?;
        }
        writeln!(f)?;

        for frame_id in 0..self.state.capacity() {
            write!(f, "{:<5}", format!("F{}", frame_id))?;
            let history = self.state.history(frame_id).map_err(|_| fmt::Error)?;
            for slot in history {
                match slot {
                    Some(page) => write!(f, "{:>3}", page)?,
                    None => write!(f, "{:>3}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Totals for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub policy: PolicyKind,
    pub capacity: usize,
    /// Number of accesses replayed.
    pub steps: usize,
    pub faults: usize,
    pub hits: usize,
}

impl SimulationSummary {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            policy: state.policy_kind(),
            capacity: state.capacity(),
            steps: state.current_index(),
            faults: state.fault_count(),
            hits: state.hit_count(),
        }
    }

    pub fn fault_rate(&self) -> f64 {
        if self.steps == 0 {
            return 0.0;
        }
        self.faults as f64 / self.steps as f64
    }

    pub fn hit_rate(&self) -> f64 {
        if self.steps == 0 {
            return 0.0;
        }
        self.hits as f64 / self.steps as f64
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} Total page faults: {:>2}  hits: {:>2}  fault rate: {:>5.1}%",
            self.policy.name(),
            self.faults,
            self.hits,
            self.fault_rate() * 100.0
        )
    }
}

/// Run every policy over the same input and collect their totals.
pub fn compare(capacity: usize, reference: &ReferenceString) -> Result<Vec<SimulationSummary>> {
    PolicyKind::ALL
        .iter()
        .map(|&policy| {
            let mut simulator = Simulator::new();
            simulator.configure_with(SimulationConfig::new(capacity, reference.clone(), policy)?)?;
            simulator.run_to_completion()?;
            simulator.summary()
        })
        .collect()
}
