//! The state of one simulation run.

use log::debug;

use super::step::{AccessKind, StepResult};
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::frame::{FrameId, FrameSet};
use crate::policy::{EvictionPolicy, PolicyKind, VictimContext};
use crate::reference::{Page, ReferenceString};

/// Where a simulator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    /// No simulation has been configured yet.
    Unconfigured,
    /// Accesses remain to be replayed.
    Ready,
    /// Every access has been replayed.
    Complete,
}

impl SimulationPhase {
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for SimulationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconfigured => write!(f, "Unconfigured"),
            Self::Ready => write!(f, "Ready"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Everything that changes while a simulation runs.
///
/// A state is built once from a [`SimulationConfig`] and advanced one
/// access at a time by [`SimulationState::step`]. It is never reset in
/// place; a new run gets a new state.
#[derive(Debug, Clone)]
pub struct SimulationState {
    config: SimulationConfig,
    frames: FrameSet,
    policy: EvictionPolicy,
    /// Index of the next access to replay
    current_index: usize,
    fault_count: usize,
    /// Occupant of each frame after every step, indexed by frame
    history: Vec<Vec<Option<Page>>>,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let capacity = config.capacity();
        let frames = FrameSet::new(capacity)?;
        let policy = EvictionPolicy::new(config.policy(), capacity);
        let history = vec![Vec::with_capacity(config.reference().len()); capacity];

        Ok(Self {
            config,
            frames,
            policy,
            current_index: 0,
            fault_count: 0,
            history,
        })
    }

    /// Replay the next access.
    ///
    /// Returns None once every access has been replayed; the state is left
    /// untouched in that case.
    pub fn step(&mut self) -> Result<Option<StepResult>> {
        let Some(page) = self.config.reference().get(self.current_index) else {
            return Ok(None);
        };

        let (access, frame, evicted) = match self.frames.find(page) {
            Some(frame_id) => {
                self.policy.on_hit(frame_id, page);
                (AccessKind::Hit, None, None)
            }
            None => {
                let frame_id = self.placement_frame()?;
                let evicted = self.frames.occupy(frame_id, page)?;
                self.policy.on_load(frame_id, page);
                self.fault_count += 1;
                (AccessKind::Fault, Some(frame_id), evicted)
            }
        };

        for (frame_history, slot) in self.history.iter_mut().zip(self.frames.slots()) {
            frame_history.push(*slot);
        }

        let result = StepResult {
            index: self.current_index,
            page,
            access,
            evicted,
            frame,
            frames: self.frames.snapshot(),
        };
        self.current_index += 1;

        debug!(
            "{} step {}: page {} {:?} frame={:?} evicted={:?} frames={:?}",
            self.policy.kind(),
            result.index,
            page,
            access,
            frame,
            evicted,
            result.frames
        );

        Ok(Some(result))
    }

    /// The frame a faulting page goes into: the first empty one, otherwise
    /// the victim chosen by the policy.
    fn placement_frame(&self) -> Result<FrameId> {
        if let Some(frame_id) = self.frames.first_empty() {
            return Ok(frame_id);
        }
        let context = VictimContext::new(self.config.reference(), self.current_index);
        self.policy
            .choose_victim(&self.frames, &context)
            .ok_or(SimulationError::NoVictim {
                capacity: self.frames.capacity(),
            })
    }

    pub fn phase(&self) -> SimulationPhase {
        if self.is_complete() {
            SimulationPhase::Complete
        } else {
            SimulationPhase::Ready
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.config.reference().len()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceString {
        self.config.reference()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn policy(&self) -> &EvictionPolicy {
        &self.policy
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    pub fn hit_count(&self) -> usize {
        self.current_index - self.fault_count
    }

    /// Occupants of `frame_id` after each step so far.
    pub fn history(&self, frame_id: FrameId) -> Result<&[Option<Page>]> {
        self.history
            .get(frame_id)
            .map(Vec::as_slice)
            .ok_or(SimulationError::InvalidFrameIndex {
                index: frame_id,
                capacity: self.frames.capacity(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(capacity: usize, pages: Vec<Page>, policy: PolicyKind) -> SimulationState {
        let reference = ReferenceString::new(pages).unwrap();
        SimulationState::new(SimulationConfig::new(capacity, reference, policy).unwrap()).unwrap()
    }

    #[test]
    fn test_fresh_state() {
        let state = state(3, vec![1, 2], PolicyKind::Fifo);
        assert_eq!(state.phase(), SimulationPhase::Ready);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.fault_count(), 0);
        assert!(state.frames().is_empty());
        for frame_id in 0..3 {
            assert!(state.history(frame_id).unwrap().is_empty());
        }
    }

    #[test]
    fn test_fault_fills_first_empty_frame() {
        let mut state = state(3, vec![5, 6], PolicyKind::Lru);
        let result = state.step().unwrap().unwrap();
        assert_eq!(result.index, 0);
        assert_eq!(result.page, 5);
        assert!(result.is_fault());
        assert_eq!(result.frame, Some(0));
        assert_eq!(result.evicted, None);
        assert_eq!(result.frames, vec![Some(5), None, None]);
    }

    #[test]
    fn test_hit_changes_nothing() {
        let mut state = state(2, vec![5, 5], PolicyKind::Fifo);
        state.step().unwrap();
        let result = state.step().unwrap().unwrap();
        assert!(result.is_hit());
        assert_eq!(result.frame, None);
        assert_eq!(result.evicted, None);
        assert_eq!(result.frames, vec![Some(5), None]);
        assert_eq!(state.fault_count(), 1);
        assert_eq!(state.hit_count(), 1);
    }

    #[test]
    fn test_eviction_overwrites_in_place() {
        let mut state = state(2, vec![1, 2, 3], PolicyKind::Fifo);
        state.step().unwrap();
        state.step().unwrap();
        let result = state.step().unwrap().unwrap();
        assert_eq!(result.evicted, Some(1));
        assert_eq!(result.frame, Some(0));
        assert_eq!(result.frames, vec![Some(3), Some(2)]);
    }

    #[test]
    fn test_history_appends_every_frame() {
        let mut state = state(2, vec![1, 2, 1], PolicyKind::Opt);
        while state.step().unwrap().is_some() {}

        assert_eq!(state.history(0).unwrap(), &[Some(1), Some(1), Some(1)]);
        assert_eq!(state.history(1).unwrap(), &[None, Some(2), Some(2)]);
        assert!(matches!(
            state.history(2),
            Err(SimulationError::InvalidFrameIndex {
                index: 2,
                capacity: 2
            })
        ));
    }

    #[test]
    fn test_step_after_complete_is_noop() {
        let mut state = state(1, vec![1], PolicyKind::Fifo);
        assert!(state.step().unwrap().is_some());
        assert!(state.is_complete());
        assert_eq!(state.phase(), SimulationPhase::Complete);

        assert!(state.step().unwrap().is_none());
        assert_eq!(state.fault_count(), 1);
        assert_eq!(state.history(0).unwrap().len(), 1);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(SimulationPhase::Unconfigured.to_string(), "Unconfigured");
        assert!(SimulationPhase::Ready.is_configured());
        assert!(!SimulationPhase::Unconfigured.is_configured());
    }
}
