//! Per-step results.

use crate::frame::FrameId;
use crate::reference::Page;

/// Whether an access found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Hit,
    Fault,
}

impl AccessKind {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault)
    }
}

/// The outcome of replaying one access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Position of the access in the reference string.
    pub index: usize,
    /// The page that was accessed.
    pub page: Page,
    /// Hit or fault.
    pub access: AccessKind,
    /// The page removed to make room, if the fault required an eviction.
    pub evicted: Option<Page>,
    /// The frame whose content changed. None on a hit.
    pub frame: Option<FrameId>,
    /// Frame contents after the step.
    pub frames: Vec<Option<Page>>,
}

impl StepResult {
    pub fn is_hit(&self) -> bool {
        self.access.is_hit()
    }

    pub fn is_fault(&self) -> bool {
        self.access.is_fault()
    }
}
