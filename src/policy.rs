//! Page replacement policies.
//!
//! A policy decides which resident page to evict when a fault occurs and
//! every frame is occupied. Three classical policies are provided:
//!
//! - **FIFO**: evict the page that was loaded longest ago
//! - **LRU**: evict the page that was referenced longest ago
//! - **OPT**: evict the page whose next reference lies farthest in the future
//!
//! The set of policies is closed: [`EvictionPolicy`] is an enum and every
//! dispatch point matches it exhaustively.

pub mod fifo;
pub mod lru;
pub mod opt;

use std::fmt;
use std::str::FromStr;

use crate::frame::{FrameId, FrameSet};
use crate::reference::{Page, ReferenceString};

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

/// Selector for a replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Opt,
}

impl PolicyKind {
    /// All policies, in the order they are usually presented.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Opt];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown replacement policy: {0:?} (expected fifo, lru or opt)")]
pub struct ParsePolicyError(pub String);

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "opt" | "optimal" | "belady" => Ok(Self::Opt),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// What a policy may look at when choosing a victim.
#[derive(Debug, Clone, Copy)]
pub struct VictimContext<'a> {
    /// The full reference string being replayed.
    pub reference: &'a ReferenceString,
    /// Index of the access that is faulting.
    pub position: usize,
}

impl<'a> VictimContext<'a> {
    pub fn new(reference: &'a ReferenceString, position: usize) -> Self {
        Self {
            reference,
            position,
        }
    }

    /// Accesses strictly after the faulting one.
    pub fn upcoming(&self) -> &'a [Page] {
        self.reference.suffix_after(self.position)
    }
}

/// A replacement policy instance together with its bookkeeping.
#[derive(Debug, Clone)]
pub enum EvictionPolicy {
    Fifo(FifoPolicy),
    Lru(LruPolicy),
    Opt(OptPolicy),
}

impl EvictionPolicy {
    /// Create a fresh policy with empty bookkeeping.
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Self::Fifo(FifoPolicy::new(capacity)),
            PolicyKind::Lru => Self::Lru(LruPolicy::new(capacity)),
            PolicyKind::Opt => Self::Opt(OptPolicy),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fifo(_) => PolicyKind::Fifo,
            Self::Lru(_) => PolicyKind::Lru,
            Self::Opt(_) => PolicyKind::Opt,
        }
    }

    /// Called when the accessed page is already resident in `frame_id`.
    pub fn on_hit(&mut self, frame_id: FrameId, page: Page) {
        match self {
            Self::Fifo(policy) => policy.on_hit(frame_id, page),
            Self::Lru(policy) => policy.on_hit(frame_id, page),
            Self::Opt(policy) => policy.on_hit(frame_id, page),
        }
    }

    /// Called after `page` has been placed into `frame_id` on a fault.
    pub fn on_load(&mut self, frame_id: FrameId, page: Page) {
        match self {
            Self::Fifo(policy) => policy.on_load(frame_id, page),
            Self::Lru(policy) => policy.on_load(frame_id, page),
            Self::Opt(policy) => policy.on_load(frame_id, page),
        }
    }

    /// Select the frame to evict. Only called when every frame is occupied.
    ///
    /// Returns None if the policy has no candidate, which means its
    /// bookkeeping is out of sync with the frame set.
    pub fn choose_victim(&self, frames: &FrameSet, context: &VictimContext<'_>) -> Option<FrameId> {
        match self {
            Self::Fifo(policy) => policy.choose_victim(frames),
            Self::Lru(policy) => policy.choose_victim(frames),
            Self::Opt(policy) => policy.choose_victim(frames, context),
        }
    }
}
