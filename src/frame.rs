//! Fixed-capacity set of memory frames.

use crate::config::validate_capacity;
use crate::error::{Result, SimulationError};
use crate::reference::Page;

/// Index of a frame within a [`FrameSet`].
pub type FrameId = usize;

/// An ordered collection of `capacity` frames, each empty or holding one page.
///
/// The capacity is fixed at construction; frames are only ever overwritten
/// in place, never shifted or resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<Option<Page>>,
}

impl FrameSet {
    /// Create a frame set with every slot empty.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            slots: vec![None; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied frames.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Find the frame holding `page`, lowest index first.
    pub fn find(&self, page: Page) -> Option<FrameId> {
        self.slots.iter().position(|slot| *slot == Some(page))
    }

    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn get(&self, frame_id: FrameId) -> Option<Page> {
        self.slots.get(frame_id).copied().flatten()
    }

    /// Overwrite a frame unconditionally, returning its previous occupant.
    pub fn occupy(&mut self, frame_id: FrameId, page: Page) -> Result<Option<Page>> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(frame_id)
            .ok_or(SimulationError::InvalidFrameIndex {
                index: frame_id,
                capacity,
            })?;
        Ok(slot.replace(page))
    }

    pub fn slots(&self) -> &[Option<Page>] {
        &self.slots
    }

    /// Iterate over `(frame_id, page)` for occupied frames in ascending order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, Page)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(frame_id, slot)| slot.map(|page| (frame_id, page)))
    }

    pub fn snapshot(&self) -> Vec<Option<Page>> {
        self.slots.clone()
    }
}
