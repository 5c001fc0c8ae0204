use std::collections::VecDeque;

use crate::frame::{FrameId, FrameSet};
use crate::reference::Page;

/// First-in, first-out replacement.
///
/// Frames are queued in the order their current page was loaded. Hits do
/// not reorder the queue.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Frames in load order (oldest at front)
    load_order: VecDeque<FrameId>,
}

impl FifoPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            load_order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn on_hit(&mut self, _frame_id: FrameId, _page: Page) {}

    pub fn on_load(&mut self, frame_id: FrameId, _page: Page) {
        if let Some(pos) = self.load_order.iter().position(|&id| id == frame_id) {
            self.load_order.remove(pos);
        }
        self.load_order.push_back(frame_id);
    }

    pub fn choose_victim(&self, frames: &FrameSet) -> Option<FrameId> {
        self.load_order
            .iter()
            .copied()
            .find(|&frame_id| frames.get(frame_id).is_some())
    }

    /// Frames from oldest to newest load.
    pub fn load_order(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.load_order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frames(pages: &[Page]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len()).unwrap();
        for (frame_id, &page) in pages.iter().enumerate() {
            frames.occupy(frame_id, page).unwrap();
        }
        frames
    }

    #[test]
    fn test_evicts_oldest_load() {
        let frames = full_frames(&[1, 2, 3]);
        let mut policy = FifoPolicy::new(3);
        policy.on_load(0, 1);
        policy.on_load(1, 2);
        policy.on_load(2, 3);

        assert_eq!(policy.choose_victim(&frames), Some(0));
    }

    #[test]
    fn test_hit_does_not_reorder() {
        let frames = full_frames(&[1, 2, 3]);
        let mut policy = FifoPolicy::new(3);
        policy.on_load(0, 1);
        policy.on_load(1, 2);
        policy.on_load(2, 3);

        policy.on_hit(0, 1);
        assert_eq!(policy.choose_victim(&frames), Some(0));
    }

    #[test]
    fn test_reload_moves_frame_to_back() {
        let mut policy = FifoPolicy::new(3);
        policy.on_load(0, 1);
        policy.on_load(1, 2);
        policy.on_load(2, 3);

        // Frame 0 is evicted and refilled with page 4
        policy.on_load(0, 4);
        let frames = full_frames(&[4, 2, 3]);
        assert_eq!(policy.choose_victim(&frames), Some(1));
        assert_eq!(policy.load_order().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn test_no_candidate_when_nothing_loaded() {
        let frames = FrameSet::new(2).unwrap();
        let policy = FifoPolicy::new(2);
        assert_eq!(policy.choose_victim(&frames), None);
    }
}
