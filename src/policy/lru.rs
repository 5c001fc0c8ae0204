use std::collections::VecDeque;

use crate::frame::{FrameId, FrameSet};
use crate::reference::Page;

/// Least-recently-used replacement.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Frames ordered by last reference (least recently used at front)
    lru_list: VecDeque<FrameId>,
}

impl LruPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            lru_list: VecDeque::with_capacity(capacity),
        }
    }

    /// Move `frame_id` to the most-recently-used end.
    fn touch(&mut self, frame_id: FrameId) {
        if let Some(idx) = self.lru_list.iter().position(|&id| id == frame_id) {
            self.lru_list.remove(idx);
        }
        self.lru_list.push_back(frame_id);
    }

    pub fn on_hit(&mut self, frame_id: FrameId, _page: Page) {
        self.touch(frame_id);
    }

    pub fn on_load(&mut self, frame_id: FrameId, _page: Page) {
        self.touch(frame_id);
    }

    pub fn choose_victim(&self, frames: &FrameSet) -> Option<FrameId> {
        self.lru_list
            .iter()
            .copied()
            .find(|&frame_id| frames.get(frame_id).is_some())
    }

    /// Frames from least to most recently used.
    pub fn recency(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.lru_list.iter().copied()
    }
}
