use log::trace;

use super::VictimContext;
use crate::frame::{FrameId, FrameSet};
use crate::reference::Page;

/// Belady's optimal replacement.
///
/// Holds no state: the victim is derived from the accesses that follow the
/// faulting one.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptPolicy;

impl OptPolicy {
    pub fn on_hit(&mut self, _frame_id: FrameId, _page: Page) {}

    pub fn on_load(&mut self, _frame_id: FrameId, _page: Page) {}

    /// Scan resident pages in ascending frame order.
    ///
    /// The first page that is never referenced again is evicted at once.
    /// If every page recurs, the one whose next reference is farthest away
    /// is evicted; on equal distance the lower frame index wins.
    pub fn choose_victim(&self, frames: &FrameSet, context: &VictimContext<'_>) -> Option<FrameId> {
        let upcoming = context.upcoming();
        let mut victim = None;
        let mut farthest_use = None;

        for (frame_id, page) in frames.resident() {
            match upcoming.iter().position(|&next| next == page) {
                None => {
                    trace!("OPT: page {} in frame {} is never used again", page, frame_id);
                    return Some(frame_id);
                }
                Some(next_use) => {
                    if farthest_use.map_or(true, |farthest| next_use > farthest) {
                        farthest_use = Some(next_use);
                        victim = Some(frame_id);
                    }
                }
            }
        }

        trace!("OPT: farthest next use {:?} in frame {:?}", farthest_use, victim);
        victim
    }
}
