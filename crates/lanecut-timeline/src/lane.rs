//! The single lane of placed clips.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::asset::MediaAsset;
use crate::clip::Clip;

/// Insertion-ordered collection of clips.
///
/// Placement runs overlap avoidance; `move_clip` deliberately does not, so
/// a dragged clip may come to rest on top of its neighbours. `find_at`
/// resolves the resulting ties to store order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lane {
    clips: Vec<Clip>,
}

impl Lane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an asset, pushing the start forward past any occupied extent.
    ///
    /// Greedy: whenever the candidate window overlaps an existing clip, the
    /// candidate jumps to that clip's end and the whole set is re-tested.
    /// A clip whose end the candidate has passed can never block again, so
    /// the scan terminates after at most one jump per clip. Deterministic
    /// and overlap-free, not a tightest packing.
    pub fn insert(&mut self, asset: Arc<MediaAsset>, requested_start: f64) -> &Clip {
        let duration = asset.duration;
        let mut candidate = requested_start.max(0.0);
        while let Some(blocking) = self
            .clips
            .iter()
            .find(|c| c.overlaps(candidate, candidate + duration))
        {
            candidate = blocking.end_time;
        }
        self.clips.push(Clip::new(asset, candidate));
        let placed = &self.clips[self.clips.len() - 1];
        debug!(clip = %placed.id, start = placed.start_time, end = placed.end_time, "clip placed");
        placed
    }

    /// Reposition a clip, preserving its duration. Unknown ids are a no-op.
    ///
    /// Overlap avoidance is NOT re-run here; dragging may stack clips.
    /// Kept asymmetric with `insert` on purpose (see DESIGN.md).
    pub fn move_clip(&mut self, id: Uuid, new_start: f64) {
        if let Some(clip) = self.clips.iter_mut().find(|c| c.id == id) {
            clip.shift_to(new_start);
            debug!(clip = %id, start = clip.start_time, "clip moved");
        }
    }

    /// Remove a clip. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) {
        let before = self.clips.len();
        self.clips.retain(|c| c.id != id);
        if self.clips.len() != before {
            debug!(clip = %id, "clip removed");
        }
    }

    /// First clip in store order whose extent contains `time`.
    pub fn find_at(&self, time: f64) -> Option<&Clip> {
        self.clips.iter().find(|c| c.contains(time))
    }

    /// Look up a clip by id.
    pub fn clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Mark exactly the given clip as selected, or clear the selection.
    pub fn select(&mut self, id: Option<Uuid>) {
        for clip in &mut self.clips {
            clip.selected = Some(clip.id) == id;
        }
    }

    /// The currently selected clip, if any.
    pub fn selected(&self) -> Option<&Clip> {
        self.clips.iter().find(|c| c.selected)
    }

    /// All clips in insertion order.
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Latest end time of any clip (0 when the lane is empty).
    pub fn end_of_lane(&self) -> f64 {
        self.clips.iter().map(|c| c.end_time).fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
