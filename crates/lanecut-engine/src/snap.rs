//! Snapping engine for timeline interactions.

use lanecut_core::engine_config::{PIXELS_PER_SECOND, SNAP_THRESHOLD_PX};
use lanecut_timeline::TimelineState;
use smallvec::SmallVec;

/// A time on the timeline that a dragged value is attracted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoint {
    pub time: f64,
    pub kind: SnapKind,
}

/// Kind of snap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    ClipStart,
    ClipEnd,
    Playhead,
}

/// Inline capacity covers a comfortably full lane without spilling.
pub type SnapPoints = SmallVec<[SnapPoint; 16]>;

/// Engine for resolving candidate times against nearby snap points.
#[derive(Debug, Clone)]
pub struct SnapEngine {
    /// Snap radius in un-zoomed pixels. Zoom does not enter the
    /// threshold comparison.
    pub threshold_px: f64,
}

impl SnapEngine {
    pub fn new() -> Self {
        Self {
            threshold_px: SNAP_THRESHOLD_PX,
        }
    }

    /// Collect the candidate set: every clip's start then end, in store
    /// order, with the playhead last. Iteration order doubles as the
    /// tie-break order.
    pub fn collect_points(state: &TimelineState) -> SnapPoints {
        let mut points = SnapPoints::new();
        for clip in state.lane.clips() {
            points.push(SnapPoint {
                time: clip.start_time,
                kind: SnapKind::ClipStart,
            });
            points.push(SnapPoint {
                time: clip.end_time,
                kind: SnapKind::ClipEnd,
            });
        }
        points.push(SnapPoint {
            time: state.playhead(),
            kind: SnapKind::Playhead,
        });
        points
    }

    /// Return the snap point nearest to `candidate` when its un-zoomed
    /// pixel distance is strictly inside the threshold, otherwise the
    /// candidate unchanged. The first minimum encountered wins ties.
    pub fn resolve(&self, candidate: f64, points: &[SnapPoint]) -> f64 {
        let mut best: Option<(f64, f64)> = None; // (time, pixel distance)
        for point in points {
            let dist = (candidate - point.time).abs() * PIXELS_PER_SECOND;
            if dist < self.threshold_px && best.map_or(true, |(_, d)| dist < d) {
                best = Some((point.time, dist));
            }
        }
        best.map_or(candidate, |(time, _)| time)
    }

    /// Collect and resolve in one call.
    pub fn snap(&self, candidate: f64, state: &TimelineState) -> f64 {
        self.resolve(candidate, &Self::collect_points(state))
    }
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new()
    }
}
