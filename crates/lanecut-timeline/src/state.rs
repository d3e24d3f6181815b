//! Shared timeline state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lanecut_core::engine_config::TIMELINE_SECONDS;
use lanecut_core::time::{self, ZoomDirection};

use crate::lane::Lane;

/// The single authoritative editor state.
///
/// One owned value threaded through every component. Playhead and zoom are
/// only mutable through the entry points here so the clamping invariants
/// hold in one place; the lane enforces its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineState {
    /// Placed clips
    pub lane: Lane,
    /// Global time cursor in seconds, kept within `[0, TIMELINE_SECONDS]`
    playhead: f64,
    /// Visual zoom factor, kept within `[ZOOM_MIN, ZOOM_MAX]`
    zoom: f64,
    /// Asset currently bound to the playback surface
    pub active_asset: Option<Uuid>,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            lane: Lane::new(),
            playhead: 0.0,
            zoom: 1.0,
            active_asset: None,
        }
    }
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playhead time.
    #[inline]
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Move the playhead, saturating into the timeline extent.
    pub fn seek(&mut self, t: f64) {
        self.playhead = time::clamp_to_timeline(t);
    }

    /// Current zoom factor.
    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Apply one zoom step.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        self.zoom = time::zoom_step(self.zoom, direction);
    }

    /// Total editable extent in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        TIMELINE_SECONDS
    }
}
