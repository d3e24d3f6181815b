//! Clip types for the timeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::MediaAsset;

/// A placed, time-bounded reference to a media asset on the timeline.
///
/// The extent is half-open: `[start_time, end_time)`. Its length always
/// equals the asset's natural duration; clips are never trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID, stable for the clip's lifetime
    pub id: Uuid,
    /// Source media, shared with the catalog and never mutated
    pub asset: Arc<MediaAsset>,
    /// Timeline start in seconds
    pub start_time: f64,
    /// Timeline end in seconds (start + asset duration)
    pub end_time: f64,
    /// Selection flag
    pub selected: bool,
}

impl Clip {
    /// Place an asset at the given start time.
    pub fn new(asset: Arc<MediaAsset>, start_time: f64) -> Self {
        let start_time = start_time.max(0.0);
        let end_time = start_time + asset.duration;
        Self {
            id: Uuid::new_v4(),
            asset,
            start_time,
            end_time,
            selected: false,
        }
    }

    /// Clip length in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside the clip's extent.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }

    /// Whether the clip's extent overlaps `[start, end)`.
    #[inline]
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.start_time < end && start < self.end_time
    }

    /// Reposition the clip, preserving its duration.
    pub(crate) fn shift_to(&mut self, new_start: f64) {
        let duration = self.duration();
        self.start_time = new_start.max(0.0);
        self.end_time = self.start_time + duration;
    }
}
