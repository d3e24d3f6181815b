//! LaneCut Core - Foundation types for the timeline engine
//!
//! This crate provides the fundamental pieces shared by the rest of the
//! workspace:
//! - Time, pixel, and zoom arithmetic
//! - Engine configuration constants
//! - The error type

pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::{FrameRate, ZoomDirection};

/// Fixed engine configuration.
///
/// Every component reads these shared constants. The ruler scale in
/// particular must stay a single value: changing it without updating all
/// dependents breaks pixel/time alignment across the editor.
pub mod engine_config {
    use crate::time::FrameRate;

    /// Horizontal ruler scale: screen pixels per second at zoom 1.0.
    ///
    /// Zoom is applied as a separate visual scale transform over the whole
    /// pixel space, never folded into this constant.
    pub const PIXELS_PER_SECOND: f64 = 100.0;

    /// Total editable timeline extent in seconds.
    pub const TIMELINE_SECONDS: f64 = 30.0;

    /// Fixed playback frame rate.
    pub const FRAME_RATE: FrameRate = FrameRate::FPS_30;

    /// Lower zoom clamp bound.
    pub const ZOOM_MIN: f64 = 0.5;

    /// Upper zoom clamp bound.
    pub const ZOOM_MAX: f64 = 3.0;

    /// Multiplicative step applied per zoom-in/zoom-out action.
    pub const ZOOM_STEP_FACTOR: f64 = 1.2;

    /// Snap attraction radius in un-zoomed pixels.
    pub const SNAP_THRESHOLD_PX: f64 = 10.0;
}
