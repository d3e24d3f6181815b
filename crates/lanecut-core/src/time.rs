//! Time, pixel, and zoom arithmetic.
//!
//! Timeline time is carried as `f64` seconds. The ruler scale is a fixed
//! pixels-per-second constant; zoom is an independent visual factor applied
//! by the host over the whole pixel space, so converting a raw pointer
//! offset back to time divides the zoom out first.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine_config::{
    PIXELS_PER_SECOND, TIMELINE_SECONDS, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP_FACTOR,
};

/// Frame rate as a rational number (e.g. 30000/1001 for 29.97 fps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (e.g. 30000)
    pub numerator: u32,
    /// Denominator (e.g. 1001)
    pub denominator: u32,
}

impl FrameRate {
    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Convert to frames per second as f64.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Duration of a single frame in seconds.
    ///
    /// Reduced in exact rational form before the final division.
    #[inline]
    pub fn frame_duration(self) -> f64 {
        let exact = Rational64::new(self.denominator as i64, self.numerator as i64);
        *exact.numer() as f64 / *exact.denom() as f64
    }

    /// Common frame rates
    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_60: Self = Self::new(60, 1);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_30
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.to_fps_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Convert timeline time to un-zoomed pixel position.
#[inline]
pub fn time_to_pixels(t: f64) -> f64 {
    t * PIXELS_PER_SECOND
}

/// Invert a raw pointer pixel offset back to timeline time.
///
/// Pointer offsets arrive in screen pixels with the zoom transform already
/// applied, so the zoom divides out before the ruler scale does.
#[inline]
pub fn pixels_to_time(px: f64, zoom: f64) -> f64 {
    (px / zoom) / PIXELS_PER_SECOND
}

/// Clamp a zoom factor to the supported range. Idempotent.
#[inline]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Apply one multiplicative zoom step and clamp.
pub fn zoom_step(current: f64, direction: ZoomDirection) -> f64 {
    let stepped = match direction {
        ZoomDirection::In => current * ZOOM_STEP_FACTOR,
        ZoomDirection::Out => current / ZOOM_STEP_FACTOR,
    };
    clamp_zoom(stepped)
}

/// Saturate a time value into the editable timeline extent.
#[inline]
pub fn clamp_to_timeline(t: f64) -> f64 {
    t.clamp(0.0, TIMELINE_SECONDS)
}
