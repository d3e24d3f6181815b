//! Pointer gesture state machine for scrubbing and clip dragging.

use lanecut_core::time;
use lanecut_timeline::TimelineState;
use tracing::trace;
use uuid::Uuid;

use crate::playback::{MediaSurface, PlaybackSync};
use crate::snap::SnapEngine;

/// Global pointer-feed subscription held for the lifetime of a gesture.
///
/// A drag must keep receiving move/up events after the pointer leaves the
/// timeline's visible bounds, so the host attaches its listeners at the
/// document level in `begin_capture` and detaches them in `end_capture`.
/// `end_capture` fires on every return to `Idle`, including cancellation.
pub trait PointerCapture {
    fn begin_capture(&mut self);
    fn end_capture(&mut self);
}

/// Capture for hosts that already feed global pointer events.
#[derive(Debug, Default)]
pub struct NullCapture;

impl PointerCapture for NullCapture {
    fn begin_capture(&mut self) {}
    fn end_capture(&mut self) {}
}

/// Current gesture. A tagged enum rather than separate booleans, so
/// "scrubbing while dragging" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    ScrubbingPlayhead,
    DraggingClip {
        clip_id: Uuid,
        pointer_start_x: f64,
        clip_start_at_gesture: f64,
    },
}

/// State machine over the pointer feed.
///
/// X coordinates are timeline-space pixels: the caller subtracts the
/// viewport origin and adds the scroll offset before events reach here.
#[derive(Debug)]
pub struct GestureController {
    state: GestureState,
    snap: SnapEngine,
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            snap: SnapEngine::new(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Pointer down on the playhead handle: begin a scrub. Playback pauses
    /// for the duration of the gesture.
    pub fn pointer_down_on_playhead<S, C>(
        &mut self,
        playback: &mut PlaybackSync,
        surface: &mut S,
        capture: &mut C,
    ) where
        S: MediaSurface + ?Sized,
        C: PointerCapture + ?Sized,
    {
        if !self.is_idle() {
            return;
        }
        playback.set_playing(surface, false);
        capture.begin_capture();
        self.state = GestureState::ScrubbingPlayhead;
        trace!("scrub gesture started");
    }

    /// Pointer down on a clip body: begin a drag and select the clip.
    /// Unknown ids are ignored.
    pub fn pointer_down_on_clip<C>(
        &mut self,
        state: &mut TimelineState,
        capture: &mut C,
        clip_id: Uuid,
        x: f64,
    ) where
        C: PointerCapture + ?Sized,
    {
        if !self.is_idle() {
            return;
        }
        let Some(clip) = state.lane.clip(clip_id) else {
            return;
        };
        let clip_start_at_gesture = clip.start_time;
        state.lane.select(Some(clip_id));
        capture.begin_capture();
        self.state = GestureState::DraggingClip {
            clip_id,
            pointer_start_x: x,
            clip_start_at_gesture,
        };
        trace!(clip = %clip_id, "drag gesture started");
    }

    /// One-shot click on the timeline background: convert, snap, seek.
    /// Clears the selection; no state change.
    pub fn click_background<S>(
        &mut self,
        state: &mut TimelineState,
        playback: &mut PlaybackSync,
        surface: &mut S,
        x: f64,
    ) where
        S: MediaSurface + ?Sized,
    {
        if !self.is_idle() {
            return;
        }
        let t = time::pixels_to_time(x, state.zoom());
        let snapped = self.snap.snap(t, state);
        state.lane.select(None);
        playback.seek(state, surface, snapped);
    }

    /// Pointer movement from the global feed.
    pub fn pointer_move<S>(
        &mut self,
        state: &mut TimelineState,
        playback: &mut PlaybackSync,
        surface: &mut S,
        x: f64,
    ) where
        S: MediaSurface + ?Sized,
    {
        match self.state {
            GestureState::Idle => {}
            GestureState::ScrubbingPlayhead => {
                // No snapping mid-drag; only the click path snaps.
                let t = time::clamp_to_timeline(time::pixels_to_time(x, state.zoom()));
                playback.seek(state, surface, t);
            }
            GestureState::DraggingClip {
                clip_id,
                pointer_start_x,
                clip_start_at_gesture,
            } => {
                let delta_t = time::pixels_to_time(x - pointer_start_x, state.zoom());
                let candidate = clip_start_at_gesture + delta_t;
                let snapped = self.snap.snap(candidate, state);
                state.lane.move_clip(clip_id, snapped);
            }
        }
    }

    /// Pointer released: end whatever gesture was active.
    pub fn pointer_up<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        self.finish(capture);
    }

    /// The pointer left the window or the host cancelled the gesture.
    pub fn pointer_cancel<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        self.finish(capture);
    }

    fn finish<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        if self.is_idle() {
            return;
        }
        capture.end_capture();
        self.state = GestureState::Idle;
        trace!("gesture finished");
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}
