//! The editor facade: one owned state with the components wired over it.

use std::sync::Arc;

use lanecut_core::engine_config::{FRAME_RATE, TIMELINE_SECONDS};
use lanecut_core::time::ZoomDirection;
use lanecut_timeline::{MediaAsset, TimelineState};
use tracing::info;
use uuid::Uuid;

use crate::gesture::{GestureController, GestureState, PointerCapture};
use crate::playback::{MediaSurface, PlaybackSync};

/// Direction of a single-frame transport step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Back,
    Forward,
}

/// Top-level engine facade.
///
/// Owns the timeline state and the interaction components. External input
/// — the pointer feed, transport buttons, catalog selections, and
/// media-engine callbacks — enters through the methods here, which keeps
/// every mutation on the invariant-preserving entry points.
pub struct TimelineEditor<S, C> {
    state: TimelineState,
    gesture: GestureController,
    playback: PlaybackSync,
    surface: S,
    capture: C,
}

impl<S: MediaSurface, C: PointerCapture> TimelineEditor<S, C> {
    pub fn new(surface: S, capture: C) -> Self {
        Self {
            state: TimelineState::new(),
            gesture: GestureController::new(),
            playback: PlaybackSync::new(),
            surface,
            capture,
        }
    }

    // ── Catalog → timeline ───────────────────────────────────

    /// Place an asset selected from the catalog. The requested start is
    /// pushed forward past occupied extents.
    pub fn add_asset_to_timeline(&mut self, asset: Arc<MediaAsset>, requested_start: f64) -> Uuid {
        let clip = self.state.lane.insert(asset, requested_start);
        info!(clip = %clip.id, start = clip.start_time, "asset placed on timeline");
        clip.id
    }

    // ── Clip operations ──────────────────────────────────────

    pub fn select_clip(&mut self, id: Option<Uuid>) {
        self.state.lane.select(id);
    }

    /// Delete a clip. Unknown ids are a no-op.
    pub fn delete_clip(&mut self, id: Uuid) {
        self.state.lane.remove(id);
    }

    /// Delete the selected clip, if any.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.state.lane.selected().map(|c| c.id) {
            self.state.lane.remove(id);
        }
    }

    // ── Transport ────────────────────────────────────────────

    pub fn toggle_play_pause(&mut self) {
        self.playback.toggle(&mut self.surface);
    }

    pub fn seek(&mut self, t: f64) {
        self.playback.seek(&mut self.state, &mut self.surface, t);
    }

    pub fn seek_to_start(&mut self) {
        self.seek(0.0);
    }

    pub fn seek_to_end(&mut self) {
        self.seek(TIMELINE_SECONDS);
    }

    /// Nudge the playhead by one frame at the engine frame rate.
    pub fn step_frame(&mut self, direction: StepDirection) {
        let step = FRAME_RATE.frame_duration();
        let delta = match direction {
            StepDirection::Back => -step,
            StepDirection::Forward => step,
        };
        self.seek(self.state.playhead() + delta);
    }

    // ── Zoom ─────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.state.zoom_step(ZoomDirection::In);
    }

    pub fn zoom_out(&mut self) {
        self.state.zoom_step(ZoomDirection::Out);
    }

    // ── Pointer feed ─────────────────────────────────────────

    pub fn pointer_down_on_playhead(&mut self) {
        self.gesture.pointer_down_on_playhead(
            &mut self.playback,
            &mut self.surface,
            &mut self.capture,
        );
    }

    pub fn pointer_down_on_clip(&mut self, clip_id: Uuid, x: f64) {
        self.gesture
            .pointer_down_on_clip(&mut self.state, &mut self.capture, clip_id, x);
    }

    pub fn click_background(&mut self, x: f64) {
        self.gesture
            .click_background(&mut self.state, &mut self.playback, &mut self.surface, x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.gesture
            .pointer_move(&mut self.state, &mut self.playback, &mut self.surface, x);
    }

    pub fn pointer_up(&mut self) {
        self.gesture.pointer_up(&mut self.capture);
    }

    pub fn pointer_cancel(&mut self) {
        self.gesture.pointer_cancel(&mut self.capture);
    }

    // ── Media-engine callbacks ───────────────────────────────

    /// Playback progress from the media engine. Dropped while a gesture is
    /// active: the drag owns the playhead until pointer-up.
    pub fn playback_tick(&mut self, local_time: f64) {
        if !self.gesture.is_idle() {
            return;
        }
        self.playback
            .tick(&mut self.state, &mut self.surface, local_time);
    }

    pub fn playback_ended(&mut self) {
        self.playback.ended();
    }

    // ── Read access ──────────────────────────────────────────

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }
}
