//! Playback synchronization between the playhead and the media surface.

use std::sync::Arc;

use lanecut_timeline::TimelineState;
use tracing::{debug, info};
use uuid::Uuid;

/// The external playback device (a `<video>` element behind a player
/// widget, a decoder pipeline, a test double). Opaque to the engine: it is
/// driven through this trait and reports back through the editor's
/// `playback_tick`/`playback_ended` entry points.
pub trait MediaSurface {
    /// Load the given media source.
    fn bind(&mut self, source_url: &str);
    /// Seek within the currently bound media.
    fn set_local_time(&mut self, seconds: f64);
    fn play(&mut self);
    fn pause(&mut self);
}

/// Keeps the shared playhead and the media surface in agreement about which
/// clip is active and at what local offset into its media.
#[derive(Debug, Default)]
pub struct PlaybackSync {
    playing: bool,
    /// Clip whose media currently drives the surface.
    bound_clip: Option<Uuid>,
}

impl PlaybackSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Clip currently driving the surface.
    pub fn bound_clip(&self) -> Option<Uuid> {
        self.bound_clip
    }

    /// Seek the playhead to `t` (saturated into the timeline), rebinding
    /// the surface when the clip under the new time carries a different
    /// asset and seeking the surface to the local offset into that clip.
    ///
    /// When no clip contains `t` the surface keeps its last binding; no
    /// stop is forced.
    pub fn seek<S>(&mut self, state: &mut TimelineState, surface: &mut S, t: f64)
    where
        S: MediaSurface + ?Sized,
    {
        state.seek(t);
        let t = state.playhead();
        let (clip_id, asset, local) = match state.lane.find_at(t) {
            Some(clip) => (clip.id, Arc::clone(&clip.asset), t - clip.start_time),
            None => return,
        };
        if state.active_asset != Some(asset.id) {
            info!(asset = %asset.name, "binding playback surface");
            surface.bind(&asset.source_url);
            state.active_asset = Some(asset.id);
        }
        surface.set_local_time(local);
        self.bound_clip = Some(clip_id);
    }

    /// Natural playback progress reported by the media engine.
    ///
    /// `local_time` is the surface's position within its bound media.
    /// Dropped while paused and when the bound clip no longer exists.
    /// Crossing into a different clip rebinds exactly as `seek` does, so
    /// contiguous clips play through without interruption; a tick landing
    /// in a gap only advances the playhead to the gap edge, and playback
    /// stalls on the previous clip's last frame until the next user seek.
    pub fn tick<S>(&mut self, state: &mut TimelineState, surface: &mut S, local_time: f64)
    where
        S: MediaSurface + ?Sized,
    {
        if !self.playing {
            return;
        }
        let Some(bound_id) = self.bound_clip else {
            return;
        };
        let Some(global) = state
            .lane
            .clip(bound_id)
            .map(|c| c.start_time + local_time)
        else {
            // Bound clip deleted mid-playback.
            return;
        };
        let crossed = state
            .lane
            .find_at(global)
            .map_or(false, |next| next.id != bound_id);
        if crossed {
            debug!(t = global, "playback crossed a clip boundary");
            self.seek(state, surface, global);
        } else {
            state.seek(global);
        }
    }

    /// The media engine reached the end of its bound source.
    pub fn ended(&mut self) {
        info!("playback ended");
        self.playing = false;
    }

    /// Propagate play/pause intent to the surface. Never moves the playhead.
    pub fn set_playing<S>(&mut self, surface: &mut S, playing: bool)
    where
        S: MediaSurface + ?Sized,
    {
        if self.playing == playing {
            return;
        }
        self.playing = playing;
        if playing {
            info!("playback started");
            surface.play();
        } else {
            info!("playback paused");
            surface.pause();
        }
    }

    /// Flip the play/pause intent.
    pub fn toggle<S>(&mut self, surface: &mut S)
    where
        S: MediaSurface + ?Sized,
    {
        let next = !self.playing;
        self.set_playing(surface, next);
    }
}
