//! Integration tests for the gesture machine driven through the editor.

use crate::support::{asset, editor};
use lanecut_core::engine_config::TIMELINE_SECONDS;
use lanecut_engine::GestureState;

// ── Scrubbing ──────────────────────────────────────────────────

#[test]
fn scrub_gesture_pauses_and_tracks_pointer() {
    let mut ed = editor();
    ed.add_asset_to_timeline(asset("a", 10.0), 0.0);
    ed.toggle_play_pause();
    assert!(ed.is_playing());

    ed.pointer_down_on_playhead();
    assert!(!ed.is_playing());
    assert_eq!(ed.gesture(), GestureState::ScrubbingPlayhead);

    ed.pointer_move(625.0); // 6.25 s at zoom 1.0
    assert_eq!(ed.state().playhead(), 6.25);

    ed.pointer_move(9_999.0);
    assert_eq!(ed.state().playhead(), TIMELINE_SECONDS);

    ed.pointer_up();
    assert_eq!(ed.gesture(), GestureState::Idle);
}

#[test]
fn scrub_ignores_playback_ticks() {
    let mut ed = editor();
    ed.add_asset_to_timeline(asset("a", 10.0), 0.0);
    ed.seek(0.0);
    ed.toggle_play_pause();

    ed.pointer_down_on_playhead();
    ed.pointer_move(200.0);
    ed.playback_tick(9.0); // stale tick from the media engine
    assert_eq!(ed.state().playhead(), 2.0);
    ed.pointer_up();
}

// ── Clip dragging ──────────────────────────────────────────────

#[test]
fn drag_snaps_to_neighbour_edge_and_keeps_overlap() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);
    ed.add_asset_to_timeline(asset("b", 10.0), 2.0); // pushed to [5, 15)

    // Drag `a` right by 495 px: candidate start 4.95, 5 px short of
    // b.start — snaps to 5.0 and comes to rest overlapping `b`.
    ed.pointer_down_on_clip(a, 100.0);
    ed.pointer_move(595.0);
    ed.pointer_up();

    let a_clip = ed.state().lane.clip(a).unwrap();
    assert_eq!(a_clip.start_time, 5.0);
    assert_eq!(a_clip.end_time, 10.0);
    let b_clip = &ed.state().lane.clips()[1];
    assert!(a_clip.overlaps(b_clip.start_time, b_clip.end_time));
}

#[test]
fn drag_outside_snap_reach_applies_raw_delta() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 20.0);

    ed.pointer_down_on_clip(a, 0.0);
    ed.pointer_move(150.0); // +1.5 s, nothing within 10 px
    ed.pointer_up();

    let a_clip = ed.state().lane.clip(a).unwrap();
    assert!((a_clip.start_time - 21.5).abs() < 1e-9);
}

#[test]
fn drag_selects_the_clip() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);
    ed.pointer_down_on_clip(a, 0.0);
    ed.pointer_up();
    assert_eq!(ed.state().lane.selected().unwrap().id, a);
}

#[test]
fn drag_survives_clip_deletion_mid_gesture() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);

    ed.pointer_down_on_clip(a, 0.0);
    ed.delete_clip(a);
    ed.pointer_move(300.0); // no-op: the clip is gone
    ed.pointer_up();

    assert!(ed.state().lane.is_empty());
    assert_eq!(ed.gesture(), GestureState::Idle);
}

// ── Background click ───────────────────────────────────────────

#[test]
fn background_click_seeks_with_snapping() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);
    ed.select_clip(Some(a));

    ed.click_background(495.0); // 4.95 s, snaps to the clip end at 5.0
    assert_eq!(ed.state().playhead(), 5.0);
    assert!(ed.state().lane.selected().is_none());
    assert_eq!(ed.gesture(), GestureState::Idle);
}

#[test]
fn background_click_far_from_edges_seeks_exactly() {
    let mut ed = editor();
    ed.add_asset_to_timeline(asset("a", 5.0), 0.0);
    ed.click_background(1200.0);
    assert_eq!(ed.state().playhead(), 12.0);
}

// ── Robustness ─────────────────────────────────────────────────

#[test]
fn machine_is_idle_after_up_or_cancel_from_every_state() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);

    ed.pointer_up();
    assert_eq!(ed.gesture(), GestureState::Idle);

    ed.pointer_down_on_playhead();
    ed.pointer_cancel();
    assert_eq!(ed.gesture(), GestureState::Idle);

    ed.pointer_down_on_clip(a, 40.0);
    ed.pointer_move(90.0);
    ed.pointer_up();
    assert_eq!(ed.gesture(), GestureState::Idle);

    ed.pointer_down_on_clip(a, 40.0);
    ed.pointer_cancel();
    assert_eq!(ed.gesture(), GestureState::Idle);
}

#[test]
fn capture_is_balanced_across_gestures() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);

    ed.pointer_down_on_playhead();
    ed.pointer_move(100.0);
    ed.pointer_up();

    ed.pointer_down_on_clip(a, 0.0);
    ed.pointer_cancel();

    ed.click_background(50.0); // one-shot: no capture involved

    assert_eq!(ed.capture().begun, 2);
    assert_eq!(ed.capture().ended, 2);
}

#[test]
fn moves_after_gesture_end_are_ignored() {
    let mut ed = editor();
    ed.pointer_down_on_playhead();
    ed.pointer_move(400.0);
    ed.pointer_up();

    ed.pointer_move(2_000.0);
    assert_eq!(ed.state().playhead(), 4.0);
}
