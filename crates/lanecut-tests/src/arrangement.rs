//! Integration tests for clip arrangement: placement, movement, lookup.

use crate::support::{asset, editor};
use lanecut_timeline::{AssetCatalog, Lane};

// ── Forward-push placement ─────────────────────────────────────

#[test]
fn placement_preserves_asset_duration() {
    let mut lane = Lane::new();
    let clip = lane.insert(asset("a", 7.5), 3.0);
    assert_eq!(clip.end_time - clip.start_time, 7.5);
}

#[test]
fn placement_never_overlaps_existing_clips() {
    let mut lane = Lane::new();
    lane.insert(asset("a", 5.0), 0.0);
    lane.insert(asset("b", 3.0), 4.0);
    lane.insert(asset("c", 6.0), 1.0);

    let clips = lane.clips();
    for (i, left) in clips.iter().enumerate() {
        for right in &clips[i + 1..] {
            assert!(
                !left.overlaps(right.start_time, right.end_time),
                "{} and {} overlap",
                left.asset.name,
                right.asset.name
            );
        }
    }
}

#[test]
fn identical_durations_requested_at_zero_tile_the_lane() {
    let mut lane = Lane::new();
    let d = 4.0;
    for i in 0..5 {
        lane.insert(asset(&format!("c{i}"), d), 0.0);
    }
    let starts: Vec<f64> = lane.clips().iter().map(|c| c.start_time).collect();
    assert_eq!(starts, vec![0.0, 4.0, 8.0, 12.0, 16.0]);
}

#[test]
fn placement_lands_in_gap_when_it_fits() {
    let mut lane = Lane::new();
    lane.insert(asset("a", 5.0), 0.0);
    lane.insert(asset("late", 5.0), 12.0);
    // A 5 s gap sits at [5, 10); a 4 s request at 5 fits without pushing.
    let c = lane.insert(asset("fits", 4.0), 5.0);
    assert_eq!(c.start_time, 5.0);
}

#[test]
fn placement_skips_gap_too_small_for_the_asset() {
    let mut lane = Lane::new();
    lane.insert(asset("a", 5.0), 0.0);
    lane.insert(asset("b", 5.0), 7.0);
    // The [5, 7) gap cannot hold 4 s; greedy push lands after `b`.
    let c = lane.insert(asset("c", 4.0), 5.0);
    assert_eq!(c.start_time, 12.0);
}

// ── Movement (no re-avoidance) ─────────────────────────────────

#[test]
fn moved_clip_may_overlap_and_lookup_prefers_store_order() {
    let mut lane = Lane::new();
    let a = lane.insert(asset("a", 5.0), 0.0).id;
    let b = lane.insert(asset("b", 10.0), 5.0).id;

    lane.move_clip(b, 2.0);
    let b_clip = lane.clip(b).unwrap();
    assert_eq!(b_clip.start_time, 2.0);
    assert_eq!(b_clip.end_time, 12.0);

    // Both clips contain t=3; `a` was stored first.
    assert_eq!(lane.find_at(3.0).unwrap().id, a);
    assert_eq!(lane.find_at(8.0).unwrap().id, b);
}

#[test]
fn move_to_negative_start_saturates_at_zero() {
    let mut lane = Lane::new();
    let a = lane.insert(asset("a", 5.0), 3.0).id;
    lane.move_clip(a, -4.0);
    let a = lane.clip(a).unwrap();
    assert_eq!(a.start_time, 0.0);
    assert_eq!(a.end_time, 5.0);
}

// ── Catalog → editor flow ──────────────────────────────────────

#[test]
fn catalog_selection_places_clip_at_playhead() {
    let mut ed = editor();
    let catalog = AssetCatalog::with_samples();
    let five = catalog.iter().find(|a| a.duration == 5.0).unwrap();

    ed.seek(3.0);
    let id = ed.add_asset_to_timeline(five.clone(), ed.state().playhead());
    let clip = ed.state().lane.clip(id).unwrap();
    assert_eq!(clip.start_time, 3.0);
    assert_eq!(clip.end_time, 8.0);
}

#[test]
fn deleting_a_clip_only_touches_that_clip() {
    let mut ed = editor();
    let a = ed.add_asset_to_timeline(asset("a", 5.0), 0.0);
    let b = ed.add_asset_to_timeline(asset("b", 5.0), 0.0);

    ed.delete_clip(a);
    assert!(ed.state().lane.clip(a).is_none());
    assert_eq!(ed.state().lane.clip(b).unwrap().start_time, 5.0);
}
