use time::macros::datetime;
use warp_clock::clock::{ClockFace, hand_angles, minute_marker_angles};
use warp_clock::editor::Editor;
use warp_clock::prelude::*;
use warp_clock::presets::morph;
use warp_clock::store::{MemoryBackend, PositionStore};

fn hour(value: u8) -> Hour {
    Hour::new(value).expect("valid hour")
}

#[test]
fn default_clock_reads_like_a_regular_one() {
    let store = PositionStore::open(MemoryBackend::new(), datetime!(2025-01-01 08:00:00 +0));
    let positions = store.get(ClockMode::Am);

    let noon = hand_angles(&positions, datetime!(2025-01-01 12:00:00 +0));
    assert!(noon.hour.abs() < 1e-9);
    assert!(noon.minute.abs() < 1e-9);

    let half_three = hand_angles(&positions, datetime!(2025-01-01 03:30:00 +0));
    assert!((half_three.hour - 105.0).abs() < 1e-9);
    assert!((half_three.minute - 180.0).abs() < 1e-9);
}

#[test]
fn dragged_markers_warp_the_hands() {
    let mut store = PositionStore::open(MemoryBackend::new(), datetime!(2025-01-01 08:00:00 +0));
    {
        let mut editor = Editor::new(&mut store);
        // squeeze 1 through 3 towards the anchor, one hour at a time
        assert_eq!(editor.propose(hour(1), 12.0).expect("saved"), 12.0);
        assert_eq!(editor.propose(hour(2), 24.0).expect("saved"), 24.0);
        assert_eq!(editor.propose(hour(3), 36.0).expect("saved"), 36.0);
    }
    let positions = store.get(ClockMode::Am);
    assert!(positions.respects_spacing());

    // 2:30 now sits between the squeezed 2 and 3 markers
    let angles = hand_angles(&positions, datetime!(2025-01-01 02:30:00 +0));
    assert!((angles.hour - 30.0).abs() < 1e-9);
    // 3:30 sweeps the long stretch from 36 up to the 4 marker at 120
    let angles = hand_angles(&positions, datetime!(2025-01-01 03:30:00 +0));
    assert!((angles.hour - 78.0).abs() < 1e-9);
    assert!((angles.minute - 180.0).abs() < 1e-9);
    // minute 7 is 2/5 of the way from the 1 marker to the 2 marker
    let angles = hand_angles(&positions, datetime!(2025-01-01 03:07:00 +0));
    assert!((angles.minute - 16.8).abs() < 1e-9);

    let ticks = minute_marker_angles(&positions);
    // the 12 to 1 arc is only 12 degrees wide
    assert!(ticks.iter().any(|tick| (tick - 2.4).abs() < 1e-9));
    assert!(ticks.iter().any(|tick| (tick - 9.6).abs() < 1e-9));
}

#[test]
fn hour_markers_cannot_cross() {
    let mut store = PositionStore::open(MemoryBackend::new(), datetime!(2025-01-01 08:00:00 +0));
    let mut editor = Editor::new(&mut store);
    // try to drag hour 5 back past hour 4
    assert_eq!(editor.propose(hour(5), 90.0).expect("saved"), 132.0);
    // and hour 11 past the anchor
    assert_eq!(editor.propose(hour(11), 10.0).expect("saved"), 312.0);
    assert_eq!(editor.propose(hour(11), 355.0).expect("saved"), 348.0);
    assert!(editor.positions().respects_spacing());
}

#[test]
fn preview_morph_feeds_the_renderer() {
    let time = datetime!(2025-01-01 12:19:00 +0);
    let face = ClockFace::compose(&morph(1.0), time);
    // 19 minutes into the short arc from the anchor to the 1 marker at 12
    assert!((face.hands.hour - 3.8).abs() < 1e-9);
    assert!((face.hands.minute - 45.6).abs() < 1e-9);
    for marker in face.markers {
        assert_eq!(marker.glyph_rotation, -marker.angle);
    }
}
