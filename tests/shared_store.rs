use time::macros::datetime;
use warp_clock::clock::hand_angles;
use warp_clock::constants::{AM_RECORD, PM_RECORD};
use warp_clock::editor::Editor;
use warp_clock::prelude::*;
use warp_clock::store::{FileBackend, PositionBackend, PositionStore};

fn hour(value: u8) -> Hour {
    Hour::new(value).expect("valid hour")
}

#[test]
fn first_run_writes_both_records() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let backend = FileBackend::open(dir.path()).expect("should open store");
    let store = PositionStore::open(backend, datetime!(2025-01-01 10:00:00 +0));

    for record in [AM_RECORD, PM_RECORD] {
        let path = store.backend().record_path(record);
        let bytes = std::fs::read(&path).expect("record should exist");
        assert_eq!(
            PositionSet::from_json(&bytes).expect("should decode"),
            PositionSet::even()
        );
    }
}

#[test]
fn viewer_sees_editor_changes_after_reload() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let evening = datetime!(2025-01-01 20:30:00 +0);

    let mut editor_store =
        PositionStore::open(FileBackend::open(dir.path()).expect("open"), evening);
    let mut viewer = PositionStore::viewer(FileBackend::new(dir.path()), evening);
    assert_eq!(viewer.display_positions(evening), PositionSet::even());

    let applied = Editor::new(&mut editor_store)
        .propose(hour(8), 228.0)
        .expect("should save");
    assert_eq!(applied, 228.0);

    // stale until the viewer refreshes
    assert_eq!(viewer.display_positions(evening), PositionSet::even());
    viewer.reload();
    let shown = viewer.display_positions(evening);
    assert_eq!(shown.angle(hour(8)), 228.0);

    // 8:30 in the evening now sweeps from 228 towards the 9 marker at 270
    let angles = hand_angles(&shown, evening);
    assert!((angles.hour - 249.0).abs() < 1e-9);
}

#[test]
fn editor_reopens_with_saved_layout() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let morning = datetime!(2025-01-01 07:00:00 +0);
    {
        let mut store = PositionStore::open(FileBackend::open(dir.path()).expect("open"), morning);
        Editor::new(&mut store)
            .propose(hour(6), 162.0)
            .expect("should save");
    }
    let store = PositionStore::open(FileBackend::open(dir.path()).expect("open"), morning);
    assert_eq!(store.get(ClockMode::Am).angle(hour(6)), 162.0);
    assert_eq!(store.get(ClockMode::Pm), PositionSet::even());
}

#[test]
fn flat_array_records_load() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let mut backend = FileBackend::open(dir.path()).expect("open");
    let flat = "[12,360,1,30,2,60,3,90,4,120,5,150,6,180,7,210,8,240,9,270,10,300,11,336]";
    backend
        .save(PM_RECORD, flat.as_bytes())
        .expect("should write");

    let store = PositionStore::open(backend, datetime!(2025-01-01 13:00:00 +0));
    assert_eq!(store.get(ClockMode::Pm).angle(hour(11)), 336.0);
    assert_eq!(store.current_mode(), ClockMode::Pm);
}

#[test]
fn corrupt_record_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let mut backend = FileBackend::open(dir.path()).expect("open");
    backend
        .save(AM_RECORD, b"{\"1\": \"thirty\"}")
        .expect("should write");

    let store = PositionStore::viewer(backend, datetime!(2025-01-01 06:00:00 +0));
    assert_eq!(store.get(ClockMode::Am), PositionSet::even());
}

#[test]
fn saves_leave_no_staging_files_behind() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let mut store = PositionStore::open(
        FileBackend::open(dir.path()).expect("open"),
        datetime!(2025-01-01 09:00:00 +0),
    );
    for angle in [96.0, 102.0, 108.0] {
        Editor::new(&mut store)
            .propose(hour(3), angle)
            .expect("should save");
    }
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("should list")
        .map(|entry| {
            entry
                .expect("entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    assert_eq!(names, vec!["AMClockPositions.json", "PMClockPositions.json"]);
}
