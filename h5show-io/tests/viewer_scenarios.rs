#![allow(clippy::cast_precision_loss, clippy::float_cmp)]
//! End-to-end viewer scenarios against real HDF5 files.

use std::path::Path;

use h5show_core::{Error as CoreError, Session, ViewerEvents};
use h5show_io::{Error, Hdf5FrameSource, IndexConfig};
use hdf5::File;
use ndarray::{Array2, Array3};
use tempfile::NamedTempFile;

// Ten 4x4 frames under /scan/frame_NN, frame i filled with i + 1,
// plus a few datasets that must not be picked up.
fn write_scan(path: &Path) {
    let file = File::create(path).unwrap();
    let scan = file.create_group("scan").unwrap();
    for i in 0..10u16 {
        let data = Array2::from_elem((4, 4), i + 1);
        scan.new_dataset::<u16>()
            .shape((4, 4))
            .create(format!("frame_{i:02}").as_str())
            .unwrap()
            .write(data.view())
            .unwrap();
    }
    let meta = file.create_group("meta").unwrap();
    let mask = Array2::<u8>::zeros((8, 8));
    meta.new_dataset::<u8>()
        .shape((8, 8))
        .create("mask")
        .unwrap()
        .write(mask.view())
        .unwrap();
    let cube = Array3::<u16>::zeros((2, 4, 4));
    meta.new_dataset::<u16>()
        .shape((2, 4, 4))
        .create("cube")
        .unwrap()
        .write(cube.view())
        .unwrap();
}

fn write_pilatus(path: &Path, count: usize, rows: usize, cols: usize) {
    let file = File::create(path).unwrap();
    let group = file
        .create_group("entry")
        .unwrap()
        .create_group("instrument")
        .unwrap()
        .create_group("pilatus")
        .unwrap();
    let data = Array3::from_shape_fn((count, rows, cols), |(i, r, c)| (i + r + c) as f32);
    group
        .new_dataset::<f32>()
        .shape((count, rows, cols))
        .create("data")
        .unwrap()
        .write(data.view())
        .unwrap();
}

#[test]
fn test_discovered_frames_first_and_last() {
    let tmp = NamedTempFile::new().unwrap();
    write_scan(tmp.path());

    let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::Frames { x: 4, y: 4 }).unwrap();
    let mut session = Session::open(source, "scan").unwrap();
    assert_eq!(session.frames().len(), 10);
    assert_eq!(session.volume().scroll_range(), 0..=9);

    session.on_scroll(0.0).unwrap();
    let first = session.slice().unwrap().clone();
    session.on_scroll(9.0).unwrap();
    let last = session.slice().unwrap().clone();

    assert_eq!(first.dim(), (4, 4));
    assert_eq!(last.dim(), (4, 4));
    assert_ne!(first, last);
    assert_eq!(first[[0, 0]], 1.0);
    assert_eq!(last[[0, 0]], 10.0);
}

#[test]
fn test_fixed_layout_session() {
    let tmp = NamedTempFile::new().unwrap();
    write_pilatus(tmp.path(), 12, 100, 100);

    let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap();
    let mut session = Session::open(source, "scan-0323_pilatus").unwrap();
    assert_eq!(session.frames().len(), 12);

    let scale = session.scale();
    for position in [11.0, 4.2, 7.7] {
        session.on_scroll(position).unwrap();
        assert_eq!(session.slice().unwrap().dim(), (100, 100));
        assert_eq!(
            session.scale().level_max().to_bits(),
            scale.level_max().to_bits()
        );
        assert_eq!(
            session.scale().histogram_max().to_bits(),
            scale.histogram_max().to_bits()
        );
    }
    assert_eq!(session.current_index(), 8);

    let reading = session.on_pointer_move(-5.0, 3.0).unwrap();
    assert_eq!((reading.x, reading.y), (0, 3));
    assert_eq!(reading.value, 11.0);
    assert_eq!(session.status(), "scan-0323_pilatus 8    0    3: 11");
}

#[test]
fn test_out_of_range_scroll() {
    let tmp = NamedTempFile::new().unwrap();
    write_pilatus(tmp.path(), 3, 2, 2);

    let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap();
    let mut session = Session::open(source, "x").unwrap();
    let err = session.on_scroll(3.0).unwrap_err();
    assert!(matches!(err, CoreError::FrameOutOfRange { index: 3, len: 3 }));
}

#[test]
fn test_missing_file_is_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Hdf5FrameSource::open(dir.path().join("missing.h5"), &IndexConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_no_matching_frames_is_startup_error() {
    let tmp = NamedTempFile::new().unwrap();
    write_scan(tmp.path());

    let err = Hdf5FrameSource::open(tmp.path(), &IndexConfig::Frames { x: 5, y: 5 }).unwrap_err();
    assert!(matches!(err, Error::NoMatchingFrames { x: 5, y: 5 }));
}
