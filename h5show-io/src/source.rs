//! Slice loader over an HDF5 file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use hdf5::File;
use h5show_core::{Frame, FrameList, FrameRef, FrameSource};
use log::debug;
use ndarray::s;

use crate::index::{discover_frames, index_stack};
use crate::{Error, IndexConfig, Result};

/// Where slab references point.
#[derive(Debug, Clone)]
enum Layout {
    Stack { dataset: String },
    Frames,
}

/// Frame source that reads one frame per call from an HDF5 file.
///
/// No file handle is kept between reads; every `load_frame` opens the file,
/// reads a single 2D region and closes it again.
#[derive(Debug)]
pub struct Hdf5FrameSource {
    path: PathBuf,
    layout: Layout,
    frames: FrameList,
}

impl Hdf5FrameSource {
    /// Index the frames of `path`.
    ///
    /// # Errors
    /// Returns an error if the file is missing or unreadable, or if no
    /// frames can be located with `config`.
    pub fn open<P: AsRef<Path>>(path: P, config: &IndexConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.try_exists()? {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let (layout, frames) = match config {
            IndexConfig::Stack { dataset } => (
                Layout::Stack {
                    dataset: dataset.clone(),
                },
                index_stack(&file, dataset)?,
            ),
            IndexConfig::Frames { x, y } => (Layout::Frames, discover_frames(&file, *x, *y)?),
        };

        Ok(Self {
            path: path.to_path_buf(),
            layout,
            frames,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the frame at `index`.
    ///
    /// # Errors
    /// Returns an error for an out-of-range index or a failed read.
    pub fn read_frame(&self, index: usize) -> Result<Frame> {
        let frame_ref = self.frames.get(index)?;
        let start = Instant::now();

        let file = File::open(&self.path)?;
        let frame: Frame = match (frame_ref, &self.layout) {
            (FrameRef::Slab(slab), Layout::Stack { dataset }) => {
                file.dataset(dataset)?.read_slice_2d(s![*slab, .., ..])?
            }
            (FrameRef::Dataset(name), _) => file.dataset(name)?.read_2d()?,
            (FrameRef::Slab(_), Layout::Frames) => {
                return Err(Error::InvalidFormat(format!(
                    "slab reference {frame_ref} without a stack dataset"
                )));
            }
        };
        drop(file);

        self.frames.check_shape(&frame)?;
        debug!(
            "frame {index} ({frame_ref}) read in {:.1} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(frame)
    }
}

impl FrameSource for Hdf5FrameSource {
    fn frames(&self) -> &FrameList {
        &self.frames
    }

    fn load_frame(&self, index: usize) -> h5show_core::Result<Frame> {
        Ok(self.read_frame(index)?)
    }
}

/// Label for a file: its stem, or the whole path if it has none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use h5show_core::FrameShape;
    use ndarray::Array3;
    use tempfile::NamedTempFile;

    fn write_stack(path: &Path, count: usize) {
        let file = File::create(path).unwrap();
        let pilatus = file
            .create_group("entry")
            .unwrap()
            .create_group("instrument")
            .unwrap()
            .create_group("pilatus")
            .unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let data =
            Array3::from_shape_fn((count, 3, 4), |(i, r, c)| (i * 100 + r * 10 + c) as u32);
        pilatus
            .new_dataset::<u32>()
            .shape((count, 3, 4))
            .create("data")
            .unwrap()
            .write(data.view())
            .unwrap();
    }

    #[test]
    fn test_stack_slab_read() {
        let tmp = NamedTempFile::new().unwrap();
        write_stack(tmp.path(), 5);

        let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap();
        assert_eq!(source.frames().len(), 5);
        assert_eq!(source.frames().shape(), FrameShape::new(3, 4));

        let frame = source.load_frame(3).unwrap();
        assert_eq!(frame.dim(), (3, 4));
        assert_eq!(frame[[0, 0]], 300.0);
        assert_eq!(frame[[2, 3]], 323.0);
    }

    #[test]
    fn test_out_of_range_read_is_error() {
        let tmp = NamedTempFile::new().unwrap();
        write_stack(tmp.path(), 2);

        let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap();
        let err = source.load_frame(2).unwrap_err();
        assert!(matches!(
            err,
            h5show_core::Error::FrameOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.h5");
        let err = Hdf5FrameSource::open(&missing, &IndexConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_unreachable_path_is_io_error() {
        let tmp = NamedTempFile::new().unwrap();
        // A regular file used as a directory component.
        let through_file = tmp.path().join("scan.h5");
        let err = Hdf5FrameSource::open(&through_file, &IndexConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_not_an_hdf5_file() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"plain text").unwrap();
        let err = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Hdf5(_)));
    }

    #[test]
    fn test_file_replaced_between_reads() {
        let tmp = NamedTempFile::new().unwrap();
        write_stack(tmp.path(), 4);
        let source = Hdf5FrameSource::open(tmp.path(), &IndexConfig::default()).unwrap();
        assert_eq!(source.load_frame(1).unwrap()[[0, 0]], 100.0);

        // Nothing is held open, so the file can be rewritten underneath.
        write_stack(tmp.path(), 4);
        assert_eq!(source.load_frame(2).unwrap()[[0, 0]], 200.0);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(Path::new("/data/scan-0323_pilatus.h5")),
            "scan-0323_pilatus"
        );
        assert_eq!(display_name(Path::new("818292.h5")), "818292");
    }
}
