//! Frame references, frame lists and the frame source abstraction.

use std::fmt;

use ndarray::Array2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One 2D detector frame, indexed `[row, col]`.
pub type Frame = Array2<f64>;

/// Identifies one 2D frame within a backing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrameRef {
    /// Index along the leading axis of a fixed 3D dataset.
    Slab(usize),
    /// Absolute path of a 2D dataset.
    Dataset(String),
}

impl fmt::Display for FrameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRef::Slab(index) => write!(f, "[{index}, :, :]"),
            FrameRef::Dataset(path) => write!(f, "{path}"),
        }
    }
}

/// Shape of a single frame in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameShape {
    /// Number of rows (slow axis, displayed as y).
    pub rows: usize,
    /// Number of columns (fast axis, displayed as x).
    pub cols: usize,
}

impl FrameShape {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Build a shape from stored dataset dimensions.
    ///
    /// Returns `None` unless exactly two dimensions are given.
    #[must_use]
    pub fn from_dims(dims: &[usize]) -> Option<Self> {
        match dims {
            [rows, cols] => Some(Self::new(*rows, *cols)),
            _ => None,
        }
    }

    /// Shape of an in-memory frame.
    #[must_use]
    pub fn of(frame: &Frame) -> Self {
        let (rows, cols) = frame.dim();
        Self { rows, cols }
    }

    #[must_use]
    pub fn as_tuple(self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn pixel_count(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Ordered, non-empty list of frame references sharing one frame shape.
///
/// Built once when a file is indexed and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameList {
    frames: Vec<FrameRef>,
    shape: FrameShape,
}

impl FrameList {
    /// Create a frame list.
    ///
    /// # Errors
    /// Returns `Error::NoFrames` if `frames` is empty and `Error::EmptyFrame`
    /// if `shape` has no pixels.
    pub fn new(frames: Vec<FrameRef>, shape: FrameShape) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::NoFrames);
        }
        if shape.pixel_count() == 0 {
            return Err(Error::EmptyFrame {
                rows: shape.rows,
                cols: shape.cols,
            });
        }
        Ok(Self { frames, shape })
    }

    /// Frame list addressing `count` slabs of one 3D dataset.
    ///
    /// # Errors
    /// Returns `Error::NoFrames` if `count` is zero and `Error::EmptyFrame`
    /// if `shape` has no pixels.
    pub fn slabs(count: usize, shape: FrameShape) -> Result<Self> {
        Self::new((0..count).map(FrameRef::Slab).collect(), shape)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Index of the last frame.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Resolve a frame index to its reference.
    ///
    /// # Errors
    /// Returns `Error::FrameOutOfRange` if `index` is not in the list.
    pub fn get(&self, index: usize) -> Result<&FrameRef> {
        self.frames.get(index).ok_or(Error::FrameOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameRef> {
        self.frames.iter()
    }

    /// Verify that a loaded frame has this list's shape.
    ///
    /// # Errors
    /// Returns `Error::ShapeMismatch` on a differing shape.
    pub fn check_shape(&self, frame: &Frame) -> Result<()> {
        let found = FrameShape::of(frame);
        if found == self.shape {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: self.shape.as_tuple(),
                found: found.as_tuple(),
            })
        }
    }
}

/// A backing store that can load single frames on demand.
///
/// Implementations must not hold the whole stack in memory; each call to
/// `load_frame` reads exactly one frame.
pub trait FrameSource {
    /// The frame list this source was indexed into.
    fn frames(&self) -> &FrameList;

    /// Load the frame at `index`.
    ///
    /// # Errors
    /// Returns `Error::FrameOutOfRange` for an index outside the frame list,
    /// or a source error if reading fails.
    fn load_frame(&self, index: usize) -> Result<Frame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_list_rejected() {
        let err = FrameList::new(Vec::new(), FrameShape::new(4, 4)).unwrap_err();
        assert!(matches!(err, Error::NoFrames));
        assert!(matches!(
            FrameList::slabs(0, FrameShape::new(4, 4)),
            Err(Error::NoFrames)
        ));
    }

    #[test]
    fn test_zero_extent_shape_rejected() {
        for shape in [FrameShape::new(0, 4), FrameShape::new(4, 0)] {
            let err = FrameList::slabs(3, shape).unwrap_err();
            assert!(matches!(err, Error::EmptyFrame { .. }));
        }
        let err = FrameList::new(
            vec![FrameRef::Dataset("/empty".to_string())],
            FrameShape::new(0, 0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyFrame { rows: 0, cols: 0 }));
    }

    #[test]
    fn test_slab_list_length_and_order() {
        let list = FrameList::slabs(7, FrameShape::new(3, 5)).unwrap();
        assert_eq!(list.len(), 7);
        assert_eq!(list.last_index(), 6);
        assert_eq!(list.get(0).unwrap(), &FrameRef::Slab(0));
        assert_eq!(list.get(6).unwrap(), &FrameRef::Slab(6));
    }

    #[test]
    fn test_get_out_of_range_is_error() {
        let list = FrameList::slabs(3, FrameShape::new(2, 2)).unwrap();
        let err = list.get(3).unwrap_err();
        assert!(matches!(err, Error::FrameOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_check_shape() {
        let list = FrameList::new(
            vec![FrameRef::Dataset("/a".to_string())],
            FrameShape::new(2, 3),
        )
        .unwrap();
        assert!(list.check_shape(&Frame::zeros((2, 3))).is_ok());
        let err = list.check_shape(&Frame::zeros((3, 2))).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: (2, 3),
                found: (3, 2)
            }
        ));
    }

    #[test]
    fn test_shape_from_dims() {
        assert_eq!(FrameShape::from_dims(&[4, 8]), Some(FrameShape::new(4, 8)));
        assert_eq!(FrameShape::from_dims(&[4]), None);
        assert_eq!(FrameShape::from_dims(&[1, 4, 8]), None);
    }

    #[test]
    fn test_frame_ref_display() {
        assert_eq!(FrameRef::Slab(12).to_string(), "[12, :, :]");
        assert_eq!(
            FrameRef::Dataset("/entry/data_000001".to_string()).to_string(),
            "/entry/data_000001"
        );
    }
}
