//! In-memory frame source for unit tests.

use std::cell::Cell;

use crate::{Error, Frame, FrameList, FrameShape, FrameSource, Result};

/// Holds every frame in memory and counts loads.
pub struct MemorySource {
    list: FrameList,
    frames: Vec<Frame>,
    pub loads: Cell<usize>,
    pub fail_at: Option<usize>,
}

impl MemorySource {
    /// `count` frames of `rows x cols`, frame `i` filled with `i + 1`.
    #[allow(clippy::cast_precision_loss)]
    pub fn constant_frames(count: usize, rows: usize, cols: usize) -> Self {
        let frames = (0..count)
            .map(|i| Frame::from_elem((rows, cols), (i + 1) as f64))
            .collect();
        Self::from_frames(frames, FrameShape::new(rows, cols))
    }

    pub fn from_frames(frames: Vec<Frame>, shape: FrameShape) -> Self {
        let list = FrameList::slabs(frames.len(), shape).unwrap();
        Self {
            list,
            frames,
            loads: Cell::new(0),
            fail_at: None,
        }
    }
}

impl FrameSource for MemorySource {
    fn frames(&self) -> &FrameList {
        &self.list
    }

    fn load_frame(&self, index: usize) -> Result<Frame> {
        self.list.get(index)?;
        self.loads.set(self.loads.get() + 1);
        if self.fail_at == Some(index) {
            return Err(Error::Source("simulated read failure".into()));
        }
        Ok(self.frames[index].clone())
    }
}
