//! Viewer session state and the event interface that drives it.
//!
//! A `Session` owns everything the scroll and pointer handlers need: the
//! frame source, the fixed display scale, the current index and the current
//! slice buffer. UI layers forward their events through `ViewerEvents` and
//! read the results back from the session.

use crate::probe::{probe, ProbeReading};
use crate::{
    DisplayScale, Error, Frame, FrameList, FrameShape, FrameSource, PlaceholderVolume, Result,
};

/// Event handlers for a scroll-indexed image viewer.
pub trait ViewerEvents {
    /// The scroll position changed.
    ///
    /// `position` is rounded to the nearest frame index before loading.
    ///
    /// # Errors
    /// Returns an error if the position does not map to a frame or the frame
    /// cannot be read.
    fn on_scroll(&mut self, position: f64) -> Result<()>;

    /// The pointer moved to view coordinates `(x, y)`.
    ///
    /// Returns `None` while no slice is loaded.
    fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<ProbeReading>;
}

/// State of one viewing session over a single backing file.
pub struct Session<S: FrameSource> {
    source: S,
    name: String,
    scale: DisplayScale,
    volume: PlaceholderVolume,
    current_index: usize,
    slice: Option<Frame>,
    status: String,
    bounds_pending: bool,
}

impl<S: FrameSource> Session<S> {
    /// Start a session by loading the first frame.
    ///
    /// The first frame fixes the display scale for the lifetime of the
    /// session and becomes the initial slice.
    ///
    /// # Errors
    /// Returns an error if the first frame cannot be loaded.
    pub fn open(source: S, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let first = source.load_frame(0)?;
        source.frames().check_shape(&first)?;
        let scale = DisplayScale::from_frame(&first);
        let volume = PlaceholderVolume::new(source.frames().len());
        let status = format!("{name} 0");
        Ok(Self {
            source,
            name,
            scale,
            volume,
            current_index: 0,
            slice: Some(first),
            status,
            bounds_pending: true,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn frames(&self) -> &FrameList {
        self.source.frames()
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    #[must_use]
    pub fn volume(&self) -> PlaceholderVolume {
        self.volume
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The currently displayed slice, if the last load succeeded.
    #[must_use]
    pub fn slice(&self) -> Option<&Frame> {
        self.slice.as_ref()
    }

    /// Status label text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Frame extent to fit the view to, returned once after the first paint.
    pub fn take_bounds_autoset(&mut self) -> Option<FrameShape> {
        if !self.bounds_pending {
            return None;
        }
        let shape = self.slice.as_ref().map(FrameShape::of)?;
        self.bounds_pending = false;
        Some(shape)
    }

    /// Map a scroll position to a frame index.
    fn index_for(&self, position: f64) -> Result<usize> {
        let rounded = position.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return Err(Error::InvalidPosition(position));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = rounded as usize;
        let len = self.frames().len();
        if index >= len {
            return Err(Error::FrameOutOfRange { index, len });
        }
        Ok(index)
    }

    fn load(&mut self, index: usize) -> Result<()> {
        self.current_index = index;
        let loaded = self
            .source
            .load_frame(index)
            .and_then(|frame| self.source.frames().check_shape(&frame).map(|()| frame));
        match loaded {
            Ok(frame) => {
                self.slice = Some(frame);
                self.status = format!("{} {}", self.name, index);
                Ok(())
            }
            Err(e) => {
                self.slice = None;
                self.status = format!("{} {}: {e}", self.name, index);
                Err(e)
            }
        }
    }
}

impl<S: FrameSource> ViewerEvents for Session<S> {
    fn on_scroll(&mut self, position: f64) -> Result<()> {
        let index = self.index_for(position)?;
        self.load(index)
    }

    fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<ProbeReading> {
        let reading = probe(self.slice.as_ref()?, x, y)?;
        self.status = format!(
            "{} {} {:>4} {:>4}: {}",
            self.name, self.current_index, reading.x, reading.y, reading.value
        );
        Some(reading)
    }
}
