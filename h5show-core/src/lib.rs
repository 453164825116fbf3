//! h5show-core: Session model for lazy viewing of large detector frame stacks.
//!
//! This crate is independent of any storage backend or UI toolkit. It
//! provides frame references, the `FrameSource` abstraction, fixed display
//! scaling, the cursor probe, and the `Session` that drives both.
//!

pub mod error;
pub mod frame;
pub mod probe;
pub mod scale;
pub mod session;
pub mod volume;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use frame::{Frame, FrameList, FrameRef, FrameShape, FrameSource};
pub use probe::{clamp_to_pixel, probe, ProbeReading};
pub use scale::DisplayScale;
pub use session::{Session, ViewerEvents};
pub use volume::PlaceholderVolume;
