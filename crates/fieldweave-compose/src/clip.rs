//! The source clip interface.
//!
//! The composer only talks to clips through [`SourceClip`], so hosts plug in
//! their own decoders and tests plug in [`crate::MemoryClip`].

use fieldweave_core::{
    EdlError, FramePlane, Parity, Plane, Result, SharedVideoFrame, VideoDescriptor,
};
use std::ops::Deref;
use std::sync::Arc;

use crate::host::HostContext;

/// A clip that can hand out frames, parity and audio.
///
/// Implementations must tolerate concurrent calls for different frames.
pub trait SourceClip: Send + Sync {
    /// Video properties of the clip.
    fn descriptor(&self) -> &VideoDescriptor;

    /// Fetch stored unit `n` (a field for field-based clips).
    fn get_frame(&self, n: u32, ctx: &HostContext) -> Result<SharedVideoFrame>;

    /// Field parity of unit `n`.
    fn get_parity(&self, n: u32) -> Parity;

    /// Fill `buf` with `count` audio sample frames starting at `start`.
    fn get_audio(&self, buf: &mut [u8], start: u64, count: u64, ctx: &HostContext) -> Result<()>;

    /// Caching hint from the host; returns a hint-specific answer.
    fn set_cache_hints(&self, _hints: u32, _frame_range: i32) -> i32 {
        0
    }

    /// Fetch unit `n` restricted to `plane`.
    fn get_plane_buffer(&self, n: u32, plane: Plane, ctx: &HostContext) -> Result<PlaneBuffer> {
        PlaneBuffer::new(self.get_frame(n, ctx)?, plane)
    }
}

/// Shared handle to a source clip.
pub type SharedClip = Arc<dyn SourceClip>;

/// One plane of a fetched frame; keeps the frame alive.
#[derive(Debug, Clone)]
pub struct PlaneBuffer {
    frame: SharedVideoFrame,
    plane: Plane,
}

impl PlaneBuffer {
    /// Fails when `frame` has no such plane.
    pub fn new(frame: SharedVideoFrame, plane: Plane) -> Result<Self> {
        if frame.plane(plane).is_none() {
            return Err(EdlError::Source(format!(
                "frame has no {} plane",
                plane
            )));
        }
        Ok(Self { frame, plane })
    }
}

impl Deref for PlaneBuffer {
    type Target = FramePlane;

    fn deref(&self) -> &FramePlane {
        &self.frame.planes[self.plane.index()]
    }
}
