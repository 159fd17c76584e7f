//! Host services the composer relies on.

use fieldweave_core::{bit_blt, Result, VideoDescriptor, VideoFrame};
use std::fmt;
use std::sync::Arc;

/// Frame allocation and memory copies supplied by the host application.
pub trait Host: Send + Sync {
    /// Allocate an output frame with the geometry of `descriptor`.
    fn new_video_frame(&self, descriptor: &VideoDescriptor) -> VideoFrame {
        VideoFrame::new(descriptor)
    }

    /// Copy `height` rows of `row_size` bytes between pitched buffers.
    fn bit_blt(
        &self,
        dst: &mut [u8],
        dst_pitch: usize,
        src: &[u8],
        src_pitch: usize,
        row_size: usize,
        height: usize,
    ) -> Result<()> {
        bit_blt(dst, dst_pitch, src, src_pitch, row_size, height)
    }
}

/// Plain CPU memory host.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuHost;

impl Host for CpuHost {}

/// Host handle passed explicitly into every operation that needs one.
#[derive(Clone)]
pub struct HostContext {
    host: Arc<dyn Host>,
}

impl HostContext {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Context backed by [`CpuHost`].
    pub fn cpu() -> Self {
        Self::new(Arc::new(CpuHost))
    }

    #[inline]
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::cpu()
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}
