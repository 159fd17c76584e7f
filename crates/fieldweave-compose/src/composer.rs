//! Resolving output frames into plane copies.
//!
//! Output frame `n` is field `n mod 2` of timeline line `n / 2`. Each of its
//! Y, U and V planes is copied from the same-parity field of whichever clip
//! frame the line names for that plane.

use fieldweave_core::{
    source_field_frame, EdlError, Parity, Plane, Result, SharedVideoFrame, VideoDescriptor,
};
use fieldweave_timeline::Timeline;
use std::sync::Arc;
use tracing::trace;

use crate::clip::SharedClip;
use crate::host::HostContext;

/// Where one plane of an output frame is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneSource {
    pub plane: Plane,
    /// Index of the source clip
    pub clip: u32,
    /// Field-based index inside the source clip
    pub field_frame: u32,
}

/// Parity and per-plane sources of output frame `n` of `timeline`.
pub fn plan_frame(timeline: &Timeline, n: u32) -> Result<(Parity, [PlaneSource; 3])> {
    let (mapping, parity) = timeline.locate(n)?;
    let sources = Plane::ALL.map(|plane| {
        let source = mapping.select(parity, plane);
        PlaneSource {
            plane,
            clip: source.clip,
            field_frame: source_field_frame(source.frame, parity),
        }
    });
    Ok((parity, sources))
}

/// Stateless mapping from output frames to composed pixels.
///
/// Holds only immutable data, so frames can be composed from any number of
/// threads at once.
pub struct FrameComposer {
    clips: Vec<SharedClip>,
    timeline: Timeline,
    descriptor: VideoDescriptor,
}

impl FrameComposer {
    /// `clips` must be the clips the timeline was validated against, in order.
    pub fn new(clips: Vec<SharedClip>, timeline: Timeline, descriptor: VideoDescriptor) -> Self {
        Self {
            clips,
            timeline,
            descriptor,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Descriptor of composed frames.
    pub fn descriptor(&self) -> &VideoDescriptor {
        &self.descriptor
    }

    /// Parity and per-plane sources of output frame `n`, without fetching anything.
    pub fn plan(&self, n: u32) -> Result<(Parity, [PlaneSource; 3])> {
        plan_frame(&self.timeline, n)
    }

    /// Build output frame `n` in a freshly allocated frame.
    pub fn compose(&self, n: u32, ctx: &HostContext) -> Result<SharedVideoFrame> {
        let (parity, sources) = self.plan(n)?;
        let host = ctx.host();
        let mut dst = host.new_video_frame(&self.descriptor);

        for source in sources {
            let clip = self.clips.get(source.clip as usize).ok_or_else(|| {
                EdlError::Internal(format!("timeline references missing clip #{}", source.clip))
            })?;
            let src = clip.get_plane_buffer(source.field_frame, source.plane, ctx)?;
            let dst_plane = dst.plane_mut(source.plane).ok_or_else(|| {
                EdlError::Internal(format!("output frame has no {} plane", source.plane))
            })?;

            host.bit_blt(
                &mut dst_plane.data,
                dst_plane.pitch,
                &src.data,
                src.pitch,
                src.row_size,
                src.height,
            )?;
            trace!(
                frame = n,
                %parity,
                plane = %source.plane,
                clip = source.clip,
                field_frame = source.field_frame,
                "plane copied"
            );
        }

        Ok(Arc::new(dst))
    }
}
