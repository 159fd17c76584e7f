//! A source clip held entirely in memory.

use fieldweave_core::{
    EdlError, Parity, Plane, Result, SharedVideoFrame, VideoDescriptor, VideoFrame,
};
use std::sync::Arc;

use crate::clip::SourceClip;
use crate::host::HostContext;

/// Bytes per audio sample; audio is stored as 16-bit PCM.
const AUDIO_SAMPLE_BYTES: usize = 2;

/// Frames and audio kept in RAM.
///
/// Requests past the last frame return the last frame, the way most hosts
/// clamp out-of-range requests.
#[derive(Debug, Clone)]
pub struct MemoryClip {
    descriptor: VideoDescriptor,
    frames: Vec<SharedVideoFrame>,
    audio: Vec<i16>,
    first_field: Parity,
}

impl MemoryClip {
    /// Build from ready-made frames. The descriptor's frame count follows `frames`.
    pub fn new(descriptor: VideoDescriptor, frames: Vec<VideoFrame>) -> Self {
        let descriptor = descriptor.with_frame_count(frames.len() as u32);
        Self {
            descriptor,
            frames: frames.into_iter().map(Arc::new).collect(),
            audio: Vec::new(),
            first_field: Parity::Top,
        }
    }

    /// Allocate every frame from `descriptor` and fill each plane with `value(n, plane)`.
    pub fn filled(descriptor: VideoDescriptor, value: impl Fn(u32, Plane) -> u8) -> Self {
        let frames = (0..descriptor.frame_count)
            .map(|n| {
                let mut frame = VideoFrame::new(&descriptor);
                for plane in Plane::ALL {
                    if let Some(p) = frame.plane_mut(plane) {
                        p.fill(value(n, plane));
                    }
                }
                frame
            })
            .collect();
        Self::new(descriptor, frames)
    }

    /// Attach interleaved 16-bit PCM audio.
    pub fn with_audio(mut self, samples: Vec<i16>) -> Self {
        self.audio = samples;
        self
    }

    /// Parity of field 0.
    pub fn with_first_field(mut self, parity: Parity) -> Self {
        self.first_field = parity;
        self
    }
}

impl SourceClip for MemoryClip {
    fn descriptor(&self) -> &VideoDescriptor {
        &self.descriptor
    }

    fn get_frame(&self, n: u32, _ctx: &HostContext) -> Result<SharedVideoFrame> {
        let last = self
            .frames
            .len()
            .checked_sub(1)
            .ok_or_else(|| EdlError::Source("clip has no frames".to_string()))?;
        Ok(Arc::clone(&self.frames[(n as usize).min(last)]))
    }

    fn get_parity(&self, n: u32) -> Parity {
        match (self.first_field, Parity::of(n)) {
            (Parity::Top, parity) => parity,
            (Parity::Bottom, Parity::Top) => Parity::Bottom,
            (Parity::Bottom, Parity::Bottom) => Parity::Top,
        }
    }

    fn get_audio(&self, buf: &mut [u8], start: u64, count: u64, _ctx: &HostContext) -> Result<()> {
        let channels = usize::from(self.descriptor.audio_channels.max(1));
        let wanted = usize::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(channels * AUDIO_SAMPLE_BYTES))
            .ok_or_else(|| {
                EdlError::Source(format!("audio request of {} samples is too large", count))
            })?;
        if buf.len() < wanted {
            return Err(EdlError::Source(format!(
                "audio buffer holds {} bytes, {} needed",
                buf.len(),
                wanted
            )));
        }

        // Past the end of the stored audio is silence.
        let first = usize::try_from(start)
            .ok()
            .and_then(|n| n.checked_mul(channels))
            .unwrap_or(usize::MAX);
        let samples = self.audio.iter().skip(first).chain(std::iter::repeat(&0i16));
        for (chunk, sample) in buf[..wanted]
            .chunks_exact_mut(AUDIO_SAMPLE_BYTES)
            .zip(samples)
        {
            chunk.copy_from_slice(&sample.to_le_bytes());
        }
        Ok(())
    }
}
