//! Validation of the input clip set.

use fieldweave_core::{frame_based_count, ConfigIssue, EdlError, Result, VideoDescriptor};
use tracing::debug;

use crate::mapping::ClipFrame;

/// Validated input clip descriptors and their frame-based lengths.
///
/// Clip 0 is the reference: every other clip must share its colorspace.
#[derive(Debug, Clone)]
pub struct ClipRegistry {
    descriptors: Vec<VideoDescriptor>,
    frame_based_counts: Vec<u32>,
}

impl ClipRegistry {
    /// Validate `descriptors` without a cap on their number.
    pub fn new(descriptors: Vec<VideoDescriptor>) -> Result<Self> {
        Self::with_max_clips(descriptors, usize::MAX)
    }

    /// Validate `descriptors`, accepting at most `max_clips` of them.
    pub fn with_max_clips(descriptors: Vec<VideoDescriptor>, max_clips: usize) -> Result<Self> {
        let reference = descriptors.first().ok_or(EdlError::Config {
            issue: ConfigIssue::NoClips,
            clip: None,
        })?;
        if descriptors.len() > max_clips {
            return Err(EdlError::Config {
                issue: ConfigIssue::TooManyClips { max: max_clips },
                clip: None,
            });
        }
        if !reference.is_planar_yuv() {
            return Err(EdlError::config(ConfigIssue::NotPlanarYuv, 0));
        }
        for (i, descriptor) in descriptors.iter().enumerate() {
            if !descriptor.is_same_colorspace(reference) {
                return Err(EdlError::config(ConfigIssue::ColorspaceMismatch, i));
            }
            if !descriptor.field_based {
                return Err(EdlError::config(ConfigIssue::NotFieldBased, i));
            }
        }

        let frame_based_counts: Vec<u32> = descriptors
            .iter()
            .map(|d| frame_based_count(d.frame_count))
            .collect();
        debug!(clips = descriptors.len(), ?frame_based_counts, "clips validated");

        Ok(Self {
            descriptors,
            frame_based_counts,
        })
    }

    /// Number of clips; never zero.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor of clip 0.
    pub fn reference(&self) -> &VideoDescriptor {
        &self.descriptors[0]
    }

    pub fn descriptors(&self) -> &[VideoDescriptor] {
        &self.descriptors
    }

    /// Number of whole frames in `clip`.
    pub fn frame_based_count(&self, clip: usize) -> Option<u32> {
        self.frame_based_counts.get(clip).copied()
    }

    /// Check that `source` names an existing clip and a frame inside it.
    pub fn check(&self, source: ClipFrame) -> Result<()> {
        let bound = self
            .frame_based_count(source.clip as usize)
            .ok_or(EdlError::ClipOutOfRange {
                clip: source.clip,
                count: self.len(),
            })?;
        if source.frame >= bound {
            return Err(EdlError::FrameOutOfRange {
                frame: source.frame,
                clip: source.clip,
                bound,
            });
        }
        Ok(())
    }
}
