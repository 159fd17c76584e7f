//! Frame buffer types for planar video frames in CPU memory.
//!
//! Planes are addressed the way hosts hand them out: a byte buffer plus a
//! pitch (stride between rows), a row size (meaningful bytes per row) and a
//! height in rows.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

use crate::error::{EdlError, Result};

/// One color channel of a planar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    /// Luma
    Y,
    /// Blue-difference chroma
    U,
    /// Red-difference chroma
    V,
}

impl Plane {
    /// Planes in composition order.
    pub const ALL: [Plane; 3] = [Plane::Y, Plane::U, Plane::V];

    /// Position of the plane inside a frame (Y = 0, U = 1, V = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Y => 0,
            Self::U => 1,
            Self::V => 2,
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Y => write!(f, "Y"),
            Self::U => write!(f, "U"),
            Self::V => write!(f, "V"),
        }
    }
}

/// Colorspace tag of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// YUV 4:2:0 planar, V before U in memory
    Yv12,
    /// YUV 4:2:0 planar
    I420,
    /// YUV 4:2:2 planar
    Yv16,
    /// YUV 4:4:4 planar
    Yv24,
    /// YUV 4:1:1 planar
    Yv411,
    /// YUV 4:2:2 packed
    Yuy2,
    /// 8-bit BGR packed
    Rgb24,
    /// 8-bit BGRA packed
    Rgb32,
}

impl ColorSpace {
    /// Whether samples live in separate planes.
    pub fn is_planar(self) -> bool {
        matches!(
            self,
            Self::Yv12 | Self::I420 | Self::Yv16 | Self::Yv24 | Self::Yv411
        )
    }

    /// Whether this is a YUV family colorspace.
    pub fn is_yuv(self) -> bool {
        !matches!(self, Self::Rgb24 | Self::Rgb32)
    }

    /// Number of planes for this colorspace.
    pub fn plane_count(self) -> usize {
        if self.is_planar() {
            3
        } else {
            1
        }
    }

    /// Bytes per pixel of the first plane.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Yuy2 => 2,
            Self::Rgb24 => 3,
            Self::Rgb32 => 4,
            _ => 1,
        }
    }

    /// Horizontal and vertical chroma subsampling as log2 shifts.
    pub fn chroma_shift(self) -> (u32, u32) {
        match self {
            Self::Yv12 | Self::I420 => (1, 1),
            Self::Yv16 => (1, 0),
            Self::Yv411 => (2, 0),
            Self::Yv24 | Self::Yuy2 | Self::Rgb24 | Self::Rgb32 => (0, 0),
        }
    }
}

/// Video properties of a clip as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels (of one field for field-based clips)
    pub height: u32,
    /// Colorspace tag
    pub color_space: ColorSpace,
    /// Number of stored units; fields for field-based clips
    pub frame_count: u32,
    /// Each stored unit is one field
    pub field_based: bool,
    #[serde(default = "default_fps_numerator")]
    pub fps_numerator: u32,
    #[serde(default = "default_fps_denominator")]
    pub fps_denominator: u32,
    /// Audio sample rate in Hz, 0 when the clip has no audio
    #[serde(default)]
    pub audio_sample_rate: u32,
    #[serde(default)]
    pub audio_channels: u16,
}

fn default_fps_numerator() -> u32 {
    50
}

fn default_fps_denominator() -> u32 {
    1
}

impl VideoDescriptor {
    /// Create a field-based descriptor without audio.
    pub fn new(width: u32, height: u32, color_space: ColorSpace, frame_count: u32) -> Self {
        Self {
            width,
            height,
            color_space,
            frame_count,
            field_based: true,
            fps_numerator: default_fps_numerator(),
            fps_denominator: default_fps_denominator(),
            audio_sample_rate: 0,
            audio_channels: 0,
        }
    }

    pub fn is_planar_yuv(&self) -> bool {
        self.color_space.is_planar() && self.color_space.is_yuv()
    }

    pub fn is_same_colorspace(&self, other: &Self) -> bool {
        self.color_space == other.color_space
    }

    /// Copy of this descriptor with another frame count.
    pub fn with_frame_count(&self, frame_count: u32) -> Self {
        Self {
            frame_count,
            ..self.clone()
        }
    }

    /// Row size in bytes and height in rows of `plane`, if the colorspace has it.
    pub fn plane_geometry(&self, plane: Plane) -> Option<(usize, usize)> {
        if plane.index() >= self.color_space.plane_count() {
            return None;
        }
        let width = self.width as usize;
        let height = self.height as usize;
        match plane {
            Plane::Y => Some((width * self.color_space.bytes_per_pixel(), height)),
            Plane::U | Plane::V => {
                let (sx, sy) = self.color_space.chroma_shift();
                Some((width >> sx, height >> sy))
            }
        }
    }
}

/// A plane of pixel data with pitch information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlane {
    /// Raw pixel data
    pub data: Vec<u8>,
    /// Bytes between the starts of consecutive rows
    pub pitch: usize,
    /// Meaningful bytes per row
    pub row_size: usize,
    /// Height in rows
    pub height: usize,
}

impl FramePlane {
    /// Create a zeroed plane.
    pub fn new(row_size: usize, height: usize) -> Self {
        // Align pitch to 64 bytes for SIMD compatibility
        let pitch = (row_size + 63) & !63;
        Self {
            data: vec![0u8; pitch * height],
            pitch,
            row_size,
            height,
        }
    }

    /// Get a row of pixel data.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.pitch;
        &self.data[start..start + self.row_size]
    }

    /// Get a mutable row of pixel data.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.pitch;
        &mut self.data[start..start + self.row_size]
    }

    /// Set every meaningful byte to `value`.
    pub fn fill(&mut self, value: u8) {
        for y in 0..self.height {
            self.row_mut(y).fill(value);
        }
    }

    /// Copy `src` into this plane using the source's row size and height.
    pub fn copy_from(&mut self, src: &FramePlane) -> Result<()> {
        bit_blt(
            &mut self.data,
            self.pitch,
            &src.data,
            src.pitch,
            src.row_size,
            src.height,
        )
    }
}

/// Copy `height` rows of `row_size` bytes between two pitched buffers.
pub fn bit_blt(
    dst: &mut [u8],
    dst_pitch: usize,
    src: &[u8],
    src_pitch: usize,
    row_size: usize,
    height: usize,
) -> Result<()> {
    if height == 0 || row_size == 0 {
        return Ok(());
    }
    let fits = |len: usize, pitch: usize| {
        row_size <= pitch && (height - 1) * pitch + row_size <= len
    };
    if !fits(src.len(), src_pitch) || !fits(dst.len(), dst_pitch) {
        return Err(EdlError::BlitOutOfBounds { row_size, height });
    }

    for y in 0..height {
        let s = y * src_pitch;
        let d = y * dst_pitch;
        dst[d..d + row_size].copy_from_slice(&src[s..s + row_size]);
    }
    Ok(())
}

/// A video frame in CPU memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    /// Pixel data planes (1 for packed, 3 for planar)
    pub planes: SmallVec<[FramePlane; 3]>,
}

impl VideoFrame {
    /// Allocate a zeroed frame matching `descriptor`.
    pub fn new(descriptor: &VideoDescriptor) -> Self {
        let planes = Plane::ALL
            .iter()
            .filter_map(|&plane| descriptor.plane_geometry(plane))
            .map(|(row_size, height)| FramePlane::new(row_size, height))
            .collect();
        Self { planes }
    }

    /// Get a plane, if the frame has it.
    #[inline]
    pub fn plane(&self, plane: Plane) -> Option<&FramePlane> {
        self.planes.get(plane.index())
    }

    /// Get a plane mutably.
    #[inline]
    pub fn plane_mut(&mut self, plane: Plane) -> Option<&mut FramePlane> {
        self.planes.get_mut(plane.index())
    }
}

/// Arc-wrapped frame for shared ownership.
pub type SharedVideoFrame = Arc<VideoFrame>;
