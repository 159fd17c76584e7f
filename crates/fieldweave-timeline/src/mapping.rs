//! Frame mappings: where each field and plane of an output frame comes from.

use fieldweave_core::{Parity, Plane};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clip index and a frame-based index inside that clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipFrame {
    pub clip: u32,
    pub frame: u32,
}

impl ClipFrame {
    #[inline]
    pub const fn new(clip: u32, frame: u32) -> Self {
        Self { clip, frame }
    }
}

/// Sources of the Y, U and V planes of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPlanes {
    pub y: ClipFrame,
    pub u: ClipFrame,
    pub v: ClipFrame,
}

impl FieldPlanes {
    #[inline]
    pub fn get(&self, plane: Plane) -> ClipFrame {
        match plane {
            Plane::Y => self.y,
            Plane::U => self.u,
            Plane::V => self.v,
        }
    }
}

/// One EDL line: per-plane sources for the top and bottom output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameMapping {
    pub top: FieldPlanes,
    pub bottom: FieldPlanes,
}

impl FrameMapping {
    /// Integers per EDL line.
    pub const FIELD_COUNT: usize = 12;

    /// (clip, frame) pairs per EDL line.
    pub const PAIR_COUNT: usize = 6;

    /// Build from the 12 integers of a line, in file order.
    pub fn from_fields(f: [u32; Self::FIELD_COUNT]) -> Self {
        Self {
            top: FieldPlanes {
                y: ClipFrame::new(f[0], f[1]),
                u: ClipFrame::new(f[2], f[3]),
                v: ClipFrame::new(f[4], f[5]),
            },
            bottom: FieldPlanes {
                y: ClipFrame::new(f[6], f[7]),
                u: ClipFrame::new(f[8], f[9]),
                v: ClipFrame::new(f[10], f[11]),
            },
        }
    }

    /// Plane sources of one field.
    #[inline]
    pub fn field(&self, parity: Parity) -> &FieldPlanes {
        match parity {
            Parity::Top => &self.top,
            Parity::Bottom => &self.bottom,
        }
    }

    /// Source of `plane` in the field with `parity`.
    #[inline]
    pub fn select(&self, parity: Parity, plane: Plane) -> ClipFrame {
        self.field(parity).get(plane)
    }

    /// Pair at `offset = parity * 3 + plane`: 0-2 are top Y/U/V, 3-5 bottom Y/U/V.
    pub fn pair(&self, offset: usize) -> Option<ClipFrame> {
        if offset >= Self::PAIR_COUNT {
            return None;
        }
        let parity = Parity::ALL[offset / 3];
        let plane = Plane::ALL[offset % 3];
        Some(self.select(parity, plane))
    }

    /// All six pairs in line order.
    pub fn pairs(&self) -> impl Iterator<Item = ClipFrame> + '_ {
        Parity::ALL
            .into_iter()
            .flat_map(move |parity| Plane::ALL.into_iter().map(move |plane| self.select(parity, plane)))
    }
}

/// Formats the mapping as an EDL line.
impl fmt::Display for FrameMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{};{}", pair.clip, pair.frame)?;
        }
        Ok(())
    }
}
