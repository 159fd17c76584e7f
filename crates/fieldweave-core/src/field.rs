//! Field parity and the arithmetic between frame-based and field-based indices.
//!
//! Source clips are field-based: every stored unit is one field. The EDL
//! addresses whole frames, so a frame-based index `f` covers the two fields
//! `2f` (top) and `2f + 1` (bottom).

use serde::{Deserialize, Serialize};

/// Round half up: `floor(x + 0.5)`.
///
/// Only meaningful for non-negative `x`; frame counts never go below zero.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Number of whole frames covered by `field_count` fields.
///
/// A trailing unpaired field still counts as a frame, so 5 fields give 3 frames.
#[inline]
pub fn frame_based_count(field_count: u32) -> u32 {
    round_half_up(f64::from(field_count) / 2.0) as u32
}

/// Field-based index of the field with `parity` inside frame `frame_based_index`.
#[inline]
pub fn source_field_frame(frame_based_index: u32, parity: Parity) -> u32 {
    frame_based_index * 2 + parity.index()
}

/// Which field of an interlaced frame pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// Top / even field
    Top,
    /// Bottom / odd field
    Bottom,
}

impl Parity {
    /// Both parities in output order.
    pub const ALL: [Parity; 2] = [Parity::Top, Parity::Bottom];

    /// Parity of output frame `n`.
    #[inline]
    pub fn of(n: u32) -> Self {
        if n % 2 == 0 {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    /// 0 for top, 1 for bottom.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }

    /// Split an output frame index into (mapping index, parity).
    #[inline]
    pub fn split(n: u32) -> (usize, Self) {
        ((n / 2) as usize, Self::of(n))
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}
