//! FieldWeave Core - Foundation types for field-level clip composition
//!
//! This crate provides the fundamental types used throughout FieldWeave:
//! - Planes, colorspaces and video descriptors
//! - Frame buffers with pitch/row-size addressing and plane copies
//! - Field parity and frame-based/field-based index arithmetic
//! - The shared error type

pub mod error;
pub mod field;
pub mod frame;

pub use error::{ConfigIssue, EdlError, Result};
pub use field::{frame_based_count, round_half_up, source_field_frame, Parity};
pub use frame::{
    bit_blt, ColorSpace, FramePlane, Plane, SharedVideoFrame, VideoDescriptor, VideoFrame,
};
