//! FieldWeave Compose - building output frames from an EDL timeline
//!
//! This crate handles:
//! - The host context (frame allocation and plane copies)
//! - The source clip interface and an in-memory clip
//! - Resolving output frames into per-plane source fields
//! - The composed clip that hosts pull frames from

pub mod clip;
pub mod composer;
pub mod edl_clip;
pub mod host;
pub mod memory;

pub use clip::{PlaneBuffer, SharedClip, SourceClip};
pub use composer::{plan_frame, FrameComposer, PlaneSource};
pub use edl_clip::EdlClip;
pub use host::{CpuHost, Host, HostContext};
pub use memory::MemoryClip;
