//! FieldWeave Timeline - EDL data model
//!
//! Turns an edit decision list into a frozen, validated timeline:
//! - Line parsing into per-field, per-plane frame mappings
//! - Input clip validation (colorspace, field-based, slot count)
//! - Cross-checking every mapping against clip bounds

pub mod config;
pub mod mapping;
pub mod parser;
pub mod registry;
pub mod timeline;

pub use config::EdlConfig;
pub use mapping::{ClipFrame, FieldPlanes, FrameMapping};
pub use parser::{EdlParser, ParsedEdl};
pub use registry::ClipRegistry;
pub use timeline::Timeline;
