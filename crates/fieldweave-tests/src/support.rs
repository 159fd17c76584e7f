//! Shared fixtures: clips whose pixels say where they came from.

use fieldweave_compose::{MemoryClip, SharedClip};
use fieldweave_core::{ColorSpace, Parity, Plane, VideoDescriptor};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const WIDTH: u32 = 16;
pub const HEIGHT: u32 = 8;

/// Byte stored in every sample of `plane` of field `field` in clip `clip`.
pub fn tag(clip: u32, field: u32, plane: Plane) -> u8 {
    (clip * 40 + field * 3 + plane.index() as u32) as u8
}

pub fn descriptor(fields: u32) -> VideoDescriptor {
    VideoDescriptor::new(WIDTH, HEIGHT, ColorSpace::Yv12, fields)
}

/// A tagged clip with `fields` fields.
pub fn tagged_clip(clip: u32, fields: u32) -> MemoryClip {
    MemoryClip::filled(descriptor(fields), move |field, plane| tag(clip, field, plane))
}

/// Tagged clips, one per entry of `fields`.
pub fn tagged_clips(fields: &[u32]) -> Vec<SharedClip> {
    fields
        .iter()
        .enumerate()
        .map(|(i, &n)| Arc::new(tagged_clip(i as u32, n)) as SharedClip)
        .collect()
}

/// Bottom-field-first clip with mono audio `0, 1, 2, ...`.
pub fn audio_clip(fields: u32, samples: usize) -> MemoryClip {
    let mut desc = descriptor(fields);
    desc.audio_sample_rate = 48_000;
    desc.audio_channels = 1;
    MemoryClip::filled(desc, |_, _| 0)
        .with_audio((0..samples as i16).collect())
        .with_first_field(Parity::Bottom)
}

/// Write `contents` to a fresh file under the system temp directory.
pub fn write_edl(contents: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "fieldweave-{}-{}.txt",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::write(&path, contents).expect("write temp EDL");
    path
}
