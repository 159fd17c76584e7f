//! The composed clip handed back to the host.

use fieldweave_core::{Parity, Result, SharedVideoFrame, VideoDescriptor};
use fieldweave_timeline::{ClipRegistry, EdlConfig, EdlParser, ParsedEdl, Timeline};
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info};

use crate::clip::{SharedClip, SourceClip};
use crate::composer::FrameComposer;
use crate::host::HostContext;

/// A virtual clip stitched together field by field from up to nine sources.
///
/// Construction parses and validates everything up front; afterwards the
/// clip is read-only. Parity and audio come from clip 0 unchanged.
pub struct EdlClip {
    composer: FrameComposer,
    child: SharedClip,
}

impl EdlClip {
    /// Read the EDL at `config.path` and validate it against `clips`.
    pub fn new(clips: Vec<SharedClip>, config: &EdlConfig) -> Result<Self> {
        let parsed = EdlParser::new(config.line_limit).parse_path(&config.path)?;
        Self::from_parsed(clips, parsed, config.max_clips)
    }

    /// Like [`EdlClip::new`] but reads the EDL from `reader`.
    pub fn from_reader<R: BufRead>(
        clips: Vec<SharedClip>,
        reader: R,
        config: &EdlConfig,
    ) -> Result<Self> {
        let parsed = EdlParser::new(config.line_limit).parse_reader(reader)?;
        Self::from_parsed(clips, parsed, config.max_clips)
    }

    fn from_parsed(clips: Vec<SharedClip>, parsed: ParsedEdl, max_clips: usize) -> Result<Self> {
        let descriptors = clips.iter().map(|c| c.descriptor().clone()).collect();
        let registry = ClipRegistry::with_max_clips(descriptors, max_clips)?;
        let timeline = Timeline::build(parsed, &registry)?;
        let descriptor = registry
            .reference()
            .with_frame_count(timeline.output_frame_count());

        info!(
            clips = clips.len(),
            frames = descriptor.frame_count,
            "EDL clip ready"
        );

        let child = Arc::clone(&clips[0]);
        Ok(Self {
            composer: FrameComposer::new(clips, timeline, descriptor),
            child,
        })
    }

    pub fn composer(&self) -> &FrameComposer {
        &self.composer
    }

    pub fn timeline(&self) -> &Timeline {
        self.composer.timeline()
    }
}

impl SourceClip for EdlClip {
    /// Clip 0's descriptor with the frame count set to twice the EDL length.
    fn descriptor(&self) -> &VideoDescriptor {
        self.composer.descriptor()
    }

    fn get_frame(&self, n: u32, ctx: &HostContext) -> Result<SharedVideoFrame> {
        debug!(frame = n, "composing frame");
        self.composer.compose(n, ctx)
    }

    fn get_parity(&self, n: u32) -> Parity {
        self.child.get_parity(n)
    }

    fn get_audio(&self, buf: &mut [u8], start: u64, count: u64, ctx: &HostContext) -> Result<()> {
        self.child.get_audio(buf, start, count, ctx)
    }

    /// Composed frames are never cached here.
    fn set_cache_hints(&self, _hints: u32, _frame_range: i32) -> i32 {
        0
    }
}
