//! The frozen sequence of frame mappings.

use fieldweave_core::{EdlError, Parity, Result};
use std::io::BufRead;
use tracing::{info, warn};

use crate::config::EdlConfig;
use crate::mapping::FrameMapping;
use crate::parser::{EdlParser, ParsedEdl};
use crate::registry::ClipRegistry;

/// Validated mappings in output order. Immutable once built.
///
/// Mapping `i` produces output frames `2i` (top field) and `2i + 1`
/// (bottom field), so the output is always twice as long as the timeline.
#[derive(Debug, Clone)]
pub struct Timeline {
    mappings: Box<[FrameMapping]>,
    output_frame_count: u32,
}

impl Timeline {
    /// Cross-check parsed mappings against the clip registry and freeze them.
    pub fn build(parsed: ParsedEdl, registry: &ClipRegistry) -> Result<Self> {
        for mapping in &parsed.mappings {
            for source in mapping.pairs() {
                registry.check(source)?;
            }
        }

        let output_frame_count = parsed
            .mappings
            .len()
            .checked_mul(2)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(EdlError::LimitExceeded {
                limit: u32::MAX as usize / 2,
            })?;

        if parsed.mappings.is_empty() {
            warn!("edit decision list is empty, composed clip has no frames");
        }
        info!(
            clips = registry.len(),
            lines = parsed.line_count,
            output_frames = output_frame_count,
            "timeline built"
        );

        Ok(Self {
            mappings: parsed.mappings.into_boxed_slice(),
            output_frame_count,
        })
    }

    /// Parse an EDL from `reader` and validate it.
    pub fn from_reader<R: BufRead>(
        reader: R,
        line_limit: usize,
        registry: &ClipRegistry,
    ) -> Result<Self> {
        let parsed = EdlParser::new(line_limit).parse_reader(reader)?;
        Self::build(parsed, registry)
    }

    /// Open the EDL named by `config` and validate it.
    pub fn from_config(config: &EdlConfig, registry: &ClipRegistry) -> Result<Self> {
        let parsed = EdlParser::new(config.line_limit).parse_path(&config.path)?;
        Self::build(parsed, registry)
    }

    /// Number of mappings (EDL lines).
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Output frame count, `2 * len()`.
    pub fn output_frame_count(&self) -> u32 {
        self.output_frame_count
    }

    /// Mapping and field parity behind output frame `n`.
    ///
    /// An index past the end means the caller ignored the declared frame
    /// count; that is reported as an internal error.
    pub fn locate(&self, n: u32) -> Result<(&FrameMapping, Parity)> {
        let (index, parity) = Parity::split(n);
        let mapping = self.mappings.get(index).ok_or_else(|| {
            EdlError::Internal(format!(
                "output frame {} maps to line {} of a {}-line timeline",
                n,
                index + 1,
                self.len()
            ))
        })?;
        Ok((mapping, parity))
    }
}
