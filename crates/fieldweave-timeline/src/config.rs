//! Construction-time options of a composed clip.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default EDL location, relative to the working directory.
pub const DEFAULT_PATH: &str = "edl.txt";

/// Default ceiling on accepted EDL lines.
pub const DEFAULT_LINE_LIMIT: usize = 100_000;

/// Default number of positional clip slots.
pub const DEFAULT_MAX_CLIPS: usize = 9;

/// Options recognized when building a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdlConfig {
    /// Filesystem path to the EDL file
    pub path: PathBuf,
    /// Maximum accepted line count
    pub line_limit: usize,
    /// Maximum number of input clips
    pub max_clips: usize,
}

impl Default for EdlConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            line_limit: DEFAULT_LINE_LIMIT,
            max_clips: DEFAULT_MAX_CLIPS,
        }
    }
}

impl EdlConfig {
    /// Default options reading the EDL from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Override the line limit.
    pub fn line_limit(mut self, line_limit: usize) -> Self {
        self.line_limit = line_limit;
        self
    }

    /// Override the number of clip slots.
    pub fn max_clips(mut self, max_clips: usize) -> Self {
        self.max_clips = max_clips;
        self
    }
}
