//! Error types for FieldWeave.

use std::path::PathBuf;
use thiserror::Error;

/// Reason a set of input clips was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// No clip was supplied.
    NoClips,
    /// The reference clip is not planar YUV.
    NotPlanarYuv,
    /// The clip does not share the reference clip's colorspace.
    ColorspaceMismatch,
    /// The clip is not field-based.
    NotFieldBased,
    /// More clips than the configured number of slots.
    TooManyClips { max: usize },
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoClips => write!(f, "no clips have been provided"),
            Self::NotPlanarYuv => write!(f, "must be in planar YUV"),
            Self::ColorspaceMismatch => write!(f, "must be in same color space as #0"),
            Self::NotFieldBased => write!(f, "must be field-based"),
            Self::TooManyClips { max } => write!(f, "at most {} clips are accepted", max),
        }
    }
}

/// Main error type for FieldWeave operations.
#[derive(Error, Debug)]
pub enum EdlError {
    #[error("configuration error: {}", describe_config(.issue, .clip))]
    Config {
        issue: ConfigIssue,
        clip: Option<usize>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("couldn't open edit decision list {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wrong formatting in line #{line}")]
    Format { line: usize },

    #[error("field {field} in line #{line} does not fit a frame index")]
    FieldOverflow { line: usize, field: usize },

    #[error("amount of lines in provided log is above line limit ({limit})")]
    LimitExceeded { limit: usize },

    #[error("clip #{clip} is outside of allowed range [0;{count})")]
    ClipOutOfRange { clip: u32, count: usize },

    #[error("frame #{frame} is outside of clip #{clip} timeline, which is [0;{bound})")]
    FrameOutOfRange { frame: u32, clip: u32, bound: u32 },

    #[error("plane copy of {row_size}x{height} bytes exceeds buffer bounds")]
    BlitOutOfBounds { row_size: usize, height: usize },

    #[error("source clip error: {0}")]
    Source(String),

    #[error("internal error: {0}")]
    Internal(String),
}

fn describe_config(issue: &ConfigIssue, clip: &Option<usize>) -> String {
    match clip {
        Some(index) => format!("clip #{} {}", index, issue),
        None => issue.to_string(),
    }
}

impl EdlError {
    /// Shorthand for a configuration error tied to one clip.
    pub fn config(issue: ConfigIssue, clip: usize) -> Self {
        Self::Config {
            issue,
            clip: Some(clip),
        }
    }

    /// 1-based EDL line this error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line } | Self::FieldOverflow { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for FieldWeave operations.
pub type Result<T> = std::result::Result<T, EdlError>;
