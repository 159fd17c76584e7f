//! Construction-time validation through the public entry points.

use fieldweave_compose::{EdlClip, SharedClip, SourceClip};
use fieldweave_core::{ColorSpace, ConfigIssue, EdlError, VideoDescriptor};
use fieldweave_timeline::{ClipRegistry, EdlConfig, EdlParser, Timeline};
use std::sync::Arc;

use crate::support::{descriptor, tagged_clips, write_edl};

const ZERO_LINE: &str = "0;0;0;0;0;0;0;0;0;0;0;0";

fn open(clips: Vec<SharedClip>, contents: &str, config: EdlConfig) -> Result<EdlClip, EdlError> {
    let path = write_edl(contents);
    let result = EdlClip::new(clips, &EdlConfig { path: path.clone(), ..config });
    let _ = std::fs::remove_file(&path);
    result
}

// ── EDL file handling ──────────────────────────────────────────

#[test]
fn reads_edl_from_configured_path() {
    let clip = open(
        tagged_clips(&[4]),
        "0;0;0;0;0;0;0;1;0;1;0;1\n",
        EdlConfig::default(),
    )
    .unwrap();
    assert_eq!(clip.timeline().len(), 1);
    assert_eq!(clip.descriptor().frame_count, 2);
}

#[test]
fn missing_file_is_an_open_error() {
    let config = EdlConfig::with_path(std::env::temp_dir().join("fieldweave-missing/edl.txt"));
    let err = EdlClip::new(tagged_clips(&[4]), &config).err().unwrap();
    assert!(matches!(err, EdlError::Open { .. }));
    assert!(err.to_string().contains("couldn't open edit decision list"));
}

#[test]
fn line_limit_applies_to_file() {
    let text = format!("{}\n{}\n", ZERO_LINE, ZERO_LINE);
    let err = open(tagged_clips(&[4]), &text, EdlConfig::default().line_limit(1))
        .err()
        .unwrap();
    assert!(matches!(err, EdlError::LimitExceeded { limit: 1 }));

    let clip = open(tagged_clips(&[4]), &text, EdlConfig::default().line_limit(2)).unwrap();
    assert_eq!(clip.descriptor().frame_count, 4);
}

#[test]
fn malformed_line_reports_its_number() {
    let text = format!("{}\n{}\n1;2;3\n", ZERO_LINE, ZERO_LINE);
    let err = open(tagged_clips(&[4]), &text, EdlConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, EdlError::Format { line: 3 }));
    assert_eq!(err.line(), Some(3));
}

// ── Clip validation ────────────────────────────────────────────

#[test]
fn nine_slots_by_default() {
    assert!(open(tagged_clips(&[2; 9]), ZERO_LINE, EdlConfig::default()).is_ok());

    let err = open(tagged_clips(&[2; 10]), ZERO_LINE, EdlConfig::default())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        EdlError::Config {
            issue: ConfigIssue::TooManyClips { max: 9 },
            clip: None
        }
    ));

    let more_slots = EdlConfig::default().max_clips(10);
    assert!(open(tagged_clips(&[2; 10]), ZERO_LINE, more_slots).is_ok());
}

#[test]
fn colorspace_mismatch_names_offending_clip() {
    let descriptors = vec![
        descriptor(4),
        descriptor(4),
        VideoDescriptor::new(16, 8, ColorSpace::Yv16, 4),
    ];
    let err = ClipRegistry::new(descriptors).unwrap_err();
    assert!(matches!(
        err,
        EdlError::Config {
            issue: ConfigIssue::ColorspaceMismatch,
            clip: Some(2)
        }
    ));
}

#[test]
fn clip_index_equal_to_clip_count_is_out_of_range() {
    let err = open(tagged_clips(&[4, 4]), "0;0;0;0;0;0;2;0;0;0;0;0", EdlConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, EdlError::ClipOutOfRange { clip: 2, count: 2 }));
}

#[test]
fn frame_index_equal_to_frame_count_is_out_of_range() {
    // 4 fields -> 2 frames
    let err = open(tagged_clips(&[4]), "0;0;0;0;0;0;0;0;0;2;0;0", EdlConfig::default())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        EdlError::FrameOutOfRange {
            frame: 2,
            clip: 0,
            bound: 2
        }
    ));
}

// ── Timeline built directly ────────────────────────────────────

#[test]
fn timeline_from_parser_and_registry() {
    let registry = ClipRegistry::new(vec![descriptor(5), descriptor(4)]).unwrap();
    assert_eq!(registry.frame_based_count(0), Some(3));
    assert_eq!(registry.frame_based_count(1), Some(2));

    let parsed = EdlParser::new(10)
        .parse(["0;2;1;1;0;2;1;1;0;2;1;1", "1;0;1;0;1;0;0;0;0;0;0;0"])
        .unwrap();
    let timeline = Timeline::build(parsed, &registry).unwrap();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.output_frame_count(), 4);
}

#[test]
fn composed_clip_is_usable_as_a_source() {
    let inner = open(tagged_clips(&[4]), ZERO_LINE, EdlConfig::default()).unwrap();
    let clips: Vec<SharedClip> = vec![Arc::new(inner)];
    let outer = open(clips, ZERO_LINE, EdlConfig::default()).unwrap();
    assert_eq!(outer.descriptor().frame_count, 2);
}
