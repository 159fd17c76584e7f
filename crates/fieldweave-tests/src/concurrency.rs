//! Composition from many threads at once.

use fieldweave_compose::{EdlClip, HostContext, SourceClip};
use fieldweave_timeline::EdlConfig;
use rayon::prelude::*;
use std::io::Cursor;

use crate::support::tagged_clips;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn composed_clip_is_send_and_sync() {
    assert_send_sync::<EdlClip>();
    assert_send_sync::<HostContext>();
}

#[test]
fn parallel_composition_matches_sequential() {
    let text: String = (0..64)
        .map(|i| {
            let (a, b) = (i % 3, (i + 1) % 3);
            let (f, g) = (i % 5, (i * 7) % 5);
            format!("{a};{f};{b};{g};{a};{g};{b};{f};{a};{f};{b};{g}\n")
        })
        .collect();
    let clip = EdlClip::from_reader(
        tagged_clips(&[10, 10, 10]),
        Cursor::new(text),
        &EdlConfig::default(),
    )
    .unwrap();
    let ctx = HostContext::cpu();
    let total = clip.descriptor().frame_count;
    assert_eq!(total, 128);

    let sequential: Vec<_> = (0..total)
        .map(|n| clip.get_frame(n, &ctx).unwrap())
        .collect();
    let parallel: Vec<_> = (0..total)
        .into_par_iter()
        .map(|n| clip.get_frame(n, &ctx).unwrap())
        .collect();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s, p);
    }
}

#[test]
fn repeated_requests_recompute_identically() {
    let clip = EdlClip::from_reader(
        tagged_clips(&[4, 4]),
        Cursor::new("1;1;0;0;1;0;0;1;1;0;0;0"),
        &EdlConfig::default(),
    )
    .unwrap();
    let ctx = HostContext::cpu();

    let frames: Vec<_> = (0..32u32)
        .into_par_iter()
        .map(|i| clip.get_frame(i % 2, &ctx).unwrap())
        .collect();
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame, &frames[i % 2]);
    }
}
