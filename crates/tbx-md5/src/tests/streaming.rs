// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

use crate::consts::BLOCK_LEN;
use crate::{Md5, Phase, digest};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn hash_chunks(chunks: &[&[u8]]) -> [u8; 16] {
    let mut ctx = Md5::new();
    for chunk in chunks {
        ctx.update(chunk).expect("Failed to update(..)");
    }
    ctx.finalize().expect("Failed to finalize()")
}

#[test]
fn test_single_byte_chunks_match_one_shot() {
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 127, 128, 129, 200] {
        let msg = pattern(len);
        let chunks: Vec<&[u8]> = msg.chunks(1).collect();
        assert_eq!(hash_chunks(&chunks), digest(&msg), "len={len}");
    }
}

#[test]
fn test_every_two_way_split_matches_one_shot() {
    let msg = pattern(3 * BLOCK_LEN + 5);
    let expected = digest(&msg);

    for mid in 0..=msg.len() {
        let (a, b) = msg.split_at(mid);
        assert_eq!(hash_chunks(&[a, b]), expected, "split at {mid}");
    }
}

#[test]
fn test_chunks_straddling_block_boundary() {
    let msg = pattern(4 * BLOCK_LEN);
    let expected = digest(&msg);

    // 60 + 10 straddles the first boundary, 70 covers one full block
    // from an unaligned start, the tail finishes mid-block
    let (a, rest) = msg.split_at(60);
    let (b, rest) = rest.split_at(10);
    let (c, d) = rest.split_at(70);

    assert_eq!(hash_chunks(&[a, b, c, d]), expected);
}

#[test]
fn test_empty_updates_are_noops() {
    let msg = pattern(100);

    let mut ctx = Md5::new();
    ctx.update(&[]).expect("Failed to update(..)");
    assert_eq!(ctx.phase(), Phase::Fresh);
    assert_eq!(ctx.bytes_absorbed(), 0);

    ctx.update(&msg[..40]).expect("Failed to update(..)");
    ctx.update(&[]).expect("Failed to update(..)");
    ctx.update(&msg[40..]).expect("Failed to update(..)");

    assert_eq!(ctx.finalize().expect("Failed to finalize()"), digest(&msg));
}

#[test]
fn test_buffer_occupancy_stays_below_block() {
    let msg = pattern(1000);
    let mut ctx = Md5::new();
    let mut fed = 0usize;

    for size in [1, 62, 1, 64, 65, 127, 3, 200, 64, 0, 413] {
        ctx.update(&msg[fed..fed + size]).expect("Failed to update(..)");
        fed += size;

        assert!(ctx.buffered() < BLOCK_LEN);
        assert_eq!(ctx.buffered(), fed % BLOCK_LEN);
        assert_eq!(ctx.bytes_absorbed(), fed as u64);
    }
    assert_eq!(fed, msg.len());
}

#[test]
fn test_partial_block_is_not_compressed() {
    let mut ctx = Md5::new();
    let initial = ctx.chaining_values();

    ctx.update(&pattern(BLOCK_LEN - 1)).expect("Failed to update(..)");
    assert_eq!(ctx.chaining_values(), initial);

    ctx.update(&[0]).expect("Failed to update(..)");
    assert_ne!(ctx.chaining_values(), initial);
    assert_eq!(ctx.buffered(), 0);
}
