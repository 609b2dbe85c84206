// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};

use crate::{Md5, Md5Error, digest};

#[test]
fn test_io_copy_matches_one_shot() {
    let msg: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

    let mut ctx = Md5::new();
    let copied = io::copy(&mut msg.as_slice(), &mut ctx).expect("Failed to copy(..)");
    assert_eq!(copied, msg.len() as u64);

    assert_eq!(ctx.finalize().expect("Failed to finalize()"), digest(&msg));
}

#[test]
fn test_write_after_finalize_is_io_error() {
    let mut ctx = Md5::new();
    ctx.finalize().expect("Failed to finalize()");

    let err = ctx.write(b"late").expect_err("write must fail");
    assert_eq!(err.kind(), io::ErrorKind::Other);

    let inner = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<Md5Error>())
        .copied();
    assert_eq!(inner, Some(Md5Error::UpdateAfterFinalize));
}

#[test]
fn test_flush_is_noop() {
    let mut ctx = Md5::new();
    ctx.write_all(b"abc").expect("Failed to write_all(..)");
    ctx.flush().expect("Failed to flush()");
    assert_eq!(ctx.finalize().expect("Failed to finalize()"), digest(b"abc"));
}
