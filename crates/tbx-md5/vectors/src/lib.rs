// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! Known-answer vectors for MD5 backends.
//!
//! References:
//! [1] RFC 1321, Appendix A.5 - Test suite
//!     https://datatracker.ietf.org/doc/html/rfc1321#appendix-A.5
//!
//! Boundary digests were produced with an independent MD5 implementation.
//! Lengths 55/56, 63/64/65 and 119/120 sit on each side of the point where the
//! padding no longer fits in the current block.

use tbx_util::{bytes_to_hex, hex_to_bytes};

/// Message given verbatim
#[derive(Debug, Clone, Copy)]
pub struct MessageVector {
    /// Short description used in failure output
    pub name: &'static str,
    /// Input message
    pub msg: &'static [u8],
    /// Expected digest, lowercase hex
    pub digest: &'static str,
}

/// Message made of `len` copies of `fill`
#[derive(Debug, Clone, Copy)]
pub struct RepeatVector {
    /// Repeated byte
    pub fill: u8,
    /// Message length in bytes
    pub len: usize,
    /// Expected digest, lowercase hex
    pub digest: &'static str,
}

impl RepeatVector {
    /// Materialize the message
    pub fn message(&self) -> Vec<u8> {
        vec![self.fill; self.len]
    }
}

/// RFC 1321 Appendix A.5 test suite, plus one widely published pangram
pub const RFC1321_VECTORS: &[MessageVector] = &[
    MessageVector {
        name: "empty",
        msg: b"",
        digest: "d41d8cd98f00b204e9800998ecf8427e",
    },
    MessageVector {
        name: "a",
        msg: b"a",
        digest: "0cc175b9c0f1b6a831c399e269772661",
    },
    MessageVector {
        name: "abc",
        msg: b"abc",
        digest: "900150983cd24fb0d6963f7d28e17f72",
    },
    MessageVector {
        name: "message digest",
        msg: b"message digest",
        digest: "f96b697d7cb7938d525a2f31aaf161d0",
    },
    MessageVector {
        name: "alphabet",
        msg: b"abcdefghijklmnopqrstuvwxyz",
        digest: "c3fcd3d76192e4007dfb496cca67e13b",
    },
    MessageVector {
        name: "alphanumeric",
        msg: b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        digest: "d174ab98d277d9f5a5611c2c9f419d9f",
    },
    MessageVector {
        name: "digits x8",
        msg: b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        digest: "57edf4a22be3c955ac49da2e2107b67a",
    },
    MessageVector {
        name: "quick brown fox",
        msg: b"The quick brown fox jumps over the lazy dog",
        digest: "9e107d9d372bb6826bd81d3542a419d6",
    },
];

/// Runs of `'a'` around the padding boundaries
pub const BOUNDARY_VECTORS: &[RepeatVector] = &[
    RepeatVector {
        fill: b'a',
        len: 55,
        digest: "ef1772b6dff9a122358552954ad0df65",
    },
    RepeatVector {
        fill: b'a',
        len: 56,
        digest: "3b0c8ac703f828b04c6c197006d17218",
    },
    RepeatVector {
        fill: b'a',
        len: 57,
        digest: "652b906d60af96844ebd21b674f35e93",
    },
    RepeatVector {
        fill: b'a',
        len: 63,
        digest: "b06521f39153d618550606be297466d5",
    },
    RepeatVector {
        fill: b'a',
        len: 64,
        digest: "014842d480b571495a4a0363793f7367",
    },
    RepeatVector {
        fill: b'a',
        len: 65,
        digest: "c743a45e0d2e6a95cb859adae0248435",
    },
    RepeatVector {
        fill: b'a',
        len: 119,
        digest: "8a7bd0732ed6a28ce75f6dabc90e1613",
    },
    RepeatVector {
        fill: b'a',
        len: 120,
        digest: "5f61c0ccad4cac44c75ff505e1f1e537",
    },
    RepeatVector {
        fill: b'a',
        len: 128,
        digest: "e510683b3f5ffe4093d021808bc6ff70",
    },
];

/// One million `'a'`, the long-message vector shared with the SHA test suites
pub const MILLION_A: RepeatVector = RepeatVector {
    fill: b'a',
    len: 1_000_000,
    digest: "7707d6ae4e027c70eea2a935c2296f21",
};

/// Run every vector through `hash`, panicking with a diff on the first
/// mismatch. Returns the number of vectors checked.
pub fn run_vectors<F>(mut hash: F) -> usize
where
    F: FnMut(&[u8]) -> [u8; 16],
{
    let mut checked = 0;

    for v in RFC1321_VECTORS {
        check(v.name, &hash(v.msg), v.digest);
        checked += 1;
    }

    for v in BOUNDARY_VECTORS {
        let msg = v.message();
        check(&format!("{} x {:#04x}", v.len, v.fill), &hash(&msg), v.digest);
        checked += 1;
    }

    checked
}

fn check(name: &str, got: &[u8; 16], expected_hex: &str) {
    let expected = hex_to_bytes(expected_hex);
    assert_eq!(
        got.as_slice(),
        expected.as_slice(),
        "MD5 mismatch for {name}: got {}, expected {expected_hex}",
        bytes_to_hex(got)
    );
}
