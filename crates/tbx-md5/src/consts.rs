// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

/// MD5 output size in bytes
pub const DIGEST_LEN: usize = 16;

/// MD5 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Offset of the 64-bit length field inside the last block
pub(crate) const LEN_FIELD_OFFSET: usize = BLOCK_LEN - 8;

/// Initial chaining values A, B, C, D per RFC 1321 Section 3.3
pub(crate) const INIT_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Additive constants T[1..64] per RFC 1321 Section 3.4
pub(crate) const K: [u32; 64] = [
    // Round 1
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    // Round 2
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    // Round 3
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    // Round 4
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, one row per round, cycled every four steps
pub(crate) const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Message word X[k] consumed by each of the 64 steps
pub(crate) const MSG_INDEX: [u8; 64] = [
    // i
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    // (5i + 1) mod 16
    1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12,
    // (3i + 5) mod 16
    5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2,
    // 7i mod 16
    0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9,
];

/// A single 1 bit followed by zeros
pub(crate) const PADDING: [u8; BLOCK_LEN] = {
    let mut pad = [0u8; BLOCK_LEN];
    pad[0] = 0x80;
    pad
};
