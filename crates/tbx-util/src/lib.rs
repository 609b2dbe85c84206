// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! Word conversions and zeroization helpers shared by tbx crates.
//!
//! Conversion functions wipe their source after reading so decoded message
//! words and serialized state do not linger in two places at once. Wiping goes
//! through [`zeroize`], whose writes are not elided by the optimizer.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(test)]
mod tests;

use zeroize::Zeroize;

/// Generates a `{type}_from_le` function that wipes the source bytes.
macro_rules! impl_from_le {
    ($type:ty, $size:expr, $fn_from:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " little-endian bytes into a `", stringify!($type), "`, zeroizing the source bytes.")]
        ///
        /// The integer is assembled with shifts, byte by byte, so no
        /// intermediate copy of the source array is made.
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
            }
            bytes.zeroize();
        }
    };
}

/// Generates a `{type}_to_le` function that wipes the source integer.
macro_rules! impl_to_le {
    ($type:ty, $size:expr, $fn_to:ident) => {
        #[doc = concat!("Writes a `", stringify!($type), "` as little-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            src.zeroize();
        }
    };
}

// Message words in, chaining values out
impl_from_le!(u32, 4, u32_from_le);
impl_to_le!(u32, 4, u32_to_le);

// Bit-length field
impl_to_le!(u64, 8, u64_to_le);

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use tbx_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics on odd length or on a non-hex character. Test helper only.
///
/// # Example
///
/// ```
/// use tbx_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string: {hex:?}");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Renders bytes as lowercase hexadecimal. Test helper only.
///
/// # Example
///
/// ```
/// use tbx_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xd4, 0x1d, 0x8c]), "d41d8c");
/// ```
#[cfg(feature = "test-utils")]
pub fn bytes_to_hex(bytes: &[u8]) -> alloc::string::String {
    use core::fmt::Write;

    let mut out = alloc::string::String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing into a String cannot fail
        let _ = write!(out, "{byte:02x}");
    }
    out
}
