// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! MD5 message digest with secure memory handling
//!
//! Streaming implementation per RFC 1321. Input may be fed in any number of
//! chunks of any size; the digest is identical to hashing the concatenation in
//! one call. Chaining values, message words and buffered input are zeroized
//! when the digest is produced and again when the context is dropped.
//!
//! MD5 is provided for interoperability with existing checksums. It offers no
//! collision resistance and must not be used for authentication.
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>
//!
//! ```
//! let digest = tbx_md5::digest(b"abc");
//! assert_eq!(digest[..4], [0x90, 0x01, 0x50, 0x98]);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
#[cfg(feature = "std")]
mod io;
mod md5;
mod word32;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use error::Md5Error;
pub use md5::{Md5, Phase, compress_block};

/// MD5 digest of a complete message.
///
/// Equivalent to [`Md5::new`], one [`Md5::update`] and [`Md5::finalize`].
/// The context is wiped before returning.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    digest_into(data, &mut out);
    out
}

/// MD5 digest of a complete message, written into `out`.
///
/// # Arguments
/// * `data` - Input message (arbitrary length)
/// * `out` - Output digest (16 bytes)
pub fn digest_into(data: &[u8], out: &mut [u8; DIGEST_LEN]) {
    let mut ctx = Md5::new();
    ctx.absorb_message(data);
    ctx.finish(out);
}
