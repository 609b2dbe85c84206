// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! MD5 streaming context per RFC 1321 Section 3

use core::fmt;

use tbx_util::u64_to_le;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_LEN, DIGEST_LEN, INIT_STATE, K, LEN_FIELD_OFFSET, MSG_INDEX, PADDING, SHIFTS,
};
use crate::error::Md5Error;
use crate::word32::{RoundFn, Word32};

/// Lifecycle of an [`Md5`] context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no bytes fed yet
    Fresh,
    /// At least one non-empty `update` accepted
    Absorbing,
    /// Digest produced; the context no longer accepts input
    Finalized,
}

/// MD5 streaming context.
///
/// All sensitive working variables live in the struct so they are wiped
/// together: once on finalization and again on drop.
///
/// ```
/// use tbx_md5::Md5;
///
/// let mut ctx = Md5::new();
/// ctx.update(b"message ")?;
/// ctx.update(b"digest")?;
/// let digest = ctx.finalize()?;
///
/// assert_eq!(digest, tbx_md5::digest(b"message digest"));
/// assert!(ctx.update(b"more").is_err());
/// # Ok::<(), tbx_md5::Md5Error>(())
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Md5 {
    // Chaining values A, B, C, D
    state: [Word32; 4],

    // Working registers per RFC 1321 Section 3.4
    wv: [Word32; 4],

    // Message words X[0..15] of the block being compressed
    x: [Word32; 16],

    // Step temporary
    scratch: Word32,

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    tmp_block: [u8; BLOCK_LEN],
    tmp_word: [u8; 4],
    buffer_len: usize,
    total_len: u64,

    #[zeroize(skip)]
    phase: Phase,
}

impl Md5 {
    /// Create a fresh context initialized with the RFC 1321 chaining values
    pub fn new() -> Self {
        Self {
            state: core::array::from_fn(|i| Word32::new(INIT_STATE[i])),
            wv: core::array::from_fn(|_| Word32::zero()),
            x: core::array::from_fn(|_| Word32::zero()),
            scratch: Word32::zero(),
            buffer: [0u8; BLOCK_LEN],
            tmp_block: [0u8; BLOCK_LEN],
            tmp_word: [0u8; 4],
            buffer_len: 0,
            total_len: 0,
            phase: Phase::Fresh,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the digest has already been produced
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Message bytes fed so far.
    ///
    /// Reads zero once the context has been finalized and wiped.
    pub fn bytes_absorbed(&self) -> u64 {
        self.total_len
    }

    /// Append `data` to the message.
    ///
    /// Any chunking of the same bytes yields the same digest. An empty slice
    /// is a no-op.
    ///
    /// # Errors
    /// Returns [`Md5Error::UpdateAfterFinalize`] if the context is finalized.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Md5Error> {
        if self.is_finalized() {
            return Err(Md5Error::UpdateAfterFinalize);
        }

        self.absorb_message(data);
        Ok(())
    }

    /// Finish the message and return the 16-byte digest.
    ///
    /// # Errors
    /// Returns [`Md5Error::FinalizeAfterFinalize`] on a second call.
    pub fn finalize(&mut self) -> Result<[u8; DIGEST_LEN], Md5Error> {
        let mut out = [0u8; DIGEST_LEN];
        self.finalize_into(&mut out)?;
        Ok(out)
    }

    /// Finish the message, writing the digest into `out`.
    ///
    /// `out` is left untouched on error.
    ///
    /// # Errors
    /// Returns [`Md5Error::FinalizeAfterFinalize`] on a second call.
    pub fn finalize_into(&mut self, out: &mut [u8; DIGEST_LEN]) -> Result<(), Md5Error> {
        if self.is_finalized() {
            return Err(Md5Error::FinalizeAfterFinalize);
        }

        self.finish(out);
        Ok(())
    }

    pub(crate) fn absorb_message(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        self.absorb(data);
        self.phase = Phase::Absorbing;
    }

    /// Padding and length per RFC 1321 Sections 3.1 and 3.2, then output
    pub(crate) fn finish(&mut self, out: &mut [u8; DIGEST_LEN]) {
        // Bit length modulo 2^64, low word first
        let mut bit_len = self.total_len.wrapping_mul(8);
        let mut len_field = [0u8; 8];
        u64_to_le(&mut bit_len, &mut len_field);

        // 0x80 plus zeros up to byte 56 of a block; a buffer already past
        // LEN_FIELD_OFFSET spills into one extra block. Either way the
        // 8-byte length then fills the block exactly.
        let pad_len = if self.buffer_len < LEN_FIELD_OFFSET {
            LEN_FIELD_OFFSET - self.buffer_len
        } else {
            LEN_FIELD_OFFSET + BLOCK_LEN - self.buffer_len
        };

        self.absorb(&PADDING[..pad_len]);
        self.absorb(&len_field);
        len_field.zeroize();

        debug_assert_eq!(self.buffer_len, 0, "length field must close the last block");

        // Output A, B, C, D, each low-order byte first
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter_mut()) {
            word.export_as_le_bytes(&mut self.tmp_word);
            chunk.copy_from_slice(&self.tmp_word);
        }

        self.zeroize();
        self.phase = Phase::Finalized;
    }

    /// Buffer `data`, compressing every completed block
    fn absorb(&mut self, data: &[u8]) {
        let mut offset = 0;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let fill = BLOCK_LEN - self.buffer_len;
            if data.len() < fill {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }

            self.buffer[self.buffer_len..].copy_from_slice(&data[..fill]);
            self.tmp_block.copy_from_slice(&self.buffer);
            self.compress_internal();
            self.buffer.zeroize();
            self.buffer_len = 0;
            offset = fill;
        }

        // Whole blocks straight from the input
        let mut blocks = data[offset..].chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.tmp_block.copy_from_slice(block);
            self.compress_internal();
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Compress `tmp_block` into the chaining values
    fn compress_internal(&mut self) {
        for (wv, h) in self.wv.iter_mut().zip(self.state.iter()) {
            wv.copy_from(h);
        }

        self.compress();

        // state += wv (take zeroizes wv)
        for (h, wv) in self.state.iter_mut().zip(self.wv.iter_mut()) {
            h.wrapping_add_assign_val(core::mem::take(wv.as_mut_u32()));
        }

        self.tmp_block.zeroize();
    }

    /// 64 steps per RFC 1321 Section 3.4 over the working registers
    fn compress(&mut self) {
        // X[0..15] from block (little-endian)
        for (word, bytes) in self.x.iter_mut().zip(self.tmp_block.chunks_exact(4)) {
            self.tmp_word.copy_from_slice(bytes);
            word.fill_with_le_bytes(&mut self.tmp_word);
        }

        for (step, (k, &g)) in K.iter().zip(MSG_INDEX.iter()).enumerate() {
            let round = step / 16;

            // b + ((a + f(b,c,d) + X[g] + T[step]) <<< s)
            RoundFn::BY_ROUND[round].apply(&mut self.scratch, &self.wv[1], &self.wv[2], &self.wv[3]);
            self.scratch.wrapping_add_assign(&self.wv[0]);
            self.scratch.wrapping_add_assign(&self.x[g as usize]);
            self.scratch.wrapping_add_assign_val(*k);
            self.scratch.rotate_left_assign(SHIFTS[round][step % 4]);
            self.scratch.wrapping_add_assign(&self.wv[1]);

            // (a, b, c, d) = (d, scratch, b, c)
            self.wv.rotate_right(1);
            self.wv[1].copy_from(&self.scratch);

            self.scratch.zeroize();
        }

        self.x.zeroize();
    }

    /// Whether the per-block temporaries are zero
    #[cfg(test)]
    pub(crate) fn is_scratch_wiped(&self) -> bool {
        use tbx_util::is_slice_zeroized;

        self.wv.iter().all(|w| w.as_u32() == 0)
            && self.x.iter().all(|w| w.as_u32() == 0)
            && self.scratch.as_u32() == 0
            && is_slice_zeroized(&self.tmp_block)
            && is_slice_zeroized(&self.tmp_word)
    }

    /// Whether every secret-bearing field is zero
    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.is_scratch_wiped()
            && self.state.iter().all(|w| w.as_u32() == 0)
            && tbx_util::is_slice_zeroized(&self.buffer)
            && self.buffer_len == 0
            && self.total_len == 0
    }

    /// Pretend `total` message bytes were fed, keeping buffered content.
    ///
    /// Only the length field depends on the counter, so this reaches
    /// multi-GiB lengths without hashing them.
    #[cfg(test)]
    pub(crate) fn set_bytes_absorbed(&mut self, total: u64) {
        self.total_len = total;
    }

    /// Test access to the internal buffer occupancy
    #[cfg(test)]
    pub(crate) fn buffered(&self) -> usize {
        self.buffer_len
    }

    /// Test access to the raw chaining values
    #[cfg(test)]
    pub(crate) fn chaining_values(&self) -> [u32; 4] {
        core::array::from_fn(|i| self.state[i].as_u32())
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// MD5 compression function (single block)
///
/// Updates chaining values `state` with one 512-bit block. The scratch context
/// used for the computation is wiped on return.
///
/// # Arguments
/// * `state` - Chaining values A, B, C, D (input/output)
/// * `block` - Message block (64 bytes)
pub fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut ctx = Md5::new();

    for (word, value) in ctx.state.iter_mut().zip(state.iter()) {
        *word.as_mut_u32() = *value;
    }
    ctx.tmp_block.copy_from_slice(block);
    ctx.compress_internal();

    for (value, word) in state.iter_mut().zip(ctx.state.iter_mut()) {
        *value = core::mem::take(word.as_mut_u32());
    }
}
