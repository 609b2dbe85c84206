// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit word wrapper with guaranteed zeroization on drop.
//!
//! All operations are in-place to avoid stack temporaries.
//! Round functions use internal temporaries that are zeroized before return.

use tbx_util::{u32_from_le, u32_to_le};
use zeroize::Zeroize;

/// 32-bit word wrapper with guaranteed zeroization.
///
/// - `#[repr(transparent)]` ensures same layout as u32
/// - Drop asserts zeroized (debug) then zeroizes (safety net)
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Fill word with little-endian bytes, zeroizing source bytes
    #[inline(always)]
    pub fn fill_with_le_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_from_le(&mut self.0, bytes);
    }

    /// Export word as little-endian bytes, zeroizing self
    #[inline(always)]
    pub fn export_as_le_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_to_le(&mut self.0, bytes);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic operations (in-place, modulo 2^32)
    // ═══════════════════════════════════════════════════════════════════════════

    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    #[inline(always)]
    pub fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Bitwise operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    #[inline(always)]
    pub fn xor_assign(&mut self, rhs: &Word32) {
        self.0 ^= rhs.0;
    }

    #[inline(always)]
    pub fn and_assign(&mut self, rhs: &Word32) {
        self.0 &= rhs.0;
    }

    #[inline(always)]
    pub fn or_assign(&mut self, rhs: &Word32) {
        self.0 |= rhs.0;
    }

    #[inline(always)]
    pub fn not_assign(&mut self) {
        self.0 = !self.0;
    }

    #[inline(always)]
    pub fn rotate_left_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_left(n);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Auxiliary functions per RFC 1321 Section 3.4
    // ═══════════════════════════════════════════════════════════════════════════

    /// F(x,y,z) = z ⊕ (x ∧ (y ⊕ z))
    ///
    /// Same truth table as (x ∧ y) ∨ (¬x ∧ z) with one fewer operation.
    #[inline(always)]
    pub fn set_f(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut t = Word32::zero();
        t.copy_from(y);
        t.xor_assign(z);
        t.and_assign(x);

        out.copy_from(z);
        out.xor_assign(&t);

        t.zeroize();
    }

    /// G(x,y,z) = y ⊕ (z ∧ (x ⊕ y))
    ///
    /// Same truth table as (x ∧ z) ∨ (y ∧ ¬z).
    #[inline(always)]
    pub fn set_g(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut t = Word32::zero();
        t.copy_from(x);
        t.xor_assign(y);
        t.and_assign(z);

        out.copy_from(y);
        out.xor_assign(&t);

        t.zeroize();
    }

    /// H(x,y,z) = x ⊕ y ⊕ z
    #[inline(always)]
    pub fn set_h(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        out.copy_from(x);
        out.xor_assign(y);
        out.xor_assign(z);
    }

    /// I(x,y,z) = y ⊕ (x ∨ ¬z)
    #[inline(always)]
    pub fn set_i(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut t = Word32::zero();
        t.copy_from(z);
        t.not_assign();
        t.or_assign(x);

        out.copy_from(y);
        out.xor_assign(&t);

        t.zeroize();
    }

    #[inline(always)]
    pub(crate) fn as_mut_u32(&mut self) -> &mut u32 {
        &mut self.0
    }

    /// Get inner u32 value for testing/assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Auxiliary function used by each group of 16 steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundFn {
    F,
    G,
    H,
    I,
}

impl RoundFn {
    /// Round functions in step order: steps 0..16 use F, 16..32 G, and so on
    pub(crate) const BY_ROUND: [RoundFn; 4] = [RoundFn::F, RoundFn::G, RoundFn::H, RoundFn::I];

    #[inline(always)]
    pub(crate) fn apply(self, out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        match self {
            RoundFn::F => Word32::set_f(out, x, y, z),
            RoundFn::G => Word32::set_g(out, x, y, z),
            RoundFn::H => Word32::set_h(out, x, y, z),
            RoundFn::I => Word32::set_i(out, x, y, z),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Zeroization
// ═══════════════════════════════════════════════════════════════════════════════

impl Zeroize for Word32 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Word32 {
    fn drop(&mut self) {
        debug_assert!(self.0 == 0, "Word32 dropped without zeroization");
        self.zeroize();
    }
}
