// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_slice_zeroized_tests {
    use tbx_util::is_slice_zeroized;

    #[test]
    fn test_is_slice_zeroized_empty() {
        let slice: &[u8] = &[];
        assert!(is_slice_zeroized(slice));
    }

    #[test]
    fn test_is_slice_zeroized_all_zeros() {
        let data = [0u8; 64];
        assert!(is_slice_zeroized(&data));
    }

    #[test]
    fn test_is_slice_zeroized_last_byte_nonzero() {
        let data = [0u8, 0, 0, 1];
        assert!(!is_slice_zeroized(&data));
    }
}
