// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_tests {
    use tbx_util::{bytes_to_hex, hex_to_bytes};

    #[test]
    fn test_hex_to_bytes_mixed_case() {
        assert_eq!(hex_to_bytes("D41d8C"), vec![0xd4, 0x1d, 0x8c]);
    }

    #[test]
    fn test_hex_to_bytes_empty() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_invalid_char() {
        hex_to_bytes("gg");
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_odd_length() {
        hex_to_bytes("abc");
    }

    #[test]
    fn test_bytes_to_hex_lowercase_padded() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
    }

    #[test]
    fn test_hex_round_trip() {
        let digest = "900150983cd24fb0d6963f7d28e17f72";
        assert_eq!(bytes_to_hex(&hex_to_bytes(digest)), digest);
    }
}
