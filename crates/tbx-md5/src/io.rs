// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

//! `std::io::Write` adapter so readers can be piped into a context with
//! `std::io::copy`.

use std::io;

use crate::md5::Md5;

impl io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
