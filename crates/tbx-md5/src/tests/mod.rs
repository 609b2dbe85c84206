// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

#[cfg(feature = "std")]
mod io;
mod streaming;
