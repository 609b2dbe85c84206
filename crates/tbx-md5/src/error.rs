// Copyright (c) 2026 The tbx authors
// SPDX-License-Identifier: LGPL-3.0-or-later
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Misuse of an [`Md5`](crate::Md5) context
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Md5Error {
    /// `update` was called after the digest had been produced
    #[error("cannot update an MD5 context after it has been finalized")]
    UpdateAfterFinalize,

    /// `finalize` was called a second time
    #[error("MD5 context has already been finalized")]
    FinalizeAfterFinalize,
}
