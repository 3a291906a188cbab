// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for solodev-buffer.

use thiserror::Error;

/// Errors that can occur when working with the message buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A control-path GET was issued before any message was stored.
    #[error("no message has been set")]
    NoData,

    /// A byte index fell outside the stored message.
    #[error("index {index} out of range for message of {len} bytes")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The current message length.
        len: usize,
    },

    /// A control payload exceeded the configured maximum.
    ///
    /// Oversized payloads are rejected outright, never truncated; the
    /// previous message stays intact.
    #[error("payload of {len} bytes exceeds the {max} byte maximum")]
    PayloadTooLarge {
        /// The offered payload length.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Allocating the replacement buffer failed.
    ///
    /// Fatal to the triggering call only; the previous message stays intact
    /// and the buffer remains usable.
    #[error("failed to allocate replacement buffer of {len} bytes")]
    AllocationFailed {
        /// The requested allocation size.
        len: usize,
    },

    /// The buffer mutex was poisoned by a panicking holder.
    #[error("buffer mutex poisoned")]
    MutexPoisoned,
}
