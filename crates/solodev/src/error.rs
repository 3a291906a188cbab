// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the device boundary.

use solodev_buffer::BufferError;
use thiserror::Error;

/// Errors returned across the device boundary.
///
/// Every error is returned to the immediate caller; none is swallowed. A
/// failed open mutates no shared state, and a failed write or control call
/// leaves the previous message and value intact.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Another session already holds the device.
    #[error("device is busy")]
    Busy,

    /// The operation needs an open session.
    #[error("session is not open")]
    NotOpen,

    /// A control payload exceeded the configured maximum.
    #[error("invalid argument: payload of {len} bytes exceeds the {max} byte maximum")]
    InvalidArgument {
        /// The offered payload length.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A byte index fell outside the stored message.
    #[error("index {index} out of range for message of {len} bytes")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The current message length.
        len: usize,
    },

    /// GET was issued before any message was stored.
    #[error("no message has been set")]
    NoData,

    /// Allocating a replacement buffer failed.
    ///
    /// Fatal to the triggering call only; the device stays usable.
    #[error("failed to allocate {len} bytes")]
    AllocationFailed {
        /// The requested allocation size.
        len: usize,
    },

    /// The message mutex was poisoned by a panicking holder.
    #[error("device state poisoned")]
    Poisoned,
}

impl From<BufferError> for DeviceError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::NoData => Self::NoData,
            BufferError::OutOfRange { index, len } => Self::OutOfRange { index, len },
            BufferError::PayloadTooLarge { len, max } => Self::InvalidArgument { len, max },
            BufferError::AllocationFailed { len } => Self::AllocationFailed { len },
            BufferError::MutexPoisoned => Self::Poisoned,
        }
    }
}
