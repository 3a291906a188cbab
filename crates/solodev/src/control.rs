// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Control protocol: typed out-of-band requests and replies.
//!
//! The control channel is distinct from the byte-stream read/write path: a
//! request carries a typed command and argument, a reply carries the typed
//! result. Message requests act on the device-wide buffer, number requests
//! on the device-wide scratch integer, and value requests on the
//! per-session reader/writer-locked byte.

/// A control request issued on an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest<'a> {
    /// Replace the device message with `payload`.
    ///
    /// Payloads over the configured maximum are rejected, never truncated.
    SetMessage(&'a [u8]),

    /// Fetch the whole device message, terminator per device configuration.
    GetMessage,

    /// Fetch one byte of the device message.
    GetNthByte(usize),

    /// Fetch the device scratch number.
    GetNum,

    /// Store the device scratch number.
    SetNum(i32),

    /// Store the per-session guarded value.
    SetValue(u8),

    /// Fetch the per-session guarded value.
    GetValue,
}

/// Reply to a [`ControlRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlReply {
    /// `SetMessage`: number of bytes stored.
    Stored(usize),

    /// `GetMessage`: the message bytes.
    Message(Vec<u8>),

    /// `GetNthByte`: the requested byte.
    Byte(u8),

    /// `GetNum`: the scratch number.
    Num(i32),

    /// `GetValue`: the guarded value.
    Value(u8),

    /// `SetNum` / `SetValue`: stored, nothing to report.
    Done,
}
