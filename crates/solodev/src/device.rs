// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Device: process-wide state shared by sequential sessions.
//!
//! The device is an explicit value, not file-scope globals: its message,
//! scratch number and admission gate live from construction to drop and are
//! freed exactly once, with the device itself.

use std::sync::atomic::{AtomicI32, Ordering};

use solodev_buffer::{DEFAULT_MAX_CONTROL_LEN, MessageBuffer, TerminatorPolicy};
use solodev_gate::ExclusivityGate;

/// Construction-time device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Largest control payload accepted by `SetMessage`.
    pub max_control_len: usize,
    /// Whether `GetMessage` replies carry a trailing NUL.
    pub terminator: TerminatorPolicy,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            max_control_len: DEFAULT_MAX_CONTROL_LEN,
            terminator: TerminatorPolicy::Exclude,
        }
    }
}

/// Process-wide device state.
///
/// The message and the scratch number outlive any one session. Sessions are
/// serialized by the gate; the [`SessionController`](crate::SessionController)
/// is the only legal caller of the underlying resources.
#[derive(Debug)]
pub struct Device {
    gate: ExclusivityGate,
    message: MessageBuffer,
    num: AtomicI32,
    terminator: TerminatorPolicy,
}

impl Device {
    /// Creates a device with an unset message and a zero scratch number.
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            gate: ExclusivityGate::new(),
            message: MessageBuffer::new(config.max_control_len),
            num: AtomicI32::new(0),
            terminator: config.terminator,
        }
    }

    /// Returns `true` while a session holds the device.
    pub fn is_busy(&self) -> bool {
        self.gate.is_held()
    }

    /// Current message length in bytes; 0 when unset.
    pub fn message_len(&self) -> usize {
        self.message.len()
    }

    pub(crate) fn gate(&self) -> &ExclusivityGate {
        &self.gate
    }

    pub(crate) fn message(&self) -> &MessageBuffer {
        &self.message
    }

    pub(crate) fn terminator(&self) -> TerminatorPolicy {
        self.terminator
    }

    pub(crate) fn load_num(&self) -> i32 {
        self.num.load(Ordering::Relaxed)
    }

    pub(crate) fn store_num(&self, num: i32) {
        self.num.store(num, Ordering::Relaxed);
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new(DeviceConfig::default())
    }
}
