// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! solodev_gate - Single-owner admission control for device sessions
//!
//! A device session may open only while no other session holds the device.
//! The gate is one atomic state variable flipped with a single
//! compare-and-swap, so a losing caller gets an immediate "busy" answer
//! instead of blocking.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


use core::sync::atomic::{AtomicU8, Ordering};

/// Gate state: no session holds the device.
const NOT_USED: u8 = 0;
/// Gate state: exactly one session holds the device.
const EXCLUSIVE_OPEN: u8 = 1;

/// Single-owner admission gate.
///
/// [`try_acquire`](ExclusivityGate::try_acquire) admits at most one holder
/// at a time; [`release`](ExclusivityGate::release) hands the device back.
/// Acquisition never waits.
#[derive(Debug)]
pub struct ExclusivityGate {
    state: AtomicU8,
}

impl ExclusivityGate {
    /// Creates a gate with no holder.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(NOT_USED),
        }
    }

    /// Attempts to take exclusive ownership of the device.
    ///
    /// Returns `true` only if the prior state was unheld. On `false` the
    /// caller must treat the device as busy and make no further calls; the
    /// failed attempt has no side effects.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.state
            .compare_exchange(
                NOT_USED,
                EXCLUSIVE_OPEN,
                Ordering::Acquire,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// Releases the gate unconditionally.
    ///
    /// Only the current holder may call this. The session controller owns
    /// the open/close transition, so there is a single releasing caller.
    #[inline]
    pub fn release(&self) {
        self.state.store(NOT_USED, Ordering::Release);
    }

    /// Returns `true` while some session holds the gate.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.state.load(Ordering::Acquire) == EXCLUSIVE_OPEN
    }
}

impl Default for ExclusivityGate {
    fn default() -> Self {
        Self::new()
    }
}
