// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! solodev_guard - Reader/writer protection for the companion device value.
//!
//! The companion ioctl-style device keeps one byte of per-session state.
//! Readers share the lock and never block each other; a writer waits for
//! current readers to drain and excludes everyone while it stores. A fresh
//! guard holds [`INITIAL_VALUE`].

#![warn(missing_docs)]


use std::sync::RwLock;

/// Value a fresh guard holds before the first write.
pub const INITIAL_VALUE: u8 = 0xFF;

/// Reader/writer-locked byte of per-session state.
#[derive(Debug)]
pub struct AccessGuard {
    value: RwLock<u8>,
}

impl AccessGuard {
    /// Creates a guard holding [`INITIAL_VALUE`].
    pub fn new() -> Self {
        Self {
            value: RwLock::new(INITIAL_VALUE),
        }
    }

    /// Copies the value out under the shared lock.
    ///
    /// A poisoned lock is recovered: the datum is a single byte and cannot
    /// be observed half-written.
    pub fn read_value(&self) -> u8 {
        match self.value.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Stores a new value under the exclusive lock.
    pub fn write_value(&self, value: u8) {
        match self.value.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    /// Fills `out` with the current value repeated.
    ///
    /// The value is sampled once, so a write racing with the fill can never
    /// produce a mixed pattern.
    pub fn fill(&self, out: &mut [u8]) {
        out.fill(self.read_value());
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new()
    }
}
