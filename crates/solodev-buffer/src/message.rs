// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MessageBuffer - device-lifetime message storage.
//!
//! The replacement buffer is fully built before the mutex is taken, so the
//! critical section is a single swap and an allocation failure leaves the
//! previous message untouched. The old allocation is dropped the instant
//! the new one is installed.

use std::sync::Mutex;

use crate::error::BufferError;

/// Largest control payload accepted by default, in bytes.
pub const DEFAULT_MAX_CONTROL_LEN: usize = 1024;

/// Whether control-path GET replies carry a trailing NUL terminator.
///
/// The stored length never counts the terminator; the policy only affects
/// what [`MessageBuffer::get_for_control`] copies out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminatorPolicy {
    /// Reply with the stored bytes only.
    #[default]
    Exclude,
    /// Append one `0u8` after the stored bytes.
    Include,
}

/// Device-lifetime message storage with replace-whole semantics.
///
/// `None` means no message has ever been stored, which is distinct from an
/// explicitly stored empty message.
#[derive(Debug)]
pub struct MessageBuffer {
    message: Mutex<Option<Vec<u8>>>,
    max_control_len: usize,
}

impl MessageBuffer {
    /// Creates an unset buffer accepting control payloads up to
    /// `max_control_len` bytes.
    pub fn new(max_control_len: usize) -> Self {
        Self {
            message: Mutex::new(None),
            max_control_len,
        }
    }

    /// The configured control payload maximum.
    pub fn max_control_len(&self) -> usize {
        self.max_control_len
    }

    /// Replaces the message with `bytes`, returning the count stored.
    ///
    /// An empty write is a no-op returning 0 and does not count as setting
    /// the message.
    pub fn write(&self, bytes: &[u8]) -> Result<usize, BufferError> {
        if bytes.is_empty() {
            return Ok(0);
        }

        let new_message = copy_bytes(bytes)?;
        self.replace(new_message)?;

        Ok(bytes.len())
    }

    /// Copies up to `max_len` bytes starting at `offset` out of the message.
    ///
    /// Returns an empty vector when the message is unset or
    /// `offset >= len()` (end of message). The copy is taken under the
    /// mutex, so it is a snapshot of exactly one stored message.
    pub fn read(&self, max_len: usize, offset: usize) -> Result<Vec<u8>, BufferError> {
        let guard = self
            .message
            .lock()
            .map_err(|_| BufferError::MutexPoisoned)?;

        let Some(message) = guard.as_deref() else {
            return Ok(Vec::new());
        };
        if offset >= message.len() {
            // EOF
            return Ok(Vec::new());
        }

        let count = max_len.min(message.len() - offset);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(count)
            .map_err(|_| BufferError::AllocationFailed { len: count })?;
        bytes.extend_from_slice(&message[offset..offset + count]);

        Ok(bytes)
    }

    /// Control-path variant of [`write`](MessageBuffer::write).
    ///
    /// Rejects payloads over the configured maximum with
    /// [`BufferError::PayloadTooLarge`]. An empty payload is accepted and
    /// stores an empty message, distinguishable from a never-set one.
    pub fn set_from_control(&self, bytes: &[u8]) -> Result<usize, BufferError> {
        if bytes.len() > self.max_control_len {
            return Err(BufferError::PayloadTooLarge {
                len: bytes.len(),
                max: self.max_control_len,
            });
        }

        let new_message = copy_bytes(bytes)?;
        self.replace(new_message)?;

        Ok(bytes.len())
    }

    /// Copies the whole message out for a control-path GET.
    ///
    /// Fails with [`BufferError::NoData`] when no message was ever stored.
    /// Under [`TerminatorPolicy::Include`] the reply carries one trailing
    /// NUL after the stored bytes.
    pub fn get_for_control(&self, policy: TerminatorPolicy) -> Result<Vec<u8>, BufferError> {
        let guard = self
            .message
            .lock()
            .map_err(|_| BufferError::MutexPoisoned)?;

        let Some(message) = guard.as_deref() else {
            return Err(BufferError::NoData);
        };

        let extra = match policy {
            TerminatorPolicy::Exclude => 0,
            TerminatorPolicy::Include => 1,
        };
        let mut reply = Vec::new();
        reply
            .try_reserve_exact(message.len() + extra)
            .map_err(|_| BufferError::AllocationFailed {
                len: message.len() + extra,
            })?;
        reply.extend_from_slice(message);
        if matches!(policy, TerminatorPolicy::Include) {
            reply.push(0);
        }

        Ok(reply)
    }

    /// Returns the byte at `index`.
    ///
    /// Fails with [`BufferError::OutOfRange`] when `index >= len()`; an
    /// unset message counts as length 0.
    pub fn byte_at(&self, index: usize) -> Result<u8, BufferError> {
        let guard = self
            .message
            .lock()
            .map_err(|_| BufferError::MutexPoisoned)?;

        let message = guard.as_deref().unwrap_or(&[]);
        message
            .get(index)
            .copied()
            .ok_or(BufferError::OutOfRange {
                index,
                len: message.len(),
            })
    }

    /// Current message length in bytes; 0 when unset.
    pub fn len(&self) -> usize {
        self.lock_recovering().as_deref().map_or(0, <[u8]>::len)
    }

    /// Returns `true` when the message is unset or empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once a message has been stored, even an empty one.
    pub fn is_set(&self) -> bool {
        self.lock_recovering().is_some()
    }

    /// Installs a fully-built replacement under the mutex.
    fn replace(&self, new_message: Vec<u8>) -> Result<(), BufferError> {
        let mut guard = self
            .message
            .lock()
            .map_err(|_| BufferError::MutexPoisoned)?;
        *guard = Some(new_message);

        Ok(())
    }

    /// Observers tolerate poisoning: the invariant "length equals the
    /// vector's size" holds on every path, panicking holders included.
    fn lock_recovering(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        match self.message.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTROL_LEN)
    }
}

/// Builds the replacement vector outside any lock, failing cleanly when the
/// allocator does.
fn copy_bytes(bytes: &[u8]) -> Result<Vec<u8>, BufferError> {
    let mut new_message = Vec::new();
    new_message
        .try_reserve_exact(bytes.len())
        .map_err(|_| BufferError::AllocationFailed { len: bytes.len() })?;
    new_message.extend_from_slice(bytes);

    Ok(new_message)
}
