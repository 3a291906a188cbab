// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message buffer with whole-buffer replace semantics.
//!
//! The device owns one variable-length message. Every write discards and
//! fully replaces the previous content; there is no append and no partial
//! write. Replacement is indivisible with respect to readers: a read always
//! observes the message as some single write left it, never a mix of two
//! writes.
//!
//! The buffer distinguishes a message that was never stored (control-path
//! GET fails with [`BufferError::NoData`]) from a message explicitly set to
//! empty.
//!
//! # Example
//!
//! ```rust
//! use solodev_buffer::{BufferError, MessageBuffer, TerminatorPolicy};
//!
//! fn example() -> Result<(), BufferError> {
//!     let buffer = MessageBuffer::default();
//!
//!     assert_eq!(buffer.write(b"hello")?, 5);
//!     assert_eq!(buffer.read(5, 0)?, b"hello");
//!
//!     buffer.set_from_control(b"world")?;
//!     assert_eq!(buffer.get_for_control(TerminatorPolicy::Exclude)?, b"world");
//!     assert_eq!(buffer.byte_at(0)?, b'w');
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod message;

pub use error::BufferError;
pub use message::{DEFAULT_MAX_CONTROL_LEN, MessageBuffer, TerminatorPolicy};
