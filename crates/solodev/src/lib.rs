// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! solodev - Userspace model of an exclusive-access character device.
//!
//! One process-wide [`Device`] owns a replace-whole message buffer and a
//! scratch number. Clients talk to it through a [`SessionController`]:
//! `open()` admits at most one session at a time (a second open gets an
//! immediate [`DeviceError::Busy`], it never waits), and while open the
//! session can `read`, `write` and issue typed [`ControlRequest`]s. The
//! message survives session close and is freed exactly once, when the
//! device drops.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use solodev::{ControlReply, ControlRequest, Device, DeviceConfig, SessionController};
//!
//! fn main() -> Result<(), solodev::DeviceError> {
//!     let device = Arc::new(Device::new(DeviceConfig::default()));
//!
//!     let mut session = SessionController::new(Arc::clone(&device));
//!     session.open()?;
//!
//!     session.write(b"hello")?;
//!     assert_eq!(session.read(5, 0)?, b"hello");
//!
//!     session.control(ControlRequest::SetMessage(b"world"))?;
//!     let reply = session.control(ControlRequest::GetMessage)?;
//!     assert_eq!(reply, ControlReply::Message(b"world".to_vec()));
//!
//!     session.close();
//!
//!     // The message belongs to the device, not to the session.
//!     session.open()?;
//!     assert_eq!(session.read(5, 0)?, b"world");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Control protocol
//!
//! | Request | Reply | Acts on |
//! |---|---|---|
//! | [`ControlRequest::SetMessage`] | [`ControlReply::Stored`] | device message |
//! | [`ControlRequest::GetMessage`] | [`ControlReply::Message`] | device message |
//! | [`ControlRequest::GetNthByte`] | [`ControlReply::Byte`] | device message |
//! | [`ControlRequest::SetNum`] | [`ControlReply::Done`] | device scratch number |
//! | [`ControlRequest::GetNum`] | [`ControlReply::Num`] | device scratch number |
//! | [`ControlRequest::SetValue`] | [`ControlReply::Done`] | per-session value |
//! | [`ControlRequest::GetValue`] | [`ControlReply::Value`] | per-session value |

#![warn(missing_docs)]

mod control;
mod device;
mod error;
mod session;

pub use control::{ControlReply, ControlRequest};
pub use device::{Device, DeviceConfig};
pub use error::DeviceError;
pub use session::SessionController;

pub use solodev_buffer as buffer;
pub use solodev_gate as gate;
pub use solodev_guard as guard;
