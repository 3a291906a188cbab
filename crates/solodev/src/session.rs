// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SessionController - the open/close state machine in front of the device.
//!
//! A controller starts `Closed`. `open()` is the only transition to `Open`
//! and is gated by the exclusivity gate, so at most one controller holds
//! the device at a time. Every path out of `Open` releases the gate,
//! including drop.

use std::sync::Arc;

use log::{debug, info};

use solodev_guard::AccessGuard;

use crate::control::{ControlReply, ControlRequest};
use crate::device::Device;
use crate::error::DeviceError;

#[derive(Debug)]
enum SessionState {
    Closed,
    Open {
        /// Fresh per-session state, like a newly opened file's private data.
        value: AccessGuard,
    },
}

/// One client's view of the device.
///
/// Read, write and control calls are refused with
/// [`DeviceError::NotOpen`] while closed.
#[derive(Debug)]
pub struct SessionController {
    device: Arc<Device>,
    state: SessionState,
}

impl SessionController {
    /// Creates a closed controller for `device`.
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            state: SessionState::Closed,
        }
    }

    /// Opens a session.
    ///
    /// Fails with [`DeviceError::Busy`] while any session holds the device,
    /// this controller's own included. A failed open has no side effects.
    pub fn open(&mut self) -> Result<(), DeviceError> {
        if !self.device.gate().try_acquire() {
            debug!("open refused: device busy");
            return Err(DeviceError::Busy);
        }

        self.state = SessionState::Open {
            value: AccessGuard::new(),
        };
        info!("session opened");

        Ok(())
    }

    /// Closes the session and releases the gate.
    ///
    /// The per-session value is dropped here; the device message survives
    /// for the next session. Closing a closed controller is a no-op.
    pub fn close(&mut self) {
        if matches!(self.state, SessionState::Open { .. }) {
            self.state = SessionState::Closed;
            self.device.gate().release();
            info!("session closed");
        }
    }

    /// Returns `true` while this controller holds the device.
    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    /// Reads up to `max_len` bytes of the device message from `offset`.
    ///
    /// Returns an empty vector at end of message.
    pub fn read(&self, max_len: usize, offset: usize) -> Result<Vec<u8>, DeviceError> {
        self.ensure_open()?;

        let bytes = self.device.message().read(max_len, offset)?;
        debug!("read {} bytes at offset {offset}", bytes.len());

        Ok(bytes)
    }

    /// Replaces the device message with `bytes`, returning the count stored.
    ///
    /// An empty write is a no-op returning 0.
    pub fn write(&self, bytes: &[u8]) -> Result<usize, DeviceError> {
        self.ensure_open()?;

        let written = self.device.message().write(bytes)?;
        debug!("wrote {written} bytes");

        Ok(written)
    }

    /// Fills `out` with the per-session guarded value repeated.
    pub fn read_value_repeated(&self, out: &mut [u8]) -> Result<(), DeviceError> {
        self.value()?.fill(out);

        Ok(())
    }

    /// Issues one control operation.
    pub fn control(&self, request: ControlRequest<'_>) -> Result<ControlReply, DeviceError> {
        let value = self.value()?;

        match request {
            ControlRequest::SetMessage(payload) => {
                let stored = self.device.message().set_from_control(payload)?;
                info!("control: set message of {stored} bytes");
                Ok(ControlReply::Stored(stored))
            }
            ControlRequest::GetMessage => {
                let message = self
                    .device
                    .message()
                    .get_for_control(self.device.terminator())?;
                debug!("control: get message of {} bytes", message.len());
                Ok(ControlReply::Message(message))
            }
            ControlRequest::GetNthByte(index) => {
                Ok(ControlReply::Byte(self.device.message().byte_at(index)?))
            }
            ControlRequest::GetNum => Ok(ControlReply::Num(self.device.load_num())),
            ControlRequest::SetNum(num) => {
                self.device.store_num(num);
                Ok(ControlReply::Done)
            }
            ControlRequest::SetValue(byte) => {
                value.write_value(byte);
                Ok(ControlReply::Done)
            }
            ControlRequest::GetValue => Ok(ControlReply::Value(value.read_value())),
        }
    }

    fn value(&self) -> Result<&AccessGuard, DeviceError> {
        match &self.state {
            SessionState::Open { value } => Ok(value),
            SessionState::Closed => Err(DeviceError::NotOpen),
        }
    }

    fn ensure_open(&self) -> Result<(), DeviceError> {
        self.value().map(|_| ())
    }
}

impl Drop for SessionController {
    // The gate must be released on every path out of Open.
    fn drop(&mut self) {
        self.close();
    }
}
