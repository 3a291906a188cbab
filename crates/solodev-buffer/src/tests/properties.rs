// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::message::{MessageBuffer, TerminatorPolicy};

proptest! {
    #[test]
    fn roundtrip_arbitrary_messages(
        bytes in proptest::collection::vec(any::<u8>(), 1..512)
    ) {
        let buffer = MessageBuffer::default();

        let written = buffer.write(&bytes).expect("Failed to write()");
        prop_assert_eq!(written, bytes.len());

        let read = buffer.read(bytes.len(), 0).expect("Failed to read()");
        prop_assert_eq!(read, bytes);
    }

    #[test]
    fn reads_window_the_stored_message(
        bytes in proptest::collection::vec(any::<u8>(), 1..256),
        offset in 0..512usize,
        max_len in 0..512usize
    ) {
        let buffer = MessageBuffer::default();
        buffer.write(&bytes).expect("Failed to write()");

        let read = buffer.read(max_len, offset).expect("Failed to read()");

        if offset >= bytes.len() {
            prop_assert!(read.is_empty());
        } else {
            let end = (offset + max_len).min(bytes.len());
            prop_assert_eq!(read, &bytes[offset..end]);
        }
    }

    #[test]
    fn last_writer_wins(
        first in proptest::collection::vec(any::<u8>(), 1..128),
        second in proptest::collection::vec(any::<u8>(), 1..128)
    ) {
        let buffer = MessageBuffer::default();

        buffer.write(&first).expect("Failed to write()");
        buffer.write(&second).expect("Failed to write()");

        prop_assert_eq!(buffer.len(), second.len());
        let read = buffer.read(second.len(), 0).expect("Failed to read()");
        prop_assert_eq!(read, second);
    }

    #[test]
    fn byte_at_agrees_with_the_stored_message(
        bytes in proptest::collection::vec(any::<u8>(), 1..128),
        index in 0..256usize
    ) {
        let buffer = MessageBuffer::default();
        buffer.set_from_control(&bytes).expect("Failed to set_from_control()");

        let result = buffer.byte_at(index);

        if index < bytes.len() {
            prop_assert_eq!(result, Ok(bytes[index]));
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn terminator_policy_only_affects_the_reply(
        bytes in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let buffer = MessageBuffer::default();
        buffer.set_from_control(&bytes).expect("Failed to set_from_control()");

        let bare = buffer
            .get_for_control(TerminatorPolicy::Exclude)
            .expect("Failed to get_for_control()");
        let terminated = buffer
            .get_for_control(TerminatorPolicy::Include)
            .expect("Failed to get_for_control()");

        prop_assert_eq!(&bare, &bytes);
        prop_assert_eq!(terminated.len(), bytes.len() + 1);
        prop_assert_eq!(&terminated[..bytes.len()], bytes.as_slice());
        prop_assert_eq!(terminated[bytes.len()], 0);
        prop_assert_eq!(buffer.len(), bytes.len());
    }
}
