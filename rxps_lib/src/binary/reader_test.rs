//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`ReadBytes`] trait.
//!
//! The simple typed readers are already covered by their doc tests. These cover the
//! string and line decoding, which is where the format gets weird.
//!
//! [`ReadBytes`]: crate::binary::ReadBytes

use std::io::{Cursor, ErrorKind, Seek};

use crate::error::RXpsError;

use super::{ReadBytes, WriteBytes};

/// Test for ReadBytes::read_sized_string_u8().
#[test]
fn read_sized_string_u8() {

    // One-byte prefix.
    let mut data = vec![3];
    data.extend_from_slice(b"abc");
    let mut cursor = Cursor::new(data);
    assert_eq!(cursor.read_sized_string_u8().unwrap(), "abc");

    // A zero length carries no payload at all.
    let mut cursor = Cursor::new(vec![0]);
    assert_eq!(cursor.read_sized_string_u8().unwrap(), "");
    assert_eq!(cursor.stream_position().unwrap(), 1);

    // Two-byte prefix: length 128 encodes as low 0, high 1.
    let mut data = vec![128, 1];
    data.extend_from_slice(&[b'x'; 128]);
    let mut cursor = Cursor::new(data);
    assert_eq!(cursor.read_sized_string_u8().unwrap(), "x".repeat(128));
}

/// The length prefix must round-trip through the writer at both prefix widths.
#[test]
fn read_sized_string_u8_round_trip() {
    for length in [0, 127, 128, 16_510] {
        let string = "b".repeat(length);
        let mut data = vec![];
        data.write_sized_string_u8(&string).unwrap();

        let expected_prefix_len = if length >= 128 { 2 } else { 1 };
        assert_eq!(data.len(), expected_prefix_len + length);

        let mut cursor = Cursor::new(data);
        assert_eq!(cursor.read_sized_string_u8().unwrap(), string);
    }
}

/// A string cut short must fail, never decode partially.
#[test]
fn read_sized_string_u8_truncated() {
    let mut cursor = Cursor::new(vec![10, b'a', b'b', b'c']);
    match cursor.read_sized_string_u8() {
        Err(RXpsError::IOError(error)) => assert_eq!(error.kind(), ErrorKind::UnexpectedEof),
        result => panic!("unexpected result: {result:?}"),
    }
}

/// Test for ReadBytes::read_line_u8().
#[test]
fn read_line_u8() {

    // The newline is part of the returned line, and the cursor ends just after it.
    let mut cursor = Cursor::new(b"pelvis: 0 0 0\n1234".to_vec());
    assert_eq!(cursor.read_line_u8().unwrap(), "pelvis: 0 0 0\n");
    assert_eq!(cursor.stream_position().unwrap(), 14);
    assert_eq!(cursor.read_slice(4, false).unwrap(), b"1234");

    // End-of-stream ends the line too.
    let mut cursor = Cursor::new(b"no newline here".to_vec());
    assert_eq!(cursor.read_line_u8().unwrap(), "no newline here");

    let mut cursor = Cursor::new(vec![]);
    assert_eq!(cursor.read_line_u8().unwrap(), "");
}

/// Lines longer than the internal read chunk must still come back whole.
#[test]
fn read_line_u8_long_line() {
    let mut data = vec![b'a'; 600];
    data.push(b'\n');
    data.extend_from_slice(b"next");
    let mut cursor = Cursor::new(data);

    let line = cursor.read_line_u8().unwrap();
    assert_eq!(line.len(), 601);
    assert_eq!(cursor.read_slice(4, false).unwrap(), b"next");
}
