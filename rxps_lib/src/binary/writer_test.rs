//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`WriteBytes`] trait.
//!
//! [`WriteBytes`]: crate::binary::WriteBytes

use nalgebra::{Vector2, Vector3, Vector4};

use super::WriteBytes;

/// Test for WriteBytes::write_u8().
#[test]
fn write_u8() {
    let mut data = vec![];
    assert!(data.write_u8(10).is_ok());
    assert_eq!(data, vec![10]);
}

/// Test for WriteBytes::write_u16().
#[test]
fn write_u16() {
    let mut data = vec![];
    assert!(data.write_u16(258).is_ok());
    assert_eq!(data, vec![2, 1]);
}

/// Test for WriteBytes::write_u32().
#[test]
fn write_u32() {
    let mut data = vec![];
    assert!(data.write_u32(258).is_ok());
    assert_eq!(data, vec![2, 1, 0, 0]);
}

/// Test for WriteBytes::write_i16().
#[test]
fn write_i16() {
    let mut data = vec![];
    assert!(data.write_i16(-258).is_ok());
    assert_eq!(data, vec![254, 254]);
}

/// Test for WriteBytes::write_f32().
#[test]
fn write_f32() {
    let mut data = vec![];
    assert!(data.write_f32(10.0).is_ok());
    assert_eq!(data, vec![0, 0, 32, 65]);
}

/// Test for WriteBytes::write_string_u8().
#[test]
fn write_string_u8() {
    let mut data = vec![];
    assert!(data.write_string_u8("bones").is_ok());
    assert_eq!(data, vec![98, 111, 110, 101, 115]);
}

/// Test for WriteBytes::write_sized_string_u8().
#[test]
fn write_sized_string_u8() {
    let mut data = vec![];
    assert!(data.write_sized_string_u8("bones").is_ok());
    assert_eq!(data, vec![5, 98, 111, 110, 101, 115]);

    // Two-byte prefix: length 130 encodes as low 2 + 128, high 1.
    let mut data = vec![];
    assert!(data.write_sized_string_u8(&"c".repeat(130)).is_ok());
    assert_eq!(data[0], 130);
    assert_eq!(data[1], 1);
    assert_eq!(data.len(), 132);

    // Too long for a two-byte prefix.
    let mut data = vec![];
    assert!(data.write_sized_string_u8(&"c".repeat(40_000)).is_err());
}

/// Test for WriteBytes::write_vector_2_f32().
#[test]
fn write_vector_2_f32() {
    let mut data = vec![];
    assert!(data.write_vector_2_f32(Vector2::new(1.0, 2.0)).is_ok());
    assert_eq!(data, vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40]);
}

/// Test for WriteBytes::write_vector_3_f32().
#[test]
fn write_vector_3_f32() {
    let mut data = vec![];
    assert!(data.write_vector_3_f32(Vector3::new(1.0, 2.0, 3.0)).is_ok());
    assert_eq!(data, vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40]);
}

/// Test for WriteBytes::write_vector_4_u8().
#[test]
fn write_vector_4_u8() {
    let mut data = vec![];
    assert!(data.write_vector_4_u8(Vector4::new(255, 32, 0, 255)).is_ok());
    assert_eq!(data, vec![0xFF, 0x20, 0x00, 0xFF]);
}
