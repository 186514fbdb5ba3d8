//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`WriteBytes`] trait, to write bytes from known types to a [`Writer`].
//!
//! [`Writer`]: std::io::Write

use byteorder::{LittleEndian, WriteBytesExt};
use nalgebra::{Vector2, Vector3, Vector4};

use std::io::Write;

use crate::error::{RXpsError, Result};

/// Longest string a 1–2-byte length prefix can declare: 127 + 255 * 128.
const MAX_SIZED_STRING_LENGTH: usize = 32_767;

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily write all kind of data types to something that implements [`Write`].
pub trait WriteBytes: Write {

    /// This function tries to write a byte value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_u8(10).is_ok());
    /// assert_eq!(data, vec![10]);
    /// ```
    fn write_u8(&mut self, value: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, value).map_err(From::from)
    }

    /// This function tries to write an u16 value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_u16(258).is_ok());
    /// assert_eq!(data, vec![2, 1]);
    /// ```
    fn write_u16(&mut self, integer: u16) -> Result<()> {
        WriteBytesExt::write_u16::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an u32 value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_u32(258).is_ok());
    /// assert_eq!(data, vec![2, 1, 0, 0]);
    /// ```
    fn write_u32(&mut self, integer: u32) -> Result<()> {
        WriteBytesExt::write_u32::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an i16 value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_i16(-258).is_ok());
    /// assert_eq!(data, vec![254, 254]);
    /// ```
    fn write_i16(&mut self, integer: i16) -> Result<()> {
        WriteBytesExt::write_i16::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write an f32 value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_f32(10.0).is_ok());
    /// assert_eq!(data, vec![0, 0, 32, 65]);
    /// ```
    fn write_f32(&mut self, float: f32) -> Result<()> {
        WriteBytesExt::write_f32::<LittleEndian>(self, float).map_err(From::from)
    }

    /// This function tries to write an UTF-8 String to `self`, as raw bytes without a length prefix.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_string_u8("bones").is_ok());
    /// assert_eq!(data, vec![98, 111, 110, 101, 115]);
    /// ```
    fn write_string_u8(&mut self, string: &str) -> Result<()> {
        self.write_all(string.as_bytes()).map_err(From::from)
    }

    /// This function tries to write a Sized UTF-8 String to `self`.
    ///
    /// The length prefix takes one byte for lengths below 128, and two bytes otherwise,
    /// encoded as `low + high * 128` (see [`ReadBytes::read_sized_string_u8`]).
    ///
    /// It may fail if the String is too long for the prefix or `self` cannot be written to.
    ///
    /// ```rust
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_sized_string_u8("bones").is_ok());
    /// assert_eq!(data, vec![5, 98, 111, 110, 101, 115]);
    /// ```
    ///
    /// [`ReadBytes::read_sized_string_u8`]: crate::binary::ReadBytes::read_sized_string_u8
    fn write_sized_string_u8(&mut self, string: &str) -> Result<()> {
        let length = string.len();
        if length > MAX_SIZED_STRING_LENGTH {
            return Err(RXpsError::EncodingStringLengthError(string.to_owned(), length));
        }

        if length >= 128 {
            self.write_u8((length % 128) as u8 + 128)?;
            self.write_u8((length / 128) as u8)?;
        } else {
            self.write_u8(length as u8)?;
        }

        self.write_all(string.as_bytes()).map_err(From::from)
    }

    /// This function tries to write a Vector of 2 f32 values to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use nalgebra::Vector2;
    ///
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_vector_2_f32(Vector2::new(1.0, 2.0)).is_ok());
    /// assert_eq!(data, vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40]);
    /// ```
    fn write_vector_2_f32(&mut self, value: Vector2<f32>) -> Result<()> {
        self.write_f32(value[0])?;
        self.write_f32(value[1])
    }

    /// This function tries to write a Vector of 3 f32 values to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use nalgebra::Vector3;
    ///
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_vector_3_f32(Vector3::new(1.0, 2.0, 3.0)).is_ok());
    /// assert_eq!(data, vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40]);
    /// ```
    fn write_vector_3_f32(&mut self, value: Vector3<f32>) -> Result<()> {
        self.write_f32(value[0])?;
        self.write_f32(value[1])?;
        self.write_f32(value[2])
    }

    /// This function tries to write a Vector of 4 u8 values to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use nalgebra::Vector4;
    ///
    /// use rxps_lib::binary::WriteBytes;
    ///
    /// let mut data = vec![];
    /// assert!(data.write_vector_4_u8(Vector4::new(255, 32, 0, 255)).is_ok());
    /// assert_eq!(data, vec![0xFF, 0x20, 0x00, 0xFF]);
    /// ```
    fn write_vector_4_u8(&mut self, value: Vector4<u8>) -> Result<()> {
        self.write_u8(value[0])?;
        self.write_u8(value[1])?;
        self.write_u8(value[2])?;
        self.write_u8(value[3])
    }
}

// Automatic implementation for everything that implements `Write`.
impl<W: Write> WriteBytes for W {}
