//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`ReadBytes`] trait, to read bytes to known types.

use byteorder::{LittleEndian, ReadBytesExt};
use nalgebra::{Vector2, Vector3, Vector4};

use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily read all kind of data from a source that implements [`Read`] + [`Seek`].
pub trait ReadBytes: Read + Seek {

    /// This function returns the lenght of the data we're reading.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data);
    /// let len = cursor.len().unwrap();
    /// assert_eq!(len, 4);
    /// ```
    fn len(&mut self) -> Result<u64> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        // Avoid seeking a third time when we were already at the end of the
        // stream. The branch is usually way cheaper than a seek operation.
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }

    /// This function returns if the data is empty.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![];
    /// let mut cursor = Cursor::new(data);
    /// assert!(ReadBytes::is_empty(&mut cursor).unwrap());
    /// ```
    fn is_empty(&mut self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// This function returns the amount of bytes specified in the `size` argument as a [`Vec<u8>`].
    ///
    /// If `rewind` is true, the cursor will be reset to its original position once the data is returned.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data.to_vec());
    /// let data_read = cursor.read_slice(4, false).unwrap();
    /// assert_eq!(data, data_read);
    /// ```
    fn read_slice(&mut self, size: usize, rewind: bool) -> Result<Vec<u8>> {
        let mut data = vec![0; size];

        // If len is 0, just return.
        if size == 0 {
            return Ok(data)
        }

        self.read_exact(&mut data)?;

        if rewind {
            self.seek(SeekFrom::Current(-(size as i64)))?;
        }

        Ok(data)
    }

    /// This function tries to read an unsigned byte value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![10];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_u8().unwrap();
    ///
    /// assert_eq!(data, 10);
    /// assert_eq!(cursor.read_u8().is_err(), true);
    /// ```
    fn read_u8(&mut self) -> Result<u8> {
        ReadBytesExt::read_u8(self).map_err(From::from)
    }

    /// This function tries to read an u16 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 10];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_u16().unwrap();
    ///
    /// assert_eq!(data, 10);
    /// assert_eq!(cursor.read_u16().is_err(), true);
    /// ```
    fn read_u16(&mut self) -> Result<u16> {
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an u32 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 0, 0, 10, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_u32().unwrap();
    ///
    /// assert_eq!(data, 10);
    /// assert_eq!(cursor.read_u32().is_err(), true);
    /// ```
    fn read_u32(&mut self) -> Result<u32> {
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an i16 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![254, 254, 10];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_i16().unwrap();
    ///
    /// assert_eq!(data, -258);
    /// assert_eq!(cursor.read_i16().is_err(), true);
    /// ```
    fn read_i16(&mut self) -> Result<i16> {
        ReadBytesExt::read_i16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an f32 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![0, 0, 32, 65];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_f32().unwrap();
    ///
    /// assert_eq!(data, 10.0);
    /// assert_eq!(cursor.read_f32().is_err(), true);
    /// ```
    fn read_f32(&mut self) -> Result<f32> {
        ReadBytesExt::read_f32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an UTF-8 String value of the provided `size` from `self`.
    ///
    /// Lossy, because model authors love to embed non-UTF-8 symbols in their bone names.
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![98, 111, 110, 101, 115];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_string_u8(5).unwrap();
    ///
    /// assert_eq!(data, "bones");
    /// assert_eq!(cursor.read_string_u8(5).is_err(), true);
    /// ```
    fn read_string_u8(&mut self, size: usize) -> Result<String> {
        let mut data = vec![0; size];
        self.read_exact(&mut data)?;

        Ok(String::from_utf8_lossy(&data).to_string())
    }

    /// This function tries to read a Sized UTF-8 String value from `self`.
    ///
    /// In these Sized Strings, the length prefix takes one or two bytes: if the first
    /// byte is smaller than 128 it's the whole length. Otherwise his low seven bits are
    /// the low part, a second byte is the high part, and the length is `low + high * 128`.
    /// A length of 0 yields an empty String with no payload read.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![5, 98, 111, 110, 101, 115];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_sized_string_u8().unwrap();
    ///
    /// assert_eq!(data, "bones");
    /// assert_eq!(cursor.read_sized_string_u8().is_err(), true);
    /// ```
    fn read_sized_string_u8(&mut self) -> Result<String> {
        let low = self.read_u8()?;
        let high = if low >= 128 { self.read_u8()? } else { 0 };
        let size = (low % 128) as usize + high as usize * 128;
        self.read_string_u8(size)
    }

    /// This function tries to read a newline-terminated String value from `self`.
    ///
    /// The returned String includes the newline. If the stream ends before one is found,
    /// whatever was accumulated is returned instead.
    ///
    /// Reads are expensive, so instead of reading byte by byte, we read a bunch of them,
    /// search with memchr, and seek back to just after the newline.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = b"head: 1 2 3\nrest".to_vec();
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_line_u8().unwrap();
    ///
    /// assert_eq!(data, "head: 1 2 3\n");
    /// assert_eq!(cursor.read_slice(4, false).unwrap(), b"rest");
    /// ```
    fn read_line_u8(&mut self) -> Result<String> {
        let mut buf = [0; 512];
        let mut data = vec![];

        loop {
            let read_bytes = self.read(&mut buf)?;
            if read_bytes == 0 {
                break;
            }

            if let Some(pos) = memchr::memchr(b'\n', &buf[..read_bytes]) {

                // Keep the newline, then move the cursor to just after it,
                // so we can continue reading.
                data.extend_from_slice(&buf[..=pos]);
                self.seek(SeekFrom::Current(pos as i64 + 1 - read_bytes as i64))?;
                break;
            } else {
                data.extend_from_slice(&buf[..read_bytes]);
            }
        }

        Ok(String::from_utf8_lossy(&data).to_string())
    }

    /// This function tries to read a Vector of 2 f32 values from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use nalgebra::Vector2;
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_vector_2_f32().unwrap();
    ///
    /// assert_eq!(data, Vector2::new(1.0, 2.0));
    /// assert_eq!(cursor.read_vector_2_f32().is_err(), true);
    /// ```
    fn read_vector_2_f32(&mut self) -> Result<Vector2<f32>> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;

        Ok(Vector2::new(x, y))
    }

    /// This function tries to read a Vector of 3 f32 values from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use nalgebra::Vector3;
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_vector_3_f32().unwrap();
    ///
    /// assert_eq!(data, Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(cursor.read_vector_3_f32().is_err(), true);
    /// ```
    fn read_vector_3_f32(&mut self) -> Result<Vector3<f32>> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        let z = self.read_f32()?;

        Ok(Vector3::new(x, y, z))
    }

    /// This function tries to read a Vector of 4 u8 values from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use nalgebra::Vector4;
    /// use std::io::Cursor;
    ///
    /// use rxps_lib::binary::ReadBytes;
    ///
    /// let data = vec![0xFF, 0x20, 0x00, 0xFF];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_vector_4_u8().unwrap();
    ///
    /// assert_eq!(data, Vector4::new(255, 32, 0, 255));
    /// assert_eq!(cursor.read_vector_4_u8().is_err(), true);
    /// ```
    fn read_vector_4_u8(&mut self) -> Result<Vector4<u8>> {
        let x = self.read_u8()?;
        let y = self.read_u8()?;
        let z = self.read_u8()?;
        let w = self.read_u8()?;

        Ok(Vector4::new(x, y, z, w))
    }
}

// Automatic implementation for everything that implements `Read + Seek`.
impl<R: Read + Seek> ReadBytes for R {}
