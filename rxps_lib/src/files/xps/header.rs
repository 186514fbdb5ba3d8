//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is a module to read the header of a binary XPS model.
//!
//! The header drives the decoding of the rest of the file, but it's not part of the
//! decoded model itself: its fields are consumed during decoding and dropped afterwards.
//!
//! After the magic number, the version pair and the metadata strings, the header carries
//! a sequence of self-describing *items*. Each item declares its own type and size, so
//! decoders can skip the types they don't recognize without desyncing the stream. Known
//! item types carry pose libraries (rest-pose transforms embedded as text lines inside
//! the binary stream) and flag tables.

use getset::*;
#[cfg(feature = "integration_log")] use log::warn;
use nalgebra::Vector3;
use serde_derive::{Serialize, Deserialize};

use std::collections::HashMap;
use std::io::SeekFrom;

use crate::binary::ReadBytes;
use crate::error::{RXpsError, Result};
use crate::files::Decodeable;

/// Signature/Magic Numbers/Whatever of a binary XPS model.
pub const SIGNATURE: u32 = 323_232;

/// Last version using the legacy fixed layout, which we don't support.
const LEGACY_VERSION_MAJOR: u16 = 2;
const LEGACY_VERSION_MINOR: u16 = 12;

//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This represents the header of a binary XPS model, decoded in memory.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Header {

    /// Version of the model. Gates every version-dependent layout downstream.
    version_major: u16,
    version_minor: u16,

    /// Name of the model.
    name: String,

    /// Size of the settings block, in u32 units. Unknown items skip relative to it.
    setting_count: u32,

    /// Machine the model was exported on.
    machine: String,

    /// User that exported the model.
    user: String,

    /// Original file the model was exported from.
    file: String,

    /// Hash of the settings block. We don't check it, but it's good to know what it is.
    hash: u32,

    /// Raw descriptors of the items found in the header, in order.
    items: Vec<Item>,

    /// Flag table, order-preserving.
    flags: Vec<Flag>,

    /// Pose library, keyed by pose name.
    poses: HashMap<String, Pose>,
}

/// This represents the descriptor of a self-describing header item.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Item {
    item_type: ItemType,
    count: u32,
    info: u32,
}

/// This enum specifies the known types of header items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {

    /// Padding block. His `count` is his size in u32 units.
    #[default]
    Dummy,

    /// Pose library block. His `info` is the amount of text lines it contains.
    Pose,

    /// Flag table block. His `count` is the amount of flag/value pairs it contains.
    Flag,

    /// Anything we don't recognize, with the type value found in the file.
    Unknown(u32),
}

/// This represents one named entry of the rest-pose library.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Pose {
    name: String,
    rotation: Vector3<f32>,
    position: Vector3<f32>,
    scale: Vector3<f32>,
}

/// This represents a flag/value pair from the header's flag table.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Flag {
    flag: u32,
    value: u32,
}

//---------------------------------------------------------------------------//
//                              Implementations
//---------------------------------------------------------------------------//

impl From<u32> for ItemType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Dummy,
            1 => Self::Pose,
            2 => Self::Flag,
            _ => Self::Unknown(value),
        }
    }
}

impl Decodeable for Header {

    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let signature = data.read_u32()?;
        if signature != SIGNATURE {
            return Err(RXpsError::DecodingXpsUnsupportedSignature(signature));
        }

        let mut header = Self::default();
        header.version_major = data.read_u16()?;
        header.version_minor = data.read_u16()?;
        header.name = data.read_sized_string_u8()?;
        header.setting_count = data.read_u32()?;
        header.machine = data.read_sized_string_u8()?;
        header.user = data.read_sized_string_u8()?;
        header.file = data.read_sized_string_u8()?;

        if header.version_major <= LEGACY_VERSION_MAJOR && header.version_minor <= LEGACY_VERSION_MINOR {
            return Err(RXpsError::DecodingXpsUnsupportedVersion(header.version_major, header.version_minor));
        }

        // Item skip offsets are relative to the start of the settings block,
        // not to the items themselves.
        let block_start = data.stream_position()?;
        header.hash = data.read_u32()?;

        let item_count = data.read_u32()?;
        for _ in 0..item_count {
            let item_type = ItemType::from(data.read_u32()?);
            let count = data.read_u32()?;
            let info = data.read_u32()?;
            header.items.push(Item { item_type, count, info });

            match item_type {
                ItemType::Dummy => { data.seek(SeekFrom::Current(count as i64 * 4))?; },
                ItemType::Pose => header.read_poses(data, info)?,
                ItemType::Flag => header.read_flags(data, count)?,

                // Forward-compatibility escape: anything unrecognized jumps to the end of
                // the settings block. The target is the same for every unknown item, no
                // matter his own count/info. Keep it that way: downstream compatibility
                // depends on byte-exact replication of the reference decoders.
                ItemType::Unknown(_kind) => {
                    #[cfg(feature = "integration_log")] warn!("Unknown item type {} in the header of \"{}\". Skipping to the end of the settings block.", _kind, header.name);
                    data.seek(SeekFrom::Start(block_start + header.setting_count as u64 * 4))?;
                },
            }
        }

        Ok(header)
    }
}

impl Header {

    /// This function reads a flag table into the header.
    fn read_flags<R: ReadBytes>(&mut self, data: &mut R, count: u32) -> Result<()> {
        for _ in 0..count {
            let flag = data.read_u32()?;
            let value = data.read_u32()?;
            self.flags.push(Flag { flag, value });
        }

        Ok(())
    }

    /// This function reads a pose library into the header.
    ///
    /// Each line has the format `name: rx ry rz px py pz sx sy sz`. A line without a
    /// colon is an error. Bad or missing numbers decode as 0.0: pose data comes from
    /// hand-edited text, and the reference decoders never reject it.
    fn read_poses<R: ReadBytes>(&mut self, data: &mut R, line_count: u32) -> Result<()> {
        for _ in 0..line_count {
            let line = data.read_line_u8()?;
            let (name, transform) = line.split_once(':')
                .ok_or_else(|| RXpsError::DecodingXpsMalformedPoseLine(line.trim_end().to_owned()))?;

            let mut values = transform.split_whitespace().map(|value| value.parse::<f32>().unwrap_or_default());
            let pose = Pose {
                name: name.to_owned(),
                rotation: read_vector_3_from_text(&mut values),
                position: read_vector_3_from_text(&mut values),
                scale: read_vector_3_from_text(&mut values),
            };

            // Last write wins on duplicated names.
            self.poses.insert(pose.name.to_owned(), pose);
        }

        // Pose text is padded so the next field starts on a 4-byte boundary.
        let current = data.stream_position()?;
        data.seek(SeekFrom::Start(current.div_ceil(4) * 4))?;

        Ok(())
    }
}

/// This function decodes the next three whitespace-separated components of a pose line.
fn read_vector_3_from_text(values: &mut impl Iterator<Item = f32>) -> Vector3<f32> {
    let x = values.next().unwrap_or_default();
    let y = values.next().unwrap_or_default();
    let z = values.next().unwrap_or_default();

    Vector3::new(x, y, z)
}
