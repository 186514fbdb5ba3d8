//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the decode seam used by this lib, and the file types it can decode.
//!
//! The only file type supported right now is the binary XPS model. For its binary format
//! spec, please **check the [`xps`] module documentation**.

use crate::binary::ReadBytes;
use crate::error::Result;

pub mod xps;

//---------------------------------------------------------------------------//
//                           Trait Definitions
//---------------------------------------------------------------------------//

/// A generic trait to implement decoding logic from anything implementing [`ReadBytes`]
/// into structured types.
pub trait Decodeable: Send + Sync {

    /// This method provides a generic and expandable way to decode anything implementing
    /// [`ReadBytes`] into the implementor's structure.
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> where Self: Sized;
}
