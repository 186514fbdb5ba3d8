//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains all kind of errors used inside this crate.
//!
//! Not much to say appart of that, really.

use thiserror::Error;

/// Custom `Result` type, to always return our custom error.
pub type Result<T, E = RXpsError> = core::result::Result<T, E>;

/// Custom error type for the lib.
#[derive(Error, Debug)]
pub enum RXpsError {

    #[error("The file with the following path hasn't been found or cannot be opened: {0}.")]
    ModelFileNotFound(String),

    #[error("Unsupported signature: {0}. This is either not a binary XPS model, or it's one but it's corrupted.")]
    DecodingXpsUnsupportedSignature(u32),

    #[error("Unsupported XPS version: {0}.{1}. Models up to version 2.12 use the legacy layout, which is not supported.")]
    DecodingXpsUnsupportedVersion(u16, u16),

    #[error("Malformed pose line: \"{0}\". A pose line must separate the bone name from his transform values with a colon.")]
    DecodingXpsMalformedPoseLine(String),

    #[error("Error trying to encode the String \"{0}\": his length of {1} bytes is bigger than a length prefix can hold.")]
    EncodingStringLengthError(String, usize),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Represents all other cases of `serde_json::Error`.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
