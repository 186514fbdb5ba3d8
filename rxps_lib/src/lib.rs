//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is the RXPS Lib, a lib to decode binary XNALara/XPS models into usable data.
//!
//! A binary XPS model is a single stream with three sections, decoded in order:
//! a versioned header (with self-describing, skippable item blocks carrying
//! pose libraries and flag tables), a skeleton, and a list of meshes with
//! per-vertex skinning data. Decoding is all-or-nothing: either you get a
//! fully populated [`Xps`], or an error and no partial data.
//!
//! For the binary layout of each section, check the [`files::xps`] module.
//!
//! [`Xps`]: crate::files::xps::Xps

pub mod binary;
pub mod error;
pub mod files;
