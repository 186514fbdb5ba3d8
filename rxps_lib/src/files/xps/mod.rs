//---------------------------------------------------------------------------//
// Copyright (c) 2022-2024 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted XPS (RXPS) project,
// which can be found here: https://github.com/Frodo45127/rxps.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rxps/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is a module to read binary XNALara/XPS models.
//!
//! Binary XPS models are the posable model format used by XNALara/XPS and his many
//! viewer/exporter forks. A model file is one little-endian stream with this layout:
//!
//! | Section  | Contents |
//! | -------- | -------- |
//! | Header   | u32 signature, u16 version major, u16 version minor, sized string name, u32 setting count, sized strings machine/user/file, then the settings block: u32 hash, u32 item count, and that many self-describing items. Check [`header`] for the item layouts. |
//! | Skeleton | u32 bone count, then per bone: sized string name, i16 parent index, f32x3 rest position. |
//! | Meshes   | u32 mesh count, then per mesh: sized string name, u32 UV layer count, u32 texture count, textures (sized string path, u32 layer), u32 vertex count, vertices (f32x3 position, f32x3 normal, u8x4 colour, one f32x2 UV per UV layer, and an optional skin block), u32 triangle count, then 3 u32 indices per triangle. |
//!
//! The skin block only exists on models with bones: on versions over 2.x each vertex
//! declares an i16 weight count (negative meaning no skin data at all), while older
//! supported versions always store four pairs. Indices and weights are stored as two
//! consecutive runs, paired by position.
//!
//! Decoding either produces a complete [`Xps`] or fails: there are no partial models.

use getset::*;
use nalgebra::{Vector2, Vector3, Vector4};
use serde_derive::{Serialize, Deserialize};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::binary::ReadBytes;
use crate::error::{RXpsError, Result};
use crate::files::Decodeable;

use self::header::Header;

pub mod header;


/// Extension used by binary XPS models.
pub const EXTENSION: &str = ".xps";

//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds an entire XPS model decoded in memory.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Xps {

    /// Skeleton of the model, in file order.
    bones: Vec<Bone>,

    /// Renderable parts of the model, in file order.
    meshes: Vec<Mesh>,
}

/// This represents one joint of the skeleton.
///
/// The parent index is stored as read: it's not validated against the bone list's
/// bounds, nor checked for cycles. -1 marks a root bone.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Bone {
    name: String,
    parent: i16,
    position: Vector3<f32>,
}

/// This represents one renderable part of the model.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Mesh {
    name: String,

    /// Amount of UV sets each vertex of this mesh carries.
    uv_layer_count: u32,
    textures: Vec<Texture>,
    vertices: Vec<Vertex>,

    /// Flat triangle list, three indices per triangle.
    indices: Vec<u32>,
}

/// This represents a texture reference of a mesh.
#[derive(PartialEq, Eq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Texture {
    path: String,
    layer: u32,
}

/// This represents one vertex of a mesh.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Vertex {
    position: Vector3<f32>,
    normal: Vector3<f32>,

    /// Packed RGBA colour.
    color: Vector4<u8>,

    /// One UV set per UV layer of the owning mesh, in order.
    uvs: Vec<Vector2<f32>>,
    skin: SkinWeights,
}

/// This represents the bone influences of a vertex.
///
/// Both lists have the same length, paired by position. -1 in the bone list is reserved.
#[derive(PartialEq, Clone, Debug, Default, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct SkinWeights {
    bones: Vec<i16>,
    weights: Vec<f32>,
}

//---------------------------------------------------------------------------//
//                           Implementation of Xps
//---------------------------------------------------------------------------//

impl Decodeable for Xps {

    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let header = Header::decode(data)?;

        let mut xps = Self::default();
        xps.read_bones(data)?;
        xps.read_meshes(data, &header)?;

        Ok(xps)
    }
}

impl Xps {

    /// This function tries to read a whole model from the file at the provided path.
    ///
    /// All-or-nothing: any decoding failure aborts without returning partial data, and
    /// the file is closed on every exit path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|_| RXpsError::ModelFileNotFound(path.to_string_lossy().to_string()))?;
        let mut data = BufReader::new(file);

        Self::decode(&mut data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(From::from)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self).map_err(From::from)
    }

    /// This function reads the skeleton section.
    fn read_bones<R: ReadBytes>(&mut self, data: &mut R) -> Result<()> {
        let bone_count = data.read_u32()?;
        for _ in 0..bone_count {
            self.bones.push(Bone {
                name: data.read_sized_string_u8()?,
                parent: data.read_i16()?,
                position: data.read_vector_3_f32()?,
            });
        }

        Ok(())
    }

    /// This function reads the mesh section.
    ///
    /// The header decides the skin layout: models over version 2.x declare a per-vertex
    /// weight count, older supported ones always store four weights. Models without
    /// bones carry no skin data at all.
    fn read_meshes<R: ReadBytes>(&mut self, data: &mut R, header: &Header) -> Result<()> {
        let mesh_count = data.read_u32()?;
        let vary_weighted = *header.version_major() > 2;
        let skinned = !self.bones.is_empty();

        for _ in 0..mesh_count {
            let mut mesh = Mesh {
                name: data.read_sized_string_u8()?,
                uv_layer_count: data.read_u32()?,
                ..Default::default()
            };

            let texture_count = data.read_u32()?;
            for _ in 0..texture_count {
                mesh.textures.push(Texture {
                    path: data.read_sized_string_u8()?,
                    layer: data.read_u32()?,
                });
            }

            let vertex_count = data.read_u32()?;
            for _ in 0..vertex_count {
                let vertex = Self::read_vertex(data, mesh.uv_layer_count, vary_weighted, skinned)?;
                mesh.vertices.push(vertex);
            }

            let triangle_count = data.read_u32()?;
            for _ in 0..triangle_count as u64 * 3 {
                mesh.indices.push(data.read_u32()?);
            }

            self.meshes.push(mesh);
        }

        Ok(())
    }

    /// This function reads a single vertex.
    fn read_vertex<R: ReadBytes>(data: &mut R, uv_layer_count: u32, vary_weighted: bool, skinned: bool) -> Result<Vertex> {
        let mut vertex = Vertex {
            position: data.read_vector_3_f32()?,
            normal: data.read_vector_3_f32()?,
            color: data.read_vector_4_u8()?,
            ..Default::default()
        };

        for _ in 0..uv_layer_count {
            vertex.uvs.push(data.read_vector_2_f32()?);
        }

        if !skinned {
            return Ok(vertex);
        }

        let weight_count = if vary_weighted { data.read_i16()? } else { 4 };

        // A negative count means "no skin data for this vertex", with no
        // index/weight bytes to consume.
        if weight_count < 0 {
            return Ok(vertex);
        }

        for _ in 0..weight_count {
            vertex.skin.bones.push(data.read_i16()?);
        }

        for _ in 0..weight_count {
            vertex.skin.weights.push(data.read_f32()?);
        }

        Ok(vertex)
    }
}
