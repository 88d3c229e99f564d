// loam_core/src/storage/grid_bin.rs
//
// Compact binary grid format, little-endian throughout:
//
//   magic "LOAM" | version u16 | payload | crc32(payload) u32
//
// Payload: width u32, height u32, tile_size f32, background u32, then for
// each cell in raster order a foreground layer (count u8 + entries), a
// background layer, and one block entry. Entry tags: 0 none, 1 material
// (type u8, variant u8), 2 indexed (id i32).
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::LoadError;
use crate::grid::cell::Cell;
use crate::grid::world_grid::{Rgba, WorldGrid};
use crate::tiles::tile::{Material, Tile, TileIndex};

const MAGIC: [u8; 4] = *b"LOAM";
pub const VERSION: u16 = 1;

const TAG_NONE: u8 = 0;
const TAG_MATERIAL: u8 = 1;
const TAG_INDEXED: u8 = 2;

pub fn save_grid(path: &Path, map: &WorldGrid) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encode_grid(map))?;
    info!(
        "saved {}x{} grid to {}",
        map.width(),
        map.height(),
        path.display()
    );
    Ok(())
}

pub fn load_grid(path: &Path) -> Result<WorldGrid, LoadError> {
    let bytes = fs::read(path)?;
    decode_grid(&bytes)
}

pub fn encode_grid(map: &WorldGrid) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend((map.width() as u32).to_le_bytes());
    payload.extend((map.height() as u32).to_le_bytes());
    payload.extend(map.tile_size().to_le_bytes());
    payload.extend(map.background.pack().to_le_bytes());

    for cell in map.cells() {
        write_layer(&mut payload, &cell.foreground);
        write_layer(&mut payload, &cell.background);
        match &cell.block {
            Some(tile) => write_tile(&mut payload, tile),
            None => payload.push(TAG_NONE),
        }
    }

    let mut out = Vec::with_capacity(payload.len() + 10);
    out.extend(MAGIC);
    out.extend(VERSION.to_le_bytes());
    out.extend(&payload);
    out.extend(crc32fast::hash(&payload).to_le_bytes());
    out
}

fn write_layer(buf: &mut Vec<u8>, layer: &[Tile]) {
    // Layer counts are a u8 in the schema; keep the most recent entries.
    let tiles = if layer.len() > u8::MAX as usize {
        warn!("layer holds {} tiles; writing the last 255", layer.len());
        &layer[layer.len() - u8::MAX as usize..]
    } else {
        layer
    };
    buf.push(tiles.len() as u8);
    for tile in tiles {
        write_tile(buf, tile);
    }
}

fn write_tile(buf: &mut Vec<u8>, tile: &Tile) {
    match tile {
        Tile::Material { material, variant } => {
            buf.push(TAG_MATERIAL);
            buf.push(*material as u8);
            buf.push(*variant);
        }
        Tile::Indexed(TileIndex(index)) => {
            buf.push(TAG_INDEXED);
            buf.extend((*index as i32).to_le_bytes());
        }
    }
}

pub fn decode_grid(bytes: &[u8]) -> Result<WorldGrid, LoadError> {
    if bytes.len() < MAGIC.len() + 2 + 4 {
        return Err(LoadError::Truncated("header"));
    }
    if bytes[..4] != MAGIC {
        return Err(LoadError::BadMagic);
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(LoadError::UnsupportedVersion(version));
    }

    let (payload, trailer) = bytes[6..].split_at(bytes.len() - 6 - 4);
    let expected = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    if crc32fast::hash(payload) != expected {
        return Err(LoadError::ChecksumMismatch);
    }

    let mut reader = Reader {
        buf: payload,
        at: 0,
    };
    let width = reader.u32("width")? as usize;
    let height = reader.u32("height")? as usize;
    let tile_size = reader.f32("tile size")?;
    let background = Rgba::unpack(reader.u32("background colour")?);

    let cell_count = width
        .checked_mul(height)
        .ok_or(LoadError::Truncated("cell data"))?;
    // Every cell takes at least three bytes; reject impossible headers
    // before allocating.
    if cell_count.checked_mul(3).map_or(true, |n| n > reader.remaining()) {
        return Err(LoadError::Truncated("cell data"));
    }

    let mut cells = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        let foreground = read_layer(&mut reader)?;
        let background = read_layer(&mut reader)?;
        let block = read_entry(&mut reader)?;
        cells.push(Cell {
            background,
            foreground,
            block,
        });
    }

    Ok(WorldGrid::from_parts(
        width, height, tile_size, background, cells,
    ))
}

fn read_layer(reader: &mut Reader<'_>) -> Result<Vec<Tile>, LoadError> {
    let count = reader.u8("layer count")?;
    let mut tiles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        match read_entry(reader)? {
            Some(tile) => tiles.push(tile),
            // A "none" entry is only meaningful in the block slot.
            None => return Err(LoadError::UnknownTileTag(TAG_NONE)),
        }
    }
    Ok(tiles)
}

fn read_entry(reader: &mut Reader<'_>) -> Result<Option<Tile>, LoadError> {
    match reader.u8("tile tag")? {
        TAG_NONE => Ok(None),
        TAG_MATERIAL => {
            let raw = reader.u8("material")?;
            let material = Material::from_repr(raw).ok_or(LoadError::UnknownMaterial(raw))?;
            let variant = reader.u8("material variant")?;
            Ok(Some(Tile::Material { material, variant }))
        }
        TAG_INDEXED => {
            let id = reader.i32("tile id")?;
            Ok(Some(Tile::Indexed(TileIndex(id as usize))))
        }
        tag => Err(LoadError::UnknownTileTag(tag)),
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    at: usize,
}

impl Reader<'_> {
    fn remaining(&self) -> usize {
        self.buf.len() - self.at
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&[u8], LoadError> {
        if self.remaining() < n {
            return Err(LoadError::Truncated(what));
        }
        let slice = &self.buf[self.at..self.at + n];
        self.at += n;
        Ok(slice)
    }

    fn u8(&mut self, what: &'static str) -> Result<u8, LoadError> {
        Ok(self.take(1, what)?[0])
    }

    fn four(&mut self, what: &'static str) -> Result<[u8; 4], LoadError> {
        let bytes = self.take(4, what)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn u32(&mut self, what: &'static str) -> Result<u32, LoadError> {
        Ok(u32::from_le_bytes(self.four(what)?))
    }

    fn i32(&mut self, what: &'static str) -> Result<i32, LoadError> {
        Ok(i32::from_le_bytes(self.four(what)?))
    }

    fn f32(&mut self, what: &'static str) -> Result<f32, LoadError> {
        Ok(f32::from_le_bytes(self.four(what)?))
    }
}
