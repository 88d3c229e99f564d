// loam_core/src/storage/catalog_io.rs
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::tiles::catalog::{TileCatalog, TileVisual};
use crate::tiles::flags::TileFlags;
use crate::tiles::tile::Material;

/// On-disk shape of a catalog. Flags are stored as raw bitmasks and
/// materials as index lists, in stable order.
#[derive(Serialize, Deserialize)]
struct CatalogRecord {
    tile_size: f32,
    tiles: Vec<TileVisual>,
    flags: Vec<FlagEntry>,
    materials: Vec<MaterialEntry>,
}

#[derive(Serialize, Deserialize)]
struct FlagEntry {
    tile_index: usize,
    flags: u32,
}

#[derive(Serialize, Deserialize)]
struct MaterialEntry {
    material: Material,
    tile_indices: Vec<usize>,
}

pub fn save_catalog(path: &Path, catalog: &TileCatalog) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut flags: Vec<FlagEntry> = catalog
        .flag_entries()
        .map(|(index, flags)| FlagEntry {
            tile_index: index.0,
            flags: flags.bits(),
        })
        .collect();
    flags.sort_by_key(|entry| entry.tile_index);

    let mut materials: Vec<MaterialEntry> = catalog
        .material_entries()
        .map(|(material, bucket)| MaterialEntry {
            material,
            tile_indices: bucket.iter().map(|index| index.0).collect(),
        })
        .collect();
    materials.sort_by_key(|entry| entry.material as u8);

    let record = CatalogRecord {
        tile_size: catalog.tile_size(),
        tiles: catalog.tiles().to_vec(),
        flags,
        materials,
    };

    let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
    fs::write(path, ron::ser::to_string_pretty(&record, pretty)?)?;
    info!("saved catalog ({} tiles) to {}", catalog.len(), path.display());
    Ok(())
}

/// Load a catalog from RON. Unknown material names and malformed records
/// are fatal; entries referencing indices past the tile list are kept
/// with a warning so rendering can surface them as placeholders.
pub fn load_catalog(path: &Path) -> Result<TileCatalog, LoadError> {
    let text = fs::read_to_string(path)?;
    let record: CatalogRecord = ron::from_str(&text)?;

    let mut catalog = TileCatalog::new(record.tile_size);
    catalog.register_tiles(record.tiles);

    for entry in &record.flags {
        if entry.tile_index >= catalog.len() {
            warn!(
                "{}: flags for tile {} past the tile list",
                path.display(),
                entry.tile_index
            );
        }
        catalog.set_flags(TileFlags::from_bits_retain(entry.flags), &[entry.tile_index]);
    }

    for entry in &record.materials {
        for &index in &entry.tile_indices {
            if index >= catalog.len() {
                warn!(
                    "{}: material {} references tile {} past the tile list",
                    path.display(),
                    entry.material,
                    index
                );
            }
        }
        catalog.register_material(entry.material, &entry.tile_indices);
    }

    info!("loaded catalog ({} tiles) from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_catalog() -> TileCatalog {
        let mut catalog = TileCatalog::new(16.0);
        catalog.register_tiles((0..6).map(|index| TileVisual::Sheet {
            sheet: "terrain".to_string(),
            index,
        }));
        catalog.register_tiles([TileVisual::Named {
            name: "torch".to_string(),
        }]);
        catalog.set_flags(TileFlags::WATER, &[2, 3]);
        catalog.set_flags(TileFlags::LADDER | TileFlags::ONE_WAY, &[4]);
        catalog.register_material(Material::Dirt, &[0, 1]);
        catalog.register_material(Material::Stone, &[5]);
        catalog
    }

    #[test]
    fn catalogs_round_trip_through_ron() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.ron");

        let catalog = sample_catalog();
        save_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded.tile_size(), catalog.tile_size());
        assert_eq!(loaded.tiles(), catalog.tiles());
        assert_eq!(loaded.flags(2), TileFlags::WATER);
        assert_eq!(loaded.flags(4), TileFlags::LADDER | TileFlags::ONE_WAY);
        assert_eq!(loaded.flags(0), TileFlags::empty());
        assert_eq!(
            loaded.registered_materials(Material::Dirt),
            catalog.registered_materials(Material::Dirt)
        );
        assert_eq!(
            loaded.registered_materials(Material::Stone),
            catalog.registered_materials(Material::Stone)
        );
    }

    #[test]
    fn unknown_material_names_abort_the_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.ron");
        fs::write(
            &path,
            r#"(
                tile_size: 16.0,
                tiles: [],
                flags: [],
                materials: [(material: Slime, tile_indices: [0])],
            )"#,
        )
        .unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(LoadError::RonSpanned(_))
        ));
    }

    #[test]
    fn out_of_range_entries_survive_with_a_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.ron");

        let mut catalog = TileCatalog::new(16.0);
        catalog.register_tiles([TileVisual::Named {
            name: "lone".to_string(),
        }]);
        catalog.set_flags(TileFlags::WATER, &[9]);
        catalog.register_material(Material::Sand, &[9]);

        save_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();
        // Kept; rendering degrades to a placeholder for these.
        assert_eq!(loaded.flags(9), TileFlags::WATER);
        assert_eq!(loaded.registered_materials(Material::Sand).len(), 1);
    }
}
