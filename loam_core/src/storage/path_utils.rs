// loam_core/src/storage/path_utils.rs
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use log::error;

use crate::constants::{CATALOG_RON, LEVELS_FOLDER};

/// Per-user application directory; logs and configs live here.
pub fn app_dir() -> Option<PathBuf> {
    match ProjectDirs::from("com", "loam", "engine") {
        Some(dirs) => Some(dirs.config_dir().to_path_buf()),
        None => {
            error!("Could not resolve app directory.");
            None
        }
    }
}

pub fn levels_dir(save_root: &Path) -> PathBuf {
    save_root.join(LEVELS_FOLDER)
}

pub fn catalog_path(save_root: &Path) -> PathBuf {
    save_root.join(CATALOG_RON)
}

/// Generate a level filename from a level name.
pub fn level_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.ron", sanitized.to_lowercase())
}

pub fn level_path(save_root: &Path, name: &str) -> PathBuf {
    levels_dir(save_root).join(level_filename(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(level_filename("Mossy Hollow"), "mossy_hollow.ron");
        assert_eq!(level_filename("cave-3"), "cave-3.ron");
        assert_eq!(level_filename("What?!"), "what__.ron");
    }
}
