pub mod catalog_io;
pub mod grid_bin;
pub mod level_io;
pub mod path_utils;
