// loam_core/src/error.rs
use std::fmt;
use std::io;

/// Error type for catalog, level and binary grid loading.
///
/// Load errors are fatal: the caller gets the error and no partially
/// constructed state.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
    /// File does not start with the grid magic bytes.
    BadMagic,
    /// File carries a format version this build does not understand.
    UnsupportedVersion(u16),
    /// A cell entry used a tag outside the known set.
    UnknownTileTag(u8),
    /// A material discriminant outside the registered categories.
    UnknownMaterial(u8),
    /// Payload checksum did not match the trailer.
    ChecksumMismatch,
    /// File ended before the declared data.
    Truncated(&'static str),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for LoadError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for LoadError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
            Self::BadMagic => write!(f, "not a loam grid file (bad magic)"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported grid format version: {}", v),
            Self::UnknownTileTag(t) => write!(f, "unknown tile entry tag: {}", t),
            Self::UnknownMaterial(m) => write!(f, "unknown material discriminant: {}", m),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::Truncated(what) => write!(f, "file ended while reading {}", what),
        }
    }
}

impl std::error::Error for LoadError {}
