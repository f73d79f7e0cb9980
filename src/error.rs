use std::path::PathBuf;

use thiserror::Error;

/// Reasons a level is refused at load time.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML map: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("map has no cells")]
    Empty,

    /// Every row must be as long as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({col}, {row}) has code {value}, only 0 and 1 are allowed")]
    InvalidCell { col: usize, row: usize, value: u8 },

    /// The outer ring must be solid so every ray terminates.
    #[error("boundary cell ({col}, {row}) is open")]
    OpenBoundary { col: usize, row: usize },

    #[error("tile size must be positive, got {0}")]
    BadTileSize(f32),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("frame buffer of {width}x{height} pixels does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("failed to allocate {width}x{height} frame buffer: {source}")]
    Allocation {
        width: usize,
        height: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum FlagError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },

    #[error("random map side length must be between {min} and {max} (got {got})")]
    RandomMapSide { min: usize, max: usize, got: usize },

    #[error("--random-map requires a valid number, got `{0}`")]
    BadNumber(String),

    #[error("cannot use both --random-map and --map at the same time")]
    ConflictingMaps,

    #[error("unknown flag `{0}`")]
    Unknown(String),
}
