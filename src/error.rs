use std::path::PathBuf;

use crate::game::Coord;

/// Errors raised by board lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate {coord} is outside the board of radius {radius}")]
    InvalidCoordinate { coord: Coord, radius: i32 },
}

/// Reasons a selection does not form a movable group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no marbles selected")]
    Empty,

    #[error("at most 3 marbles can move together (selected {0})")]
    TooMany(usize),

    #[error("selected marble is not on a playing field")]
    OffBoard,

    #[error("selected marbles are not adjacent")]
    NotAdjacent,

    #[error("selected marbles are not in a straight line")]
    NotInLine,
}

/// Errors that can occur while reading or applying an initial position.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to read setup file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: unknown color '{token}'")]
    UnknownColor { line: usize, token: String },

    #[error("line {line}: malformed coordinate '{token}' (expected i,j)")]
    MalformedCoordinate { line: usize, token: String },

    #[error("line {line}: {coord} is not a playing field")]
    OffBoard { line: usize, coord: Coord },

    #[error("line {line}: {coord} is already occupied")]
    Occupied { line: usize, coord: Coord },

    #[error("no starting position for {0} players (expected 2, 3 or 4)")]
    PlayerCount(u8),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
