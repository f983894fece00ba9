use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A label or board code that is not one of the land types
    #[error("Unknown tile type {0:?}")]
    UnknownTileType(String),
    #[error("Invalid crown count in tile {tile:?}")]
    InvalidCrownCount { tile: String },
    #[error("Empty tile description")]
    InvalidTile,
    /// Checked grid access outside the board
    #[error("Cell ({row}, {col}) is outside the {height} x {width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}
