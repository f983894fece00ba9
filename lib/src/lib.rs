//! A library that scores a Queendomino player board
//!
//! The board is a grid of land tiles, some of them showing crowns. Connected tiles of the same land
//! type form a region, and every region scores its number of tiles times its number of crowns.
//! This library finds the regions in a single pass over the board and sums the scores per land type.
//!
//! # Basic usage
//! ```
//! # use queendomino_score::{Grid, LandType, Error};
//! let grid: Grid = "
//!     f,f,c,f,f:2
//!     f,f,c,f,f
//!     c,c,c,c,c:1
//! "
//! .parse()?;
//! let score = queendomino_score::score(&grid);
//! for (land, points) in score.breakdown() {
//!     println!("{}: {}", land, points);
//! }
//! assert_eq!(score.get(LandType::Forest), 8);
//! assert_eq!(score.get(LandType::City), 7);
//! # Ok::<(), Error>(())
//! ```
//! A board is written one row per line, cells separated by `,`.
//!
//! Where: `g p c d s f m` are grass, plains, city, desert, sea, forest and mine, `.` is an empty
//! cell, and `:n` after a land code gives the number of crowns on the tile.
//!
//! ```text
//! .,.,g,g:1,.
//! s,s,c,g,.
//! s:1,f,f,f:2,m
//! ```

mod error;
mod grid;
mod scan;
mod score;
mod tile;

pub use error::Error;
pub use grid::Grid;
pub use scan::{scan, Region};
pub use score::{aggregate, score, Score};
pub use tile::{LandType, Tile};
