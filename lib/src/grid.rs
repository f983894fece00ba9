use crate::{Error, Tile};
use std::fmt;
use std::str::FromStr;

/// A player board, organized as a two-dimensional grid of tiles.
///
/// Every cell holds exactly one [Tile](crate::Tile); cells without a tile hold [Tile::EMPTY].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Tile>,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(Grid::DEFAULT_SIZE, Grid::DEFAULT_SIZE)
    }
}

impl Grid {
    /// Size of the square board used when the layout of the tiles is not known in advance.
    pub const DEFAULT_SIZE: usize = 10;

    /// Return a new `height x width` grid with all cells empty.
    pub fn new(height: usize, width: usize) -> Grid {
        Grid {
            height,
            width,
            cells: vec![Tile::EMPTY; height * width],
        }
    }

    /// Create a grid from board notation, one string per row.
    ///
    /// Cells are separated by `,`. A cell is a land code (`g p c d s f m`, or `.` for empty),
    /// optionally followed by `:` and the number of crowns. Rows shorter than the longest row
    /// are padded with empty cells.
    /// # Errors
    /// If a cell can not be parsed as a [Tile](crate::Tile).
    /// # Example
    /// ```
    /// # use queendomino_score::{Grid, LandType, Error};
    /// let grid = Grid::from_rows(&["f:2,f,f", "c,c:1,c"])?;
    /// assert_eq!((grid.height(), grid.width()), (2, 3));
    /// assert_eq!(grid.get(1, 1).land, LandType::City);
    /// assert_eq!(grid.get(1, 1).crowns, 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let parsed = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .split(',')
                    .map(str::parse)
                    .collect::<Result<Vec<Tile>, Error>>()
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let width = parsed.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Grid::new(parsed.len(), width);
        for (row, tiles) in parsed.into_iter().enumerate() {
            for (col, tile) in tiles.into_iter().enumerate() {
                grid.place(tile, row, col);
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Put `tile` on the cell at `row`, `col`, replacing what was there.
    ///
    /// # Panics
    /// If the cell is outside the grid. Use [try_place](Grid::try_place) for a checked version.
    pub fn place(&mut self, tile: Tile, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = tile;
    }

    /// Return the tile at `row`, `col`.
    ///
    /// # Panics
    /// If the cell is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    pub fn try_place(&mut self, tile: Tile, row: usize, col: usize) -> Result<(), Error> {
        self.check(row, col)?;
        self.place(tile, row, col);
        Ok(())
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<Tile, Error> {
        self.check(row, col)?;
        Ok(self.get(row, col))
    }

    /// Iterate over the rows of the grid, top to bottom.
    ///
    /// Always yields `height` rows, each `width` tiles long.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) is outside the {} x {} grid",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }

    fn check(&self, row: usize, col: usize) -> Result<(), Error> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid_string = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(Tile::to_string)
                    .collect::<Vec<String>>()
                    .join(",")
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", grid_string)
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse a grid in board notation with one row per line. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Grid::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LandType;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!((grid.height(), grid.width()), (3, 4));
        assert!(grid.rows().flatten().all(Tile::is_empty));
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_rows_without_columns() {
        let grid = Grid::new(3, 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn test_default_size() {
        let grid = Grid::default();
        assert_eq!((grid.height(), grid.width()), (10, 10));
    }

    #[test]
    fn test_place_and_get() {
        let mut grid = Grid::new(2, 3);
        let tile = Tile::new(LandType::Sea, 2);
        grid.place(tile, 1, 2);
        assert_eq!(grid.get(1, 2), tile);
        assert_eq!(grid.get(0, 2), Tile::EMPTY);
        grid.place(Tile::new(LandType::Mine, 0), 1, 2);
        assert_eq!(grid.get(1, 2).land, LandType::Mine);
    }

    #[test]
    #[should_panic]
    fn test_place_out_of_bounds_panics() {
        let mut grid = Grid::new(2, 3);
        grid.place(Tile::new(LandType::Sea, 0), 0, 3);
    }

    #[test]
    fn test_checked_access() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(
            grid.try_place(Tile::EMPTY, 2, 0),
            Err(Error::OutOfBounds {
                row: 2,
                col: 0,
                height: 2,
                width: 3
            })
        );
        assert!(grid.try_get(0, 3).is_err());
        assert!(grid.try_place(Tile::new(LandType::City, 1), 1, 1).is_ok());
        assert_eq!(grid.try_get(1, 1), Ok(Tile::new(LandType::City, 1)));
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = Grid::from_rows(&["f,f,f", "c"]).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 3));
        assert_eq!(grid.get(1, 0).land, LandType::City);
        assert!(grid.get(1, 2).is_empty());
    }

    #[test]
    fn test_display() {
        let text = "f:2,f,.\nc,c:1,c";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_empty_input() {
        let grid: Grid = "".parse().unwrap();
        assert_eq!((grid.height(), grid.width()), (0, 0));
        assert_eq!(grid.rows().count(), 0);
    }
}
