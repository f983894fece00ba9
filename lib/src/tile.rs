use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The kind of land on a tile.
///
/// `Empty` marks a cell where no tile was placed. It takes part in the region scan like any other
/// kind but never scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LandType {
    Grass,
    Plains,
    City,
    Desert,
    Sea,
    Forest,
    Mine,
    Empty,
}

impl LandType {
    /// All land types that can score, in display order.
    pub const ALL: [LandType; 7] = [
        LandType::Grass,
        LandType::Plains,
        LandType::City,
        LandType::Desert,
        LandType::Sea,
        LandType::Forest,
        LandType::Mine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LandType::Grass => "grass",
            LandType::Plains => "plains",
            LandType::City => "city",
            LandType::Desert => "desert",
            LandType::Sea => "sea",
            LandType::Forest => "forest",
            LandType::Mine => "mine",
            LandType::Empty => "empty",
        }
    }

    /// The single character used for this land type in board notation.
    pub fn code(self) -> char {
        match self {
            LandType::Grass => 'g',
            LandType::Plains => 'p',
            LandType::City => 'c',
            LandType::Desert => 'd',
            LandType::Sea => 's',
            LandType::Forest => 'f',
            LandType::Mine => 'm',
            LandType::Empty => '.',
        }
    }

    pub fn from_code(code: char) -> Result<LandType, Error> {
        match code {
            'g' => Ok(LandType::Grass),
            'p' => Ok(LandType::Plains),
            'c' => Ok(LandType::City),
            'd' => Ok(LandType::Desert),
            's' => Ok(LandType::Sea),
            'f' => Ok(LandType::Forest),
            'm' => Ok(LandType::Mine),
            '.' => Ok(LandType::Empty),
            _ => Err(Error::UnknownTileType(code.to_string())),
        }
    }
}

impl fmt::Display for LandType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for LandType {
    type Err = Error;

    /// Parse a land type label.
    ///
    /// Besides the regular names this accepts `"dessert"` and `"forrest"`, the labels produced by
    /// the tile detection model. `"empty"` is rejected: an empty cell is never a detection, it is
    /// written `.` in board notation.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "grass" => Ok(LandType::Grass),
            "plains" => Ok(LandType::Plains),
            "city" => Ok(LandType::City),
            "desert" | "dessert" => Ok(LandType::Desert),
            "sea" => Ok(LandType::Sea),
            "forest" | "forrest" => Ok(LandType::Forest),
            "mine" => Ok(LandType::Mine),
            _ => Err(Error::UnknownTileType(label.to_string())),
        }
    }
}

/// A single board cell: the land type and the number of crowns printed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub land: LandType,
    pub crowns: u32,
}

impl Default for Tile {
    fn default() -> Self {
        Tile::EMPTY
    }
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        land: LandType::Empty,
        crowns: 0,
    };

    pub fn new(land: LandType, crowns: u32) -> Tile {
        Tile { land, crowns }
    }

    /// Create a tile from a detection label.
    ///
    /// # Errors
    /// If `label` is not a land type. Detections of other classes (e.g. `"crown"`) must be
    /// filtered out before.
    /// # Example
    /// ```
    /// # use queendomino_score::{LandType, Tile, Error};
    /// let tile = Tile::from_label("forrest", 1)?;
    /// assert_eq!(tile, Tile::new(LandType::Forest, 1));
    /// assert!(Tile::from_label("crown", 0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_label(label: &str, crowns: u32) -> Result<Tile, Error> {
        Ok(Tile::new(label.parse()?, crowns))
    }

    pub fn is_empty(&self) -> bool {
        self.land == LandType::Empty
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.crowns > 0 {
            write!(f, "{}:{}", self.land.code(), self.crowns)
        } else {
            write!(f, "{}", self.land.code())
        }
    }
}

impl FromStr for Tile {
    type Err = Error;

    /// Parse a tile in board notation: a land code optionally followed by `:` and a crown count,
    /// e.g. `f`, `c:1` or `.` for an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (code, crowns) = match s.split_once(':') {
            Some((code, crowns)) => {
                let crowns = crowns
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidCrownCount {
                        tile: s.to_string(),
                    })?;
                (code.trim(), crowns)
            }
            None => (s, 0),
        };
        let mut chars = code.chars();
        let land = match (chars.next(), chars.next()) {
            (None, _) => return Err(Error::InvalidTile),
            (Some(c), None) => LandType::from_code(c)?,
            _ => return Err(Error::UnknownTileType(code.to_string())),
        };
        Ok(Tile::new(land, crowns))
    }
}
