//! Single pass connected region labeling.
//!
//! The grid is scanned row by row, left to right. A cell only looks at its left neighbor (the
//! region currently being extended) and the neighbor above (the region recorded for this column
//! in the previous row). Two provisional regions that turn out to be connected, like the arms of
//! a `U`, are merged on the spot: the region above is folded into the current one and left behind
//! as a link to it.
use crate::{Grid, LandType};
use log::{debug, trace};

/// A maximal 4-connected group of cells with the same land type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub land: LandType,
    /// Number of cells
    pub size: u32,
    /// Total number of crowns on the cells
    pub crowns: u64,
}

impl Region {
    /// The region score: size times crowns, saturating at `u64::MAX`.
    pub fn score(&self) -> u64 {
        u64::from(self.size).saturating_mul(self.crowns)
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Canonical {
        land: LandType,
        size: u32,
        crowns: u64,
    },
    Merged {
        into: usize,
    },
}

/// Region records of a single scan, addressed by index.
#[derive(Debug, Default)]
struct Arena {
    slots: Vec<Slot>,
}

impl Arena {
    fn open(&mut self, land: LandType) -> usize {
        self.slots.push(Slot::Canonical {
            land,
            size: 0,
            crowns: 0,
        });
        let handle = self.slots.len() - 1;
        trace!("open region {} ({})", handle, land);
        handle
    }

    /// Follow merge links to the canonical region, pointing every visited slot straight at it.
    fn resolve(&mut self, handle: usize) -> usize {
        let mut root = handle;
        while let Slot::Merged { into } = self.slots[root] {
            root = into;
        }
        let mut cur = handle;
        while let Slot::Merged { into } = self.slots[cur] {
            self.slots[cur] = Slot::Merged { into: root };
            cur = into;
        }
        root
    }

    /// Land type of a canonical region.
    fn land(&self, handle: usize) -> LandType {
        match self.slots[handle] {
            Slot::Canonical { land, .. } => land,
            Slot::Merged { .. } => unreachable!("region {} is not canonical", handle),
        }
    }

    fn add(&mut self, handle: usize, cell_crowns: u32) {
        if let Slot::Canonical { size, crowns, .. } = &mut self.slots[handle] {
            *size += 1;
            *crowns += u64::from(cell_crowns);
        }
    }

    /// Fold canonical region `from` into canonical region `into`.
    fn merge(&mut self, from: usize, into: usize) {
        if let Slot::Canonical { size, crowns, .. } = self.slots[from] {
            if let Slot::Canonical {
                size: into_size,
                crowns: into_crowns,
                ..
            } = &mut self.slots[into]
            {
                *into_size += size;
                *into_crowns += crowns;
            }
            self.slots[from] = Slot::Merged { into };
            debug!("merge region {} into {}", from, into);
        }
    }

    fn into_regions(self) -> Vec<Region> {
        self.slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Canonical { land, size, crowns } if land != LandType::Empty => {
                    Some(Region { land, size, crowns })
                }
                _ => None,
            })
            .collect()
    }
}

/// Find all land regions on `grid`.
///
/// Regions are returned in the order in which the scan first met them. Empty cells are never
/// part of a returned region.
/// # Example
/// ```
/// # use queendomino_score::{scan, Grid, LandType, Region, Error};
/// let grid = Grid::from_rows(&["f,c,f", "f,f,f:1"])?;
/// let regions = scan(&grid);
/// assert_eq!(
///     regions,
///     vec![
///         Region { land: LandType::Forest, size: 5, crowns: 1 },
///         Region { land: LandType::City, size: 1, crowns: 0 },
///     ]
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn scan(grid: &Grid) -> Vec<Region> {
    let mut arena = Arena::default();
    // the row above row 0 holds no region at all, so nothing can match it
    let mut previous: Vec<Option<usize>> = vec![None; grid.width()];
    let mut current: Vec<Option<usize>> = vec![None; grid.width()];

    for row in grid.rows() {
        let mut region = previous.first().copied().flatten();
        for (col, tile) in row.iter().enumerate() {
            let left = region.map(|handle| arena.resolve(handle));
            let above = previous[col].map(|handle| arena.resolve(handle));

            let handle = match (left, above) {
                (Some(left), _) if arena.land(left) == tile.land => {
                    if let Some(above) = above {
                        if above != left && arena.land(above) == tile.land {
                            arena.merge(above, left);
                        }
                    }
                    left
                }
                (_, Some(above)) if arena.land(above) == tile.land => above,
                _ => arena.open(tile.land),
            };

            arena.add(handle, tile.crowns);
            current[col] = Some(handle);
            region = Some(handle);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let regions = arena.into_regions();
    debug!(
        "scanned {} x {} grid: {} regions",
        grid.height(),
        grid.width(),
        regions.len()
    );
    regions
}
