use crate::{scan, Grid, LandType, Region};
use std::collections::BTreeMap;
use std::iter::FromIterator;

/// Score per land type, summed over all regions of that type.
///
/// Land types without any region are absent and read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score(BTreeMap<LandType, u64>);

impl Score {
    pub fn new() -> Score {
        Score::default()
    }

    /// Add the score of `region` to its land type. Empty regions are ignored.
    pub fn add(&mut self, region: &Region) {
        if region.land == LandType::Empty {
            return;
        }
        let points = self.0.entry(region.land).or_insert(0);
        *points = points.saturating_add(region.score());
    }

    /// The score for `land`, 0 if no region of that type was found.
    pub fn get(&self, land: LandType) -> u64 {
        self.0.get(&land).copied().unwrap_or(0)
    }

    /// Whether at least one region of type `land` was found, even if it scored nothing.
    pub fn contains(&self, land: LandType) -> bool {
        self.0.contains_key(&land)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the land types that were found, in [LandType::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (LandType, u64)> + '_ {
        self.0.iter().map(|(&land, &score)| (land, score))
    }

    /// Every scoring land type with its score, including the ones that were not found.
    pub fn breakdown(&self) -> Vec<(LandType, u64)> {
        LandType::ALL
            .iter()
            .map(|&land| (land, self.get(land)))
            .collect()
    }

    /// Sum of the scores of all land types, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0
            .values()
            .fold(0, |total: u64, &points| total.saturating_add(points))
    }
}

impl<'a> Extend<&'a Region> for Score {
    fn extend<I: IntoIterator<Item = &'a Region>>(&mut self, iter: I) {
        for region in iter {
            self.add(region);
        }
    }
}

impl Extend<Region> for Score {
    fn extend<I: IntoIterator<Item = Region>>(&mut self, iter: I) {
        for region in iter {
            self.add(&region);
        }
    }
}

impl<'a> FromIterator<&'a Region> for Score {
    fn from_iter<I: IntoIterator<Item = &'a Region>>(iter: I) -> Self {
        let mut score = Score::new();
        score.extend(iter);
        score
    }
}

impl FromIterator<Region> for Score {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut score = Score::new();
        score.extend(iter);
        score
    }
}

/// Sum the region scores per land type.
///
/// The result does not depend on the order of `regions`.
pub fn aggregate(regions: &[Region]) -> Score {
    regions.iter().collect()
}

/// Find the regions on `grid` and score them.
///
/// # Example
/// ```
/// # use queendomino_score::{score, Grid, LandType, Error};
/// let grid = Grid::from_rows(&["f:2,f,f", "c,c:1,c"])?;
/// let score = score(&grid);
/// assert_eq!(score.get(LandType::Forest), 6);
/// assert_eq!(score.get(LandType::City), 3);
/// assert_eq!(score.get(LandType::Sea), 0);
/// assert_eq!(score.total(), 9);
/// # Ok::<(), Error>(())
/// ```
pub fn score(grid: &Grid) -> Score {
    aggregate(&scan(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(land: LandType, size: u32, crowns: u64) -> Region {
        Region { land, size, crowns }
    }

    #[test]
    fn test_aggregate_sums_per_type() {
        let regions = vec![
            region(LandType::Forest, 3, 2),
            region(LandType::City, 2, 1),
            region(LandType::Forest, 4, 1),
        ];
        let score = aggregate(&regions);
        assert_eq!(score.get(LandType::Forest), 10);
        assert_eq!(score.get(LandType::City), 2);
        assert_eq!(score.len(), 2);
        assert_eq!(score.total(), 12);
    }

    #[test]
    fn test_zero_crowns_present_with_zero() {
        let score = aggregate(&[region(LandType::Mine, 4, 0)]);
        assert!(score.contains(LandType::Mine));
        assert_eq!(score.get(LandType::Mine), 0);
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn test_empty_regions_ignored() {
        let score = aggregate(&[region(LandType::Empty, 5, 3)]);
        assert!(score.is_empty());
    }

    #[test]
    fn test_breakdown_lists_all_types() {
        let score = aggregate(&[region(LandType::Sea, 2, 2)]);
        let breakdown = score.breakdown();
        assert_eq!(breakdown.len(), LandType::ALL.len());
        assert_eq!(breakdown[0], (LandType::Grass, 0));
        assert_eq!(breakdown[4], (LandType::Sea, 4));
        assert_eq!(score.iter().collect::<Vec<_>>(), vec![(LandType::Sea, 4)]);
    }

    #[test]
    fn test_huge_scores_saturate() {
        let regions = [
            region(LandType::City, u32::MAX, u64::MAX / 2),
            region(LandType::City, 2, u64::MAX / 2),
            region(LandType::Sea, 1, 1),
        ];
        let score = aggregate(&regions);
        assert_eq!(score.get(LandType::City), u64::MAX);
        assert_eq!(score.total(), u64::MAX);
    }

    #[test]
    fn test_collect_owned_regions() {
        let score: Score = vec![region(LandType::Plains, 1, 1), region(LandType::Plains, 2, 2)]
            .into_iter()
            .collect();
        assert_eq!(score.get(LandType::Plains), 5);
    }
}
