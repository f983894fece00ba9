use anyhow::{Context, Result};
use queendomino_score::{score, Error, Grid, LandType, Tile};

/// Place `LABEL ROW COL [CROWNS]` detections on the default board, returning the placements that
/// fell outside it.
fn place_detections(text: &str) -> Result<(Grid, Vec<Error>)> {
    let mut grid = Grid::default();
    let mut rejected = Vec::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || fields[0].starts_with('#') {
            continue;
        }
        let crowns = match fields.get(3) {
            Some(crowns) => crowns.parse()?,
            None => 0,
        };
        let tile = Tile::from_label(fields[0], crowns).with_context(|| line.to_string())?;
        let (row, col) = (fields[1].parse()?, fields[2].parse()?);
        if let Err(err) = grid.try_place(tile, row, col) {
            rejected.push(err);
        }
    }
    Ok((grid, rejected))
}

#[test]
fn test_score_detections() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let (grid, rejected) = place_detections(include_str!("detections.txt"))?;
    assert_eq!(
        rejected,
        vec![Error::OutOfBounds {
            row: 12,
            col: 3,
            height: 10,
            width: 10
        }]
    );
    assert_eq!(grid.get(5, 5), Tile::new(LandType::Forest, 1));
    assert_eq!(grid.get(6, 5), Tile::new(LandType::Desert, 2));

    let result = score(&grid);
    assert_eq!(result.get(LandType::Forest), 2);
    assert!(result.contains(LandType::City));
    assert_eq!(result.get(LandType::City), 0);
    assert_eq!(result.get(LandType::Desert), 4);
    assert!(!result.contains(LandType::Sea));
    assert_eq!(result.total(), 6);
    Ok(())
}

#[test]
fn test_unknown_label_is_rejected() {
    let err = place_detections("crown 5 5\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::UnknownTileType(String::from("crown")))
    );
    assert!(place_detections("empty 5 5 1\n").is_err());
}
