use anyhow::{Context, Result};
use queendomino_score::{Grid, Tile};
use std::time::Instant;

/// Build a board from detections, one per line: `LABEL ROW COL [CROWNS]`.
///
/// This mimics the tile recognizer handing its results to the scoring library. Detections are
/// placed on the default 10 x 10 board with the checked API, so a detection outside the board is
/// reported instead of aborting.
fn run() -> Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .expect("Usage: recognize DETECTIONS");
    let t0 = Instant::now();
    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to open {}", path))?;

    let mut grid = Grid::default();
    for (lineno, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || fields[0].starts_with('#') {
            continue;
        }
        if fields.len() < 3 {
            anyhow::bail!("{}:{}: expected LABEL ROW COL [CROWNS]", path, lineno + 1);
        }
        let crowns = match fields.get(3) {
            Some(crowns) => crowns.parse()?,
            None => 0,
        };
        let tile = Tile::from_label(fields[0], crowns)
            .with_context(|| format!("{}:{}", path, lineno + 1))?;
        let (row, col) = (fields[1].parse()?, fields[2].parse()?);
        if let Err(err) = grid.try_place(tile, row, col) {
            eprintln!("{}:{}: {}", path, lineno + 1, err);
        }
    }

    let score = queendomino_score::score(&grid);
    println!("scoring took {:?}", t0.elapsed());
    println!("{}\n", grid);
    for (land, points) in score.breakdown() {
        println!("{}: {}", land, points);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
