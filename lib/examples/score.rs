use anyhow::{Context, Result};
use queendomino_score::{scan, Grid};

fn run() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).expect("Usage: score BOARD");
    let grid: Grid = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to open {}", path))?
        .parse()
        .with_context(|| format!("Failed to parse {}", path))?;
    eprintln!("read {} x {} board from {}", grid.height(), grid.width(), path);

    let regions = scan(&grid);
    for region in regions.iter() {
        eprintln!(
            "  {:>6}: {} tiles, {} crowns",
            region.land, region.size, region.crowns
        );
    }
    let score = queendomino_score::aggregate(&regions);
    for (land, points) in score.breakdown() {
        println!("{}: {}", land, points);
    }
    println!("total: {}", score.total());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
