use anyhow::Result;
use queendomino_score::Grid;

fn main() -> Result<()> {
    let path = "tests/two_domains.board";
    let grid: Grid = std::fs::read_to_string(path)?.parse()?;
    let score = queendomino_score::score(&grid);
    println!("Board:\n{}\n\nTotal: {}", grid, score.total());
    Ok(())
}
