use pyo3::{
    create_exception, exceptions::PyException, prelude::*, types::PyDict, wrap_pyfunction, PyErr,
};
use queendomino_score::{Grid, Score};

create_exception!(pyqueendomino_score, QueendominoScoreException, PyException);

fn process_score(score: &Score, py: Python) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    for (land, points) in score.breakdown() {
        dict.set_item(land.name(), points)?;
    }
    dict.set_item("total", score.total())?;
    Ok(dict.into())
}

/// Score a board given in board notation, one string per row.
#[pyfunction]
fn score_board(rows: Vec<String>, py: Python) -> PyResult<PyObject> {
    let grid = Grid::from_rows(rows.as_slice()).map_err(QueendominoScoreError::from)?;
    let score = queendomino_score::score(&grid);
    process_score(&score, py)
}

/// List the regions on a board as `(land, size, crowns)` tuples.
#[pyfunction]
fn find_regions(rows: Vec<String>) -> PyResult<Vec<(String, u32, u64)>> {
    let grid = Grid::from_rows(rows.as_slice()).map_err(QueendominoScoreError::from)?;
    let regions = queendomino_score::scan(&grid)
        .iter()
        .map(|region| (region.land.to_string(), region.size, region.crowns))
        .collect();
    Ok(regions)
}

/// Wrapper around queendomino_score::Error so we convert to PyErr
struct QueendominoScoreError(queendomino_score::Error);

impl From<queendomino_score::Error> for QueendominoScoreError {
    fn from(err: queendomino_score::Error) -> QueendominoScoreError {
        QueendominoScoreError(err)
    }
}

impl From<QueendominoScoreError> for PyErr {
    fn from(err: QueendominoScoreError) -> PyErr {
        PyErr::new::<QueendominoScoreException, String>(err.0.to_string())
    }
}

#[pymodule]
fn pyqueendomino_score(py: Python, m: &PyModule) -> PyResult<()> {
    m.add(
        "QueendominoScoreException",
        py.get_type::<QueendominoScoreException>(),
    )?;
    m.add_function(wrap_pyfunction!(score_board, m)?)?;
    m.add_function(wrap_pyfunction!(find_regions, m)?)?;
    Ok(())
}
