use ndarray::Array2;

use crate::error::{DEError, Result};
use crate::objective::Objective;

/// Re-evaluate every row of `population` and return the index and fitness of
/// the first smallest one.
pub fn best_individual<O>(func: &O, population: &Array2<f64>) -> Result<(usize, f64)>
where
    O: Objective + ?Sized,
{
    if population.nrows() == 0 {
        return Err(DEError::NotInitialized);
    }
    let mut best = (0usize, f64::INFINITY);
    for (i, row) in population.rows().into_iter().enumerate() {
        let f = func.evaluate(&row.to_owned())?;
        if i == 0 || f < best.1 {
            best = (i, f);
        }
    }
    Ok(best)
}
