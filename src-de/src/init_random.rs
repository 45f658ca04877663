use ndarray::Array2;
use rand::Rng;

/// `npop x n` population with every entry drawn uniformly from `[low, high)`,
/// row by row.
pub(crate) fn init_random<R: Rng + ?Sized>(
    n: usize,
    npop: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Array2<f64> {
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            let u: f64 = rng.random::<f64>();
            pop[(i, j)] = low + u * (high - low);
        }
    }
    pop
}
