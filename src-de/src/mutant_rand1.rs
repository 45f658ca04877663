use ndarray::{Array1, Array2};

/// DE/rand/1 mutation vector `pop[r0] + f * (pop[r1] - pop[r2])`.
pub(crate) fn mutant_rand1(pop: &Array2<f64>, donors: [usize; 3], f: f64) -> Array1<f64> {
    let [r0, r1, r2] = donors;
    &pop.row(r0) + &((&pop.row(r1) - &pop.row(r2)) * f)
}
