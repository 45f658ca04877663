use ndarray::Array1;
use rand::Rng;

/// Crossover walking all genes circularly from a random start.
///
/// The first visited gene always comes from the mutant and costs no draw;
/// each following gene takes one uniform draw and comes from the mutant when
/// the draw is below `cr`.
pub(crate) fn circular_crossover<R: Rng + ?Sized>(
    target: &Array1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let mut trial = Array1::<f64>::zeros(n);
    let mut j = rng.random_range(0..n);
    for k in 0..n {
        if k == 0 || rng.random::<f64>() < cr {
            trial[j] = mutant[j];
        } else {
            trial[j] = target[j];
        }
        j = (j + 1) % n;
    }
    trial
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cr_zero_takes_exactly_one_gene() {
        let mut rng = StdRng::seed_from_u64(3);
        let target = Array1::from(vec![0.0; 6]);
        let mutant = Array1::from(vec![1.0; 6]);
        for _ in 0..100 {
            let trial = circular_crossover(&target, &mutant, 0.0, &mut rng);
            assert_eq!(trial.sum(), 1.0);
        }
    }

    #[test]
    fn test_cr_one_takes_mutant() {
        let mut rng = StdRng::seed_from_u64(4);
        let target = Array1::from(vec![0.0, 0.0, 0.0]);
        let mutant = Array1::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(circular_crossover(&target, &mutant, 1.0, &mut rng), mutant);
    }

    #[test]
    fn test_single_gene_is_forced() {
        let mut rng = StdRng::seed_from_u64(5);
        let trial = circular_crossover(&Array1::from(vec![7.0]), &Array1::from(vec![9.0]), 0.0, &mut rng);
        assert_eq!(trial[0], 9.0);
    }

    #[test]
    fn test_draw_count() {
        // one start index plus n - 1 gene draws
        let mut a = StdRng::seed_from_u64(6);
        let mut b = StdRng::seed_from_u64(6);
        let target = Array1::from(vec![0.0; 4]);
        let mutant = Array1::from(vec![1.0; 4]);
        let _ = circular_crossover(&target, &mutant, 0.5, &mut a);
        let _ = b.random_range(0..4usize);
        for _ in 0..3 {
            let _: f64 = b.random();
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
