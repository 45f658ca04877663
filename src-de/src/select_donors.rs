use rand::Rng;

/// Three distinct row indices in `[0, pool_size)`, none equal to `target`.
///
/// Rejection sampling: keep drawing uniformly until the triple is complete.
/// Callers guarantee `pool_size >= 4`.
pub(crate) fn select_donors<R: Rng + ?Sized>(
    target: usize,
    pool_size: usize,
    rng: &mut R,
) -> [usize; 3] {
    debug_assert!(pool_size >= 4);
    let mut picked = [usize::MAX; 3];
    let mut count = 0;
    while count < picked.len() {
        let p = rng.random_range(0..pool_size);
        if p != target && !picked[..count].contains(&p) {
            picked[count] = p;
            count += 1;
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_minimum_pool_uses_every_other_row() {
        let mut rng = StdRng::seed_from_u64(1);
        for target in 0..4 {
            let mut d = select_donors(target, 4, &mut rng).to_vec();
            d.sort_unstable();
            let expected: Vec<usize> = (0..4).filter(|&r| r != target).collect();
            assert_eq!(d, expected);
        }
    }

    #[test]
    fn test_distinct_and_excludes_target() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let [a, b, c] = select_donors(3, 10, &mut rng);
            assert!(a != b && b != c && a != c);
            assert!(a != 3 && b != 3 && c != 3);
            assert!(a < 10 && b < 10 && c < 10);
        }
    }

    proptest! {
        #[test]
        fn prop_donors_are_distinct(seed in 0u64..10_000, pool in 4usize..64, t in 0usize..64) {
            let target = t % pool;
            let mut rng = StdRng::seed_from_u64(seed);
            let [a, b, c] = select_donors(target, pool, &mut rng);
            prop_assert!(a != b && b != c && a != c);
            prop_assert!(![a, b, c].contains(&target));
            prop_assert!(a.max(b).max(c) < pool);
        }
    }
}
