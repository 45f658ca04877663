use polyfit_de::{DEConfigBuilder, DifferentialEvolution, Termination, argmin, differential_evolution};
use polyfit_testfunctions::sphere;

#[test]
fn test_de_sphere_3d() {
	let mut de = DifferentialEvolution::with_config(&sphere, DEConfigBuilder::new().seed(17).build());
	de.init(3, 10).unwrap();
	let initial_population = de.population().clone();
	let (_, initial_best) = argmin(de.best_scores());

	// solve re-initializes, so restart the stream to begin from the same population
	de.set_seed(17);
	let start = de.solve(Termination::FixedIterations(0), 3, 10).unwrap();
	assert_eq!(start.population, initial_population);
	assert_eq!(start.fun, initial_best);

	de.set_seed(17);
	let report = de.solve(Termination::FixedIterations(500), 3, 10).unwrap();
	assert_eq!(report.nit, 500);
	assert_eq!(report.nfev, 10 + 500 * 10);
	assert!(report.fun < initial_best);
	assert!(report.fun < 1e-8, "sphere not minimized: {}", report.fun);
	assert!(report.x.iter().all(|v| v.abs() < 1e-4));
}

#[test]
fn test_de_sphere_is_reproducible() {
	let solve = || {
		let config = DEConfigBuilder::new().seed(2024).recombination(0.9).scaling(0.5).build();
		differential_evolution(&sphere, 5, 20, Termination::FixedIterations(100), config).unwrap()
	};
	let (a, b) = (solve(), solve());
	assert_eq!(a.x, b.x);
	assert_eq!(a.fun, b.fun);
	assert_eq!(a.population, b.population);
	assert_eq!(a.population_energies, b.population_energies);
}
