use std::time::{Duration, Instant};

use ndarray::Array1;
use polyfit_de::{
	DEConfigBuilder, SteepestDescent, Termination, differential_evolution,
};
use polyfit_testfunctions::{PolynomialApproximate, sphere};

#[test]
fn test_de_time_budget() {
	let budget = Duration::from_millis(200);
	let start = Instant::now();
	let report = differential_evolution(
		&sphere,
		2,
		8,
		Termination::TimeBudget(budget),
		DEConfigBuilder::new().build(),
	)
	.unwrap();
	assert!(start.elapsed() >= budget);
	assert!(report.nit > 0);
	assert_eq!(report.message, format!("Time budget exhausted after {} generations", report.nit));
	assert_eq!(report.nfev, 8 + report.nit * 8);
}

#[test]
fn test_sd_deadline() {
	let pa = PolynomialApproximate::new(10).unwrap();
	let deadline = Instant::now() + Duration::from_millis(100);
	let mut sd = SteepestDescent::new(&pa);
	let w = sd.run(Termination::Deadline(deadline), &Array1::zeros(3)).unwrap();
	assert!(Instant::now() >= deadline);
	assert!(sd.iterations() > 0);
	assert!(pa.value(&w) < pa.value(&Array1::zeros(3)));
}
