use ndarray::Array1;
use polyfit_de::{
	DEConfigBuilder, DEError, Objective, SteepestDescent, StepNormalization, Termination,
	differential_evolution,
};
use polyfit_testfunctions::PolynomialApproximate;

#[test]
fn test_de_fits_cubic_to_sine() {
	let pa = PolynomialApproximate::new(20).unwrap();
	let zero = pa.value(&Array1::zeros(4));
	let config = DEConfigBuilder::new().seed(1).build();
	let report = differential_evolution(&pa, 4, 50, Termination::FixedIterations(1000), config).unwrap();

	assert!(report.fun < zero);
	// least-squares optimum for 20 points and 4 coefficients is about 0.1205
	assert!(report.fun < 0.13, "fit error too high: {}", report.fun);
	assert!(pa.error(&report.x) < 0.13);
	let fitted = pa.eval(&report.x);
	assert_eq!(fitted.len(), 20);
}

#[test]
fn test_sd_decreases_polynomial_error() {
	let pa = PolynomialApproximate::new(20).unwrap();
	let w0 = Array1::zeros(4);
	let start = pa.value(&w0);

	let mut sd = SteepestDescent::new(&pa).alpha(0.01);
	let w = sd.run(Termination::FixedIterations(2000), &w0).unwrap();
	let end = pa.value(&w);
	assert!(end < start);
	assert!(end < 5.0, "steepest descent stalled at {}", end);
	assert_eq!(sd.iterations(), 2000);

	let mut prev = start;
	let mut w = w0.clone();
	let mut sd = SteepestDescent::new(&pa).alpha(0.01).normalization(StepNormalization::Raw);
	for _ in 0..200 {
		sd.step(&mut w).unwrap();
		let v = pa.evaluate(&w).unwrap();
		assert!(v <= prev);
		prev = v;
	}
}

#[test]
fn test_empty_coefficients_are_rejected() {
	let pa = PolynomialApproximate::new(5).unwrap();
	let err = pa.evaluate(&Array1::zeros(0)).unwrap_err();
	assert!(err.message().contains("coefficient"));
	let mut sd = SteepestDescent::new(&pa);
	assert!(matches!(
		sd.run(Termination::FixedIterations(1), &Array1::zeros(0)),
		Err(DEError::ZeroDimension)
	));
}
