//! Fit a polynomial to one period of `sin(2 pi x)` with steepest descent.
//!
//! Starts from the zero polynomial with `DEGREE + 1` coefficients. Prints
//! `point_count coefficient_count error` on stderr and `x y fitted` for every
//! sample point on stdout.

use std::io;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use ndarray::Array1;

use polyfit_de::{SteepestDescent, StepNormalization, Termination, write_fit};
use polyfit_testfunctions::PolynomialApproximate;

#[derive(Parser)]
#[command(name = "polyfit_sd")]
#[command(about = "Fit a polynomial to a sampled sine with steepest descent")]
struct Args {
	/// Number of sample points on [0, 1]
	point_count: usize,

	/// Polynomial degree
	degree: usize,

	/// Wall-clock budget in seconds
	#[arg(short, long, default_value = "10")]
	seconds: u64,

	/// Run a fixed number of steps instead of a time budget
	#[arg(short, long)]
	iterations: Option<usize>,

	/// Step size
	#[arg(short, long, default_value = "0.01")]
	alpha: f64,

	/// Do not divide the step by the coefficient count
	#[arg(long)]
	raw_step: bool,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
		Err(_) => process::exit(1),
	};
	let Some(pa) = PolynomialApproximate::new(args.point_count) else {
		process::exit(1);
	};

	if let Err(e) = run(&args, &pa) {
		eprintln!("polyfit_sd: {}", e);
		process::exit(2);
	}
}

fn run(args: &Args, pa: &PolynomialApproximate) -> Result<(), Box<dyn std::error::Error>> {
	let termination = match args.iterations {
		Some(k) => Termination::FixedIterations(k),
		None => Termination::seconds(args.seconds),
	};
	let normalization =
		if args.raw_step { StepNormalization::Raw } else { StepNormalization::ByDimension };
	let coefficient_count = args.degree + 1;

	let mut sd = SteepestDescent::new(pa).alpha(args.alpha).normalization(normalization);
	let w = sd.run(termination, &Array1::zeros(coefficient_count))?;

	eprintln!("{} {} {:.6}", args.point_count, coefficient_count, pa.error(&w));
	write_fit(&mut io::BufWriter::new(io::stdout().lock()), pa, &w)?;
	Ok(())
}
