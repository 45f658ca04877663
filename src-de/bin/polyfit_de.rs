//! Fit a polynomial to one period of `sin(2 pi x)` with differential evolution.
//!
//! Prints the final squared error on stderr and `x y fitted` for every sample
//! point on stdout.

use std::io;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use log::info;

use polyfit_de::{
	DEConfigBuilder, DEFAULT_SEED, DEReport, Termination, best_individual,
	differential_evolution, run_recorded_differential_evolution, write_fit,
};
use polyfit_env::get_records_dir;
use polyfit_testfunctions::PolynomialApproximate;

/// CLI arguments for the differential evolution fit
#[derive(Parser)]
#[command(name = "polyfit_de")]
#[command(about = "Fit a polynomial to a sampled sine with differential evolution")]
struct Args {
	/// Number of sample points on [0, 1]
	point_count: usize,

	/// Number of polynomial coefficients searched by DE
	degree: usize,

	/// Wall-clock budget in seconds
	#[arg(short, long, default_value = "10")]
	seconds: u64,

	/// Population size
	#[arg(short, long, default_value = "50")]
	population: usize,

	/// Random seed
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u32,

	/// Run a fixed number of generations instead of a time budget
	#[arg(short, long)]
	iterations: Option<usize>,

	/// Write per-generation CSV and JSON summary under $POLYFIT_DIR
	#[arg(long)]
	record: bool,
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
		eprintln!("polyfit_de: {}", e);
		process::exit(2);
	}
}

fn run(args: &Args, pa: &PolynomialApproximate) -> Result<(), Box<dyn std::error::Error>> {
	let termination = match args.iterations {
		Some(k) => Termination::FixedIterations(k),
		None => Termination::seconds(args.seconds),
	};
	let config = DEConfigBuilder::new().seed(args.seed).build();

	let report: DEReport = if args.record {
		let dir = get_records_dir()?;
		let name = format!("polyfit_{}_{}", args.point_count, args.degree);
		let (report, csv_path) = run_recorded_differential_evolution(
			&name,
			pa,
			args.degree,
			args.population,
			termination,
			config,
			&dir,
		)?;
		info!("Recorded {} generations to {}", report.nit, csv_path.display());
		report
	} else {
		differential_evolution(pa, args.degree, args.population, termination, config)?
	};

	let (best, _) = best_individual(pa, &report.population)?;
	let w = report.population.row(best).to_owned();
	eprintln!("{:.6}", pa.error(&w));
	write_fit(&mut io::BufWriter::new(io::stdout().lock()), pa, &w)?;
	Ok(())
}
