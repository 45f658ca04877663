//! Differential Evolution (DE) optimizer in pure Rust using ndarray
//!
//! Minimizes a scalar objective over real vectors with the classic
//! DE/rand/1 scheme:
//!
//! - Population of `m` individuals drawn uniformly from `[-1, 1)`
//! - Mutation `v = x_r0 + F * (x_r1 - x_r2)` from three distinct donors
//! - Circular crossover from a random start gene, first gene forced
//! - Greedy selection against a per-individual best-fitness cache
//! - Termination after a fixed number of generations or a wall-clock budget
//!
//! A steepest descent optimizer sharing the same [`Termination`] lives in
//! [`steepest_descent`].

#![allow(missing_docs)]
use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod best_individual;
pub mod crossover_circular;
pub mod differential_evolution;
pub mod error;
pub mod fit_output;
pub mod init_random;
pub mod mutant_rand1;
pub mod objective;
pub mod optimization_recorder;
pub mod run_recorded;
pub mod select_donors;
pub mod steepest_descent;
pub mod termination;


pub use best_individual::best_individual;
pub use differential_evolution::differential_evolution;
pub use error::{DEError, ObjectiveError, Result};
pub use fit_output::write_fit;
pub use objective::{Differentiable, Objective};
pub use optimization_recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_differential_evolution;
pub use steepest_descent::{SteepestDescent, StepNormalization};
pub use termination::{Termination, TerminationClock};

/// Seed used when none is given, so that construction is deterministic
pub const DEFAULT_SEED: u32 = 5489;

/// Smallest population that leaves three donors distinct from the target
pub const MIN_POPULATION: usize = 4;

/// Index and value of the first smallest entry. `v` must not be empty.
pub fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Baseline a trial vector has to beat to replace its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
	/// Compare against the best score ever cached for the slot
	#[default]
	CachedBest,
	/// Re-evaluate the target every trial and compare against that value.
	/// One extra evaluation per individual per generation.
	FreshParent,
}

impl FromStr for Selection {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"cached" | "cachedbest" | "cached-best" | "cached_best" => Ok(Selection::CachedBest),
			"fresh" | "freshparent" | "fresh-parent" | "fresh_parent" => {
				Ok(Selection::FreshParent)
			}
			_ => Err(format!("unknown selection: {}", s)),
		}
	}
}

/// Configuration for the Differential Evolution optimizer
pub struct DEConfig {
	pub recombination: f64, // CR in [0,1]
	pub scaling: f64,       // F
	pub selection: Selection,
	/// Seed applied when the optimizer is built; [`DEFAULT_SEED`] otherwise
	pub seed: Option<u32>,
	/// Optional per-generation callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&DEIntermediate) -> CallbackAction + Send>>,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			recombination: 0.5,
			scaling: 0.6,
			selection: Selection::default(),
			seed: None,
			callback: None,
		}
	}
}

impl fmt::Debug for DEConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEConfig")
			.field("recombination", &self.recombination)
			.field("scaling", &self.scaling)
			.field("selection", &self.selection)
			.field("seed", &self.seed)
			.field("callback", &self.callback.is_some())
			.finish()
	}
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
	cfg: DEConfig,
}
impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn recombination(mut self, v: f64) -> Self {
		self.cfg.recombination = v;
		self
	}
	pub fn scaling(mut self, v: f64) -> Self {
		self.cfg.scaling = v;
		self
	}
	pub fn selection(mut self, v: Selection) -> Self {
		self.cfg.selection = v;
		self
	}
	pub fn seed(mut self, v: u32) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&DEIntermediate) -> CallbackAction + Send>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone)]
pub struct DEReport {
	/// Best individual according to the fitness cache
	pub x: Array1<f64>,
	pub fun: f64,
	pub message: String,
	/// Generations run
	pub nit: usize,
	/// Objective evaluations, initialization included
	pub nfev: usize,
	pub population: Array2<f64>,
	pub population_energies: Array1<f64>,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("population_energies", &format!("len={}", self.population_energies.len()))
			.finish()
	}
}

/// Information passed to callback after each generation
pub struct DEIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	pub convergence: f64, // measured as std(best_scores)
	pub iter: usize,
}

/// Action returned by callback
pub enum CallbackAction {
	Continue,
	Stop,
}

/// Differential Evolution optimizer
///
/// Owns its random stream, the population and the fitness cache. Building one
/// evaluates nothing and draws nothing.
pub struct DifferentialEvolution<'a, O>
where
	O: Objective + ?Sized,
{
	func: &'a O,
	config: DEConfig,
	rng: StdRng,
	population: Array2<f64>,
	best_scores: Array1<f64>,
	generations: usize,
	nfev: usize,
}

impl<'a, O> DifferentialEvolution<'a, O>
where
	O: Objective + ?Sized,
{
	/// Create a new DE optimizer with CR = 0.5 and F = 0.6
	pub fn new(func: &'a O) -> Self {
		Self::with_config(func, DEConfig::default())
	}

	/// Create a new DE optimizer with the given crossover rate and scaling
	pub fn with_params(func: &'a O, recombination: f64, scaling: f64) -> Self {
		Self::with_config(func, DEConfig { recombination, scaling, ..DEConfig::default() })
	}

	pub fn with_config(func: &'a O, config: DEConfig) -> Self {
		let seed = config.seed.unwrap_or(DEFAULT_SEED);
		Self {
			func,
			config,
			rng: StdRng::seed_from_u64(u64::from(seed)),
			population: Array2::zeros((0, 0)),
			best_scores: Array1::zeros(0),
			generations: 0,
			nfev: 0,
		}
	}

	/// Restart the random stream. The population is left alone.
	pub fn set_seed(&mut self, seed: u32) {
		self.rng = StdRng::seed_from_u64(u64::from(seed));
	}

	pub fn config(&self) -> &DEConfig {
		&self.config
	}

	/// Current population, `m x n` (empty before the first `init`)
	pub fn population(&self) -> &Array2<f64> {
		&self.population
	}

	/// Best score seen for each row
	pub fn best_scores(&self) -> &Array1<f64> {
		&self.best_scores
	}

	/// Generations completed over the lifetime of this optimizer
	pub fn generations(&self) -> usize {
		self.generations
	}

	/// Objective evaluations over the lifetime of this optimizer
	pub fn nfev(&self) -> usize {
		self.nfev
	}

	fn validate(&self, n: usize, m: usize) -> Result<()> {
		if n == 0 {
			return Err(DEError::ZeroDimension);
		}
		if m < MIN_POPULATION {
			return Err(DEError::PopulationTooSmall { pop_size: m });
		}
		if !(0.0..=1.0).contains(&self.config.recombination) {
			return Err(DEError::InvalidCrossoverRate { rate: self.config.recombination });
		}
		if !self.config.scaling.is_finite() {
			return Err(DEError::InvalidScaling { factor: self.config.scaling });
		}
		Ok(())
	}

	/// Draw an `m x n` population from `[-1, 1)` and seed the fitness cache.
	///
	/// Any previous population is discarded. Nothing is drawn or evaluated
	/// when the preconditions fail.
	pub fn init(&mut self, n: usize, m: usize) -> Result<()> {
		use init_random::init_random;

		self.validate(n, m)?;
		let pop = init_random(n, m, -1.0, 1.0, &mut self.rng);
		let mut scores = Array1::<f64>::zeros(m);
		for (i, row) in pop.rows().into_iter().enumerate() {
			scores[i] = self.func.evaluate(&row.to_owned())?;
			self.nfev += 1;
		}
		self.population = pop;
		self.best_scores = scores;
		Ok(())
	}

	/// Run one generation and return how many trials replaced their target.
	///
	/// Every row reads donors and its own target from a snapshot taken at the
	/// start of the generation, so a replacement never leaks into another
	/// row's trial.
	pub fn generation(&mut self) -> Result<usize> {
		use crossover_circular::circular_crossover;
		use mutant_rand1::mutant_rand1;
		use select_donors::select_donors;

		if self.population.nrows() == 0 {
			return Err(DEError::NotInitialized);
		}
		let parents = self.population.clone();
		let m = parents.nrows();
		let mut accepted = 0usize;

		for i in 0..m {
			let donors = select_donors(i, m, &mut self.rng);
			let mutant = mutant_rand1(&parents, donors, self.config.scaling);
			let target = parents.row(i).to_owned();
			let trial =
				circular_crossover(&target, &mutant, self.config.recombination, &mut self.rng);

			let baseline = match self.config.selection {
				Selection::CachedBest => self.best_scores[i],
				Selection::FreshParent => {
					let f = self.func.evaluate(&target)?;
					self.nfev += 1;
					self.best_scores[i] = f;
					f
				}
			};

			let f_trial = self.func.evaluate(&trial)?;
			self.nfev += 1;
			if f_trial < baseline {
				self.population.row_mut(i).assign(&trial);
				self.best_scores[i] = f_trial;
				accepted += 1;
			}
		}

		self.generations += 1;
		Ok(accepted)
	}

	/// Re-initialize, then run generations until `termination` is met.
	/// Returns the final population.
	pub fn run(&mut self, termination: Termination, n: usize, m: usize) -> Result<Array2<f64>> {
		self.run_loop(termination, n, m)?;
		Ok(self.population.clone())
	}

	/// Like [`Self::run`], summarizing the outcome in a [`DEReport`]
	pub fn solve(&mut self, termination: Termination, n: usize, m: usize) -> Result<DEReport> {
		let (nit, nfev, message) = self.run_loop(termination, n, m)?;
		let (best_idx, best_f) = argmin(&self.best_scores);
		Ok(DEReport {
			x: self.population.row(best_idx).to_owned(),
			fun: best_f,
			message,
			nit,
			nfev,
			population: self.population.clone(),
			population_energies: self.best_scores.clone(),
		})
	}

	fn run_loop(
		&mut self,
		termination: Termination,
		n: usize,
		m: usize,
	) -> Result<(usize, usize, String)> {
		let nfev_start = self.nfev;
		self.init(n, m)?;

		info!(
			"DE Init: {} dimensions, population={}, CR={:.3}, F={:.3}, selection={:?}, {:?}",
			n, m, self.config.recombination, self.config.scaling, self.config.selection, termination
		);
		let (_, init_best) = argmin(&self.best_scores);
		debug!("DE iter {:4}  best_f={:.6e}", 0, init_best);

		let mut clock = termination.start();
		let mut nit = 0usize;
		let mut stopped = false;
		while clock.should_continue() {
			let accepted = self.generation()?;
			nit += 1;

			let (best_idx, best_f) = argmin(&self.best_scores);
			let pop_std = self.best_scores.std(0.0);
			debug!(
				"DE iter {:4}  best_f={:.6e}  std={:.3e}  accepted={}/{}",
				nit, best_f, pop_std, accepted, m
			);

			if let Some(ref mut cb) = self.config.callback {
				let intermediate = DEIntermediate {
					x: self.population.row(best_idx).to_owned(),
					fun: best_f,
					convergence: pop_std,
					iter: nit,
				};
				if let CallbackAction::Stop = cb(&intermediate) {
					stopped = true;
					break;
				}
			}
		}

		let message = if stopped {
			"Optimization stopped by callback".to_string()
		} else {
			match termination {
				Termination::FixedIterations(k) => format!("Maximum iterations reached: {}", k),
				Termination::Deadline(_) | Termination::TimeBudget(_) => {
					format!("Time budget exhausted after {} generations", nit)
				}
			}
		};
		let nfev = self.nfev - nfev_start;
		info!(
			"DE finished: {} ({} evaluations; {} generations / {} evaluations in total)",
			message, nfev, self.generations, self.nfev
		);
		Ok((nit, nfev, message))
	}
}
