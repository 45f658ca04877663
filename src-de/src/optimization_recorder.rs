use std::fs::{File, create_dir_all};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::error::Result;
use crate::{CallbackAction, DEIntermediate, DEReport};

/// Records optimization progress via DE callbacks
#[derive(Debug)]
pub struct OptimizationRecorder {
    /// Function name (used for file names)
    function_name: String,
    /// Shared records storage
    records: Arc<Mutex<Vec<OptimizationRecord>>>,
    /// Best function value seen so far
    best_value: Arc<Mutex<Option<f64>>>,
}

/// A single generation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationRecord {
    /// Generation number
    pub iteration: usize,
    /// Best x found so far
    pub x: Vec<f64>,
    /// Best function result so far
    pub best_result: f64,
    /// Convergence measure (standard deviation of the fitness cache)
    pub convergence: f64,
    /// Whether this generation improved the best known result
    pub is_improvement: bool,
}

/// Final outcome of a recorded run, written as JSON next to the CSV
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    function: &'a str,
    generations_recorded: usize,
    message: &'a str,
    nit: usize,
    nfev: usize,
    best_result: f64,
    best_x: Vec<f64>,
}

// A panicking callback must not make the recorder unusable.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl OptimizationRecorder {
    /// Create a new optimization recorder for the given function
    pub fn new(function_name: String) -> Self {
        Self {
            function_name,
            records: Arc::new(Mutex::new(Vec::new())),
            best_value: Arc::new(Mutex::new(None)),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Create a callback function that records optimization progress
    pub fn create_callback(&self) -> Box<dyn FnMut(&DEIntermediate) -> CallbackAction + Send> {
        let records = self.records.clone();
        let best_value = self.best_value.clone();

        Box::new(move |intermediate: &DEIntermediate| -> CallbackAction {
            let is_improvement = {
                let mut best_guard = lock(&best_value);
                let better = match *best_guard {
                    Some(best) => intermediate.fun < best,
                    None => true,
                };
                if better {
                    *best_guard = Some(intermediate.fun);
                }
                better
            };

            lock(&records).push(OptimizationRecord {
                iteration: intermediate.iter,
                x: intermediate.x.to_vec(),
                best_result: intermediate.fun,
                convergence: intermediate.convergence,
                is_improvement,
            });

            CallbackAction::Continue
        })
    }

    /// Save all recorded generations to `<output_dir>/<function_name>.csv`
    pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf> {
        create_dir_all(output_dir)?;
        let filename = output_dir.join(format!("{}.csv", self.function_name));
        let mut writer = csv::Writer::from_path(&filename)?;

        let records_guard = lock(&self.records);
        if records_guard.is_empty() {
            writer.flush()?;
            return Ok(filename);
        }

        let num_dimensions = records_guard[0].x.len();
        let mut header = vec!["iteration".to_string()];
        header.extend((0..num_dimensions).map(|i| format!("x{}", i)));
        header.extend(["best_result", "convergence", "is_improvement"].map(String::from));
        writer.write_record(&header)?;

        for record in records_guard.iter() {
            let mut row = vec![record.iteration.to_string()];
            row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
            row.push(format!("{:.16}", record.best_result));
            row.push(format!("{:.16}", record.convergence));
            row.push(record.is_improvement.to_string());
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(filename)
    }

    /// Save a JSON summary of `report` to `<output_dir>/<function_name>_summary.json`
    pub fn save_summary(&self, output_dir: &Path, report: &DEReport) -> Result<PathBuf> {
        create_dir_all(output_dir)?;
        let filename = output_dir.join(format!("{}_summary.json", self.function_name));
        let summary = RunSummary {
            function: &self.function_name,
            generations_recorded: self.num_iterations(),
            message: &report.message,
            nit: report.nit,
            nfev: report.nfev,
            best_result: report.fun,
            best_x: report.x.to_vec(),
        };
        serde_json::to_writer_pretty(BufWriter::new(File::create(&filename)?), &summary)?;
        Ok(filename)
    }

    /// Get a copy of all recorded generations
    pub fn get_records(&self) -> Vec<OptimizationRecord> {
        lock(&self.records).clone()
    }

    /// Get the number of generations recorded
    pub fn num_iterations(&self) -> usize {
        lock(&self.records).len()
    }

    /// Clear all recorded generations
    pub fn clear(&self) {
        lock(&self.records).clear();
        *lock(&self.best_value) = None;
    }

    /// Get the final best solution if any generations were recorded
    pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
        lock(&self.records).last().map(|r| (r.x.clone(), r.best_result))
    }
}
