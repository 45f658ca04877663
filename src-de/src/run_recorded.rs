//! Recording wrapper for differential evolution

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;
use crate::objective::Objective;
use crate::optimization_recorder::OptimizationRecorder;
use crate::termination::Termination;
use crate::{CallbackAction, DEConfig, DEIntermediate, DEReport, differential_evolution};

/// Run differential evolution while recording every generation.
///
/// The per-generation CSV and a JSON summary are written to `output_dir`.
/// A callback already present in `config` still runs after the recorder and
/// can stop the optimization.
pub fn run_recorded_differential_evolution<O>(
    function_name: &str,
    func: &O,
    n: usize,
    m: usize,
    termination: Termination,
    mut config: DEConfig,
    output_dir: &Path,
) -> Result<(DEReport, PathBuf)>
where
    O: Objective + ?Sized,
{
    let recorder = OptimizationRecorder::new(function_name.to_string());
    let mut record = recorder.create_callback();
    let mut user_callback = config.callback.take();
    config.callback = Some(Box::new(move |intermediate: &DEIntermediate| -> CallbackAction {
        record(intermediate);
        match user_callback.as_mut() {
            Some(cb) => cb(intermediate),
            None => CallbackAction::Continue,
        }
    }));

    let report = differential_evolution(func, n, m, termination, config)?;

    let csv_path = recorder.save_to_csv(output_dir)?;
    if let Err(e) = recorder.save_summary(output_dir, &report) {
        warn!("Failed to save summary for {}: {}", function_name, e);
    }

    Ok((report, csv_path))
}
