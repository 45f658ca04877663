use crate::error::Result;
use crate::objective::Objective;
use crate::termination::Termination;
use crate::{DEConfig, DEReport, DifferentialEvolution};

/// Convenience function running a fresh optimizer once:
/// - `func`: objective mapping x -> f(x)
/// - `n`: number of variables, `m`: population size
/// - `termination`: generation count or time budget
/// - `config`: DE configuration
pub fn differential_evolution<O>(
    func: &O,
    n: usize,
    m: usize,
    termination: Termination,
    config: DEConfig,
) -> Result<DEReport>
where
    O: Objective + ?Sized,
{
    let mut de = DifferentialEvolution::with_config(func, config);
    de.solve(termination, n, m)
}
