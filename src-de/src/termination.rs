//! When to stop iterating.
//!
//! Both optimizers poll a [`TerminationClock`] once before every step; a step
//! that has started always runs to completion, so a deadline can be overrun by
//! at most one step.

use std::time::{Duration, Instant};

/// Termination criterion shared by all optimizers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Run exactly this many generations (or iterations)
    FixedIterations(usize),
    /// Keep going while the monotonic clock is before this instant
    Deadline(Instant),
    /// Wall-clock budget, measured from the moment the loop starts
    TimeBudget(Duration),
}

impl Termination {
    /// Budget of whole seconds, the way the command line programs express it
    pub fn seconds(secs: u64) -> Self {
        Termination::TimeBudget(Duration::from_secs(secs))
    }

    /// Start counting: fixes the deadline of a [`Termination::TimeBudget`].
    pub fn start(self) -> TerminationClock {
        let mode = match self {
            Termination::FixedIterations(n) => Mode::Remaining(n),
            Termination::Deadline(t) => Mode::Until(t),
            Termination::TimeBudget(d) => match Instant::now().checked_add(d) {
                Some(t) => Mode::Until(t),
                None => Mode::Forever,
            },
        };
        TerminationClock { mode }
    }
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Remaining(usize),
    Until(Instant),
    // budget past the end of the monotonic clock
    Forever,
}

/// Running state of a [`Termination`] for one optimization loop
#[derive(Debug, Clone, Copy)]
pub struct TerminationClock {
    mode: Mode,
}

impl TerminationClock {
    /// Returns `true` when one more step may run, consuming one iteration
    /// from a fixed budget.
    pub fn should_continue(&mut self) -> bool {
        match &mut self.mode {
            Mode::Remaining(n) => {
                if *n == 0 {
                    false
                } else {
                    *n -= 1;
                    true
                }
            }
            Mode::Until(t) => Instant::now() < *t,
            Mode::Forever => true,
        }
    }
}
