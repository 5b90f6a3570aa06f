//! Time-to-target trials.
//!
//! Runs the same search repeatedly with independent seeds and records how
//! long each run took to reach `target_cost`. Sorting the hit times gives
//! the empirical distribution plotted in a TTT plot.
//!
//! Every trial owns its RNG and search state; only the evaluator is shared,
//! read-only. With the `parallel` feature the trials run on rayon's pool.

use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::evaluator::Evaluator;
use crate::tabu::{TabuConfig, TabuRunner};

/// How many trials to run and how to seed them.
///
/// # Examples
///
/// ```
/// use qbf_metaheur::ttt::TrialPlan;
///
/// let plan = TrialPlan::new(50).with_base_seed(1000);
/// assert_eq!(plan.seeds(), (1000..1050).collect::<Vec<u64>>());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialPlan {
    /// Number of independent runs.
    pub trials: usize,
    /// Trial `i` uses `base_seed + i`. `None` draws a fresh seed per trial.
    pub base_seed: Option<u64>,
}

impl TrialPlan {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            base_seed: None,
        }
    }

    /// Makes the trial seeds reproducible.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Seed of every trial, in trial order.
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.trials)
            .map(|i| match self.base_seed {
                Some(base) => base.wrapping_add(i as u64),
                None => rand::random(),
            })
            .collect()
    }
}

/// Result of a single trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialOutcome {
    pub seed: u64,
    pub elapsed: Duration,
    pub best_cost: f64,
    pub iterations: usize,
    pub reached_target: bool,
}

/// All trial outcomes, in trial order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialSummary {
    pub outcomes: Vec<TrialOutcome>,
}

impl TrialSummary {
    /// Number of trials that reached the target.
    pub fn hits(&self) -> usize {
        self.outcomes.iter().filter(|o| o.reached_target).count()
    }

    /// Share of trials that reached the target, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.hits() as f64 / self.outcomes.len() as f64
    }

    /// Times of successful trials, ascending.
    pub fn hit_times(&self) -> Vec<Duration> {
        let mut times: Vec<Duration> = self
            .outcomes
            .iter()
            .filter(|o| o.reached_target)
            .map(|o| o.elapsed)
            .collect();
        times.sort();
        times
    }

    /// TTT-plot points `(seconds, cumulative probability)`, using the
    /// `(i - 0.5) / n` plotting position over the successful trials.
    pub fn plot_points(&self) -> Vec<(f64, f64)> {
        let times = self.hit_times();
        let n = times.len() as f64;
        times
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.as_secs_f64(), (i as f64 + 0.5) / n))
            .collect()
    }
}

/// Runs `plan.trials` independent searches of `evaluator` under `config`.
///
/// `config.seed` is ignored; each trial uses its own seed from `plan`.
/// Fails if `config` has no `target_cost`, if `plan.trials` is zero, or if
/// any trial fails.
pub fn run_trials<E: Evaluator>(
    evaluator: &E,
    config: &TabuConfig,
    plan: &TrialPlan,
) -> Result<TrialSummary> {
    if config.target_cost.is_none() {
        return Err(SearchError::InvalidConfig(
            "time-to-target trials need a target_cost".into(),
        ));
    }
    if plan.trials == 0 {
        return Err(SearchError::InvalidConfig("trials must be at least 1".into()));
    }

    let seeds = plan.seeds();
    let trial = |seed: u64| -> Result<TrialOutcome> {
        let config = config.clone().with_seed(seed);
        let result = TabuRunner::run(evaluator, &config)?;
        tracing::debug!(
            seed,
            elapsed_ms = result.elapsed.as_millis() as u64,
            best_cost = result.best_cost,
            reached_target = result.reached_target,
            "TTT: trial finished"
        );
        Ok(TrialOutcome {
            seed,
            elapsed: result.elapsed,
            best_cost: result.best_cost,
            iterations: result.iterations,
            reached_target: result.reached_target,
        })
    };

    #[cfg(feature = "parallel")]
    let outcomes = seeds.into_par_iter().map(trial).collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let outcomes = seeds.into_iter().map(trial).collect::<Result<Vec<_>>>()?;

    let summary = TrialSummary { outcomes };
    tracing::info!(
        trials = summary.outcomes.len(),
        hits = summary.hits(),
        "TTT: trials finished"
    );
    Ok(summary)
}
