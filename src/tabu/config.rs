//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// How the neighborhood is scanned each iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStrategy {
    /// Shuffle every move and take the first admissible improving one;
    /// falls back to [`SearchStrategy::BestImproving`] when none improves.
    #[default]
    FirstImproving,
    /// Take the admissible move with the lowest delta, even if it worsens.
    BestImproving,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use qbf_metaheur::tabu::{SearchStrategy, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_tabu_tenure(10)
///     .with_max_iterations(5_000)
///     .with_intensification(300, 150)
///     .with_fixed_percentage(25)
///     .with_strategy(SearchStrategy::BestImproving)
///     .with_seed(7);
/// assert_eq!(config.tabu_tenure, 10);
/// assert_eq!(config.intensification_start, 300);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Iterations an index stays tabu. The tabu list holds `2 × tenure`
    /// slots because each move rotates one slot for the outgoing and one for
    /// the incoming index.
    pub tabu_tenure: usize,

    /// Maximum number of neighborhood moves.
    pub max_iterations: usize,

    /// Non-intensifying iterations before a restart from the best solution.
    pub intensification_start: usize,

    /// Iterations an intensification phase lasts.
    pub intensification_duration: usize,

    /// Share (0–100) of the frequency table fixed during intensification.
    pub fixed_percentage: u8,

    /// Stop as soon as the best cost is at or below this value.
    ///
    /// Used for time-to-target experiments.
    pub target_cost: Option<f64>,

    /// Wall-clock budget in milliseconds, checked once per iteration.
    pub time_limit_ms: u64,

    /// Neighborhood scan strategy.
    pub strategy: SearchStrategy,

    /// Allowed gap between predicted and re-evaluated cost, relative to
    /// `max(1, |cost|)`.
    pub consistency_tolerance: f64,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_tenure: 20,
            max_iterations: 1000,
            intensification_start: 800,
            intensification_duration: 400,
            fixed_percentage: 20,
            target_cost: None,
            time_limit_ms: 120_000,
            strategy: SearchStrategy::default(),
            consistency_tolerance: 1e-6,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets when intensification starts and how long it lasts.
    pub fn with_intensification(mut self, start_after: usize, duration: usize) -> Self {
        self.intensification_start = start_after;
        self.intensification_duration = duration;
        self
    }

    /// Sets the percentage of frequent variables fixed while intensifying.
    pub fn with_fixed_percentage(mut self, percentage: u8) -> Self {
        self.fixed_percentage = percentage;
        self
    }

    /// Sets the target cost for early termination.
    pub fn with_target_cost(mut self, target: f64) -> Self {
        self.target_cost = Some(target);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the neighborhood strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the evaluator consistency tolerance.
    pub fn with_consistency_tolerance(mut self, tolerance: f64) -> Self {
        self.consistency_tolerance = tolerance;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_tenure == 0 {
            return Err(invalid("tabu_tenure must be at least 1"));
        }
        if self.tabu_tenure.checked_mul(2).is_none() {
            return Err(invalid("tabu_tenure is too large for a 2 x tenure tabu list"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be at least 1"));
        }
        if self.intensification_start == 0 {
            return Err(invalid("intensification_start must be at least 1"));
        }
        if self.intensification_duration == 0 {
            return Err(invalid("intensification_duration must be at least 1"));
        }
        if self.fixed_percentage > 100 {
            return Err(invalid("fixed_percentage must be within 0..=100"));
        }
        if self.time_limit_ms == 0 {
            return Err(invalid("time_limit_ms must be positive"));
        }
        if self.consistency_tolerance.is_nan() || self.consistency_tolerance < 0.0 {
            return Err(invalid("consistency_tolerance must be non-negative"));
        }
        if matches!(self.target_cost, Some(t) if t.is_nan()) {
            return Err(invalid("target_cost must not be NaN"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SearchError {
    SearchError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.tabu_tenure, 20);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.intensification_start, 800);
        assert_eq!(config.intensification_duration, 400);
        assert_eq!(config.fixed_percentage, 20);
        assert_eq!(config.time_limit_ms, 120_000);
        assert_eq!(config.strategy, SearchStrategy::FirstImproving);
        assert!(config.target_cost.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_tabu_tenure(3)
            .with_max_iterations(50)
            .with_intensification(10, 5)
            .with_fixed_percentage(40)
            .with_target_cost(-12.5)
            .with_time_limit_ms(250)
            .with_strategy(SearchStrategy::BestImproving)
            .with_consistency_tolerance(1e-3)
            .with_seed(123);

        assert_eq!(config.tabu_tenure, 3);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.intensification_start, 10);
        assert_eq!(config.intensification_duration, 5);
        assert_eq!(config.fixed_percentage, 40);
        assert_eq!(config.target_cost, Some(-12.5));
        assert_eq!(config.time_limit_ms, 250);
        assert_eq!(config.strategy, SearchStrategy::BestImproving);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_zero_tenure() {
        let err = TabuConfig::default().with_tabu_tenure(0).validate().unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(ref m) if m.contains("tabu_tenure")));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            TabuConfig::default().with_tabu_tenure(usize::MAX / 2 + 1),
            TabuConfig::default().with_max_iterations(0),
            TabuConfig::default().with_intensification(0, 5),
            TabuConfig::default().with_intensification(5, 0),
            TabuConfig::default().with_fixed_percentage(101),
            TabuConfig::default().with_time_limit_ms(0),
            TabuConfig::default().with_consistency_tolerance(-1.0),
            TabuConfig::default().with_consistency_tolerance(f64::NAN),
            TabuConfig::default().with_target_cost(f64::NAN),
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }
}
