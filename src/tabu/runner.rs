//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build a feasible start with a semi-greedy constructive phase
//! 2. At each iteration:
//!    a. Pick a move (first- or best-improving) that is not tabu, not just
//!       repaired, and does not remove a fixed variable
//!    b. Apply it, rotate the tabu list, repair adjacency, re-evaluate
//!    c. Update the global best if improved
//!    d. Advance the intensification-by-restart automaton
//! 3. Terminate on the time budget, the iteration cap or the target cost
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::candidates::CandidateList;
use super::config::TabuConfig;
use super::intensification::{Intensification, Transition};
use super::neighborhood::{self, Admissibility};
use super::repair;
use super::tabu_list::TabuList;
use super::types::Move;
use crate::error::{Result, SearchError, Stage};
use crate::evaluator::Evaluator;
use crate::solution::Solution;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuResult {
    /// Best solution found.
    pub best: Solution,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Neighborhood moves executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = construction).
    pub best_iteration: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Whether the run stopped because `target_cost` was reached.
    pub reached_target: bool,
    /// Number of intensification restarts.
    pub restarts: usize,
    /// Seed of the run's random source.
    pub seed: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search with `evaluator` as the objective.
    ///
    /// Fails before searching on an invalid configuration or an empty
    /// domain, and during the search if the evaluator's incremental costs
    /// disagree with its full evaluation.
    ///
    /// # Examples
    ///
    /// ```
    /// use qbf_metaheur::qbf::{Objective, Qbf, QbfInstance};
    /// use qbf_metaheur::tabu::{TabuConfig, TabuRunner};
    ///
    /// let inst: QbfInstance = "4\n1 -3 2 0\n-2 4 1\n-1 -5\n2".parse().unwrap();
    /// let qbf = Qbf::new(inst, Objective::Maximize);
    /// let config = TabuConfig::default()
    ///     .with_tabu_tenure(1)
    ///     .with_max_iterations(100)
    ///     .with_seed(42);
    ///
    /// let result = TabuRunner::run(&qbf, &config).unwrap();
    /// assert!(result.best.is_feasible());
    /// ```
    #[tracing::instrument(level = "debug", name = "Tabu Search", skip_all)]
    pub fn run<E: Evaluator>(evaluator: &E, config: &TabuConfig) -> Result<TabuResult> {
        config.validate()?;
        if evaluator.domain_size() == 0 {
            return Err(SearchError::EmptyDomain);
        }

        let seed = match config.seed {
            Some(s) => s,
            None => rand::random(),
        };
        let start = Instant::now();
        let time_limit = Duration::from_millis(config.time_limit_ms);

        let mut search = TabuSearch::new(evaluator, config, seed);
        search.construct()?;

        while !search.target_reached()
            && search.iteration < config.max_iterations
            && start.elapsed() < time_limit
        {
            search.iterate()?;
        }

        let result = search.into_result(start.elapsed());
        tracing::info!(
            best_cost = result.best_cost,
            iterations = result.iterations,
            best_iteration = result.best_iteration,
            restarts = result.restarts,
            reached_target = result.reached_target,
            "Tabu: finished"
        );
        Ok(result)
    }
}

/// Mutable state of one run. Owns its RNG; nothing is shared across runs.
struct TabuSearch<'a, E: Evaluator> {
    evaluator: &'a E,
    config: &'a TabuConfig,
    seed: u64,
    rng: StdRng,
    incumbent: Solution,
    best: Solution,
    candidates: CandidateList,
    tabu: TabuList,
    repaired: HashSet<usize>,
    intensification: Intensification,
    iteration: usize,
    best_iteration: usize,
    restarts: usize,
    cost_history: Vec<f64>,
}

impl<'a, E: Evaluator> TabuSearch<'a, E> {
    fn new(evaluator: &'a E, config: &'a TabuConfig, seed: u64) -> Self {
        let domain_size = evaluator.domain_size();
        Self {
            evaluator,
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            incumbent: Solution::new(),
            best: Solution::new(),
            candidates: CandidateList::complement(domain_size, &Solution::new()),
            tabu: TabuList::new(config.tabu_tenure),
            repaired: HashSet::new(),
            intensification: Intensification::new(
                domain_size,
                config.intensification_start,
                config.intensification_duration,
                config.fixed_percentage,
            ),
            iteration: 0,
            best_iteration: 0,
            restarts: 0,
            cost_history: Vec::with_capacity(config.max_iterations.min(1 << 16)),
        }
    }

    /// Semi-greedy construction.
    ///
    /// Each pass scores every candidate that can join without creating an
    /// adjacent pair, keeps those tied for the lowest delta and inserts one
    /// at random. Stops once the lowest delta is no longer negative.
    fn construct(&mut self) -> Result<()> {
        self.incumbent = Solution::new();
        let empty_cost = self.evaluator.evaluate(&self.incumbent);
        self.incumbent.set_cost(empty_cost);
        self.candidates = CandidateList::complement(self.evaluator.domain_size(), &self.incumbent);

        loop {
            let scored: Vec<(usize, f64)> = self
                .candidates
                .as_slice()
                .iter()
                .copied()
                .filter(|&c| !self.incumbent.has_neighbor(c))
                .map(|c| (c, self.evaluator.insertion_cost(c, &self.incumbent)))
                .collect();

            let min_delta = scored
                .iter()
                .map(|&(_, d)| d)
                .fold(f64::INFINITY, f64::min);
            if min_delta >= 0.0 {
                break;
            }

            let restricted: Vec<(usize, f64)> = scored
                .into_iter()
                .filter(|&(_, d)| d <= min_delta)
                .collect();
            if restricted.is_empty() {
                break;
            }
            let (chosen, delta) = restricted[self.rng.random_range(0..restricted.len())];

            self.incumbent.insert(chosen);
            self.candidates.remove(chosen);
            let predicted = self.incumbent.cost() + delta;
            let evaluated = self.evaluator.evaluate(&self.incumbent);
            self.verify(Stage::Construction, predicted, evaluated)?;
            self.incumbent.set_cost(evaluated);
        }

        self.best = self.incumbent.clone();
        tracing::debug!(
            cost = self.best.cost(),
            size = self.best.len(),
            "Tabu: constructed initial solution"
        );
        Ok(())
    }

    /// One outer iteration: move, best-tracking, intensification bookkeeping.
    fn iterate(&mut self) -> Result<()> {
        self.iteration += 1;
        let mv = self.neighborhood_move()?;
        tracing::trace!(
            iteration = self.iteration,
            ?mv,
            cost = self.incumbent.cost(),
            "Tabu: move"
        );

        if self.incumbent.cost() < self.best.cost() {
            self.best = self.incumbent.clone();
            self.best_iteration = self.iteration;
            tracing::debug!(
                iteration = self.iteration,
                best_cost = self.best.cost(),
                intensifying = self.intensification.fixed().is_some(),
                "Tabu: new best"
            );
        }
        self.cost_history.push(self.best.cost());

        if self.target_reached() {
            return Ok(());
        }

        match self.intensification.tick(&self.incumbent) {
            Some(Transition::Started) => {
                self.restart_from_best();
                tracing::debug!(
                    iteration = self.iteration,
                    fixed = self.intensification.fixed().map_or(0, |f| f.len()),
                    "Tabu: intensification started"
                );
            }
            Some(Transition::Ended) => {
                tracing::debug!(iteration = self.iteration, "Tabu: intensification ended");
            }
            None => {}
        }
        Ok(())
    }

    /// Selects and applies a move, then repairs and re-evaluates.
    fn neighborhood_move(&mut self) -> Result<Move> {
        let scored = {
            let admissibility = Admissibility {
                tabu: &self.tabu,
                repaired: &self.repaired,
                fixed: self.intensification.fixed(),
            };
            neighborhood::select(
                self.config.strategy,
                self.evaluator,
                &self.incumbent,
                &self.candidates,
                &admissibility,
                &mut self.rng,
            )
        };
        let before = self.incumbent.cost();

        let outgoing = scored.mv.outgoing();
        self.tabu.rotate(outgoing);
        if let Some(out) = outgoing {
            self.incumbent.remove(out);
            self.candidates.push(out);
        }

        let incoming = scored.mv.incoming();
        self.tabu.rotate(incoming);
        if let Some(inc) = incoming {
            self.incumbent.insert(inc);
            self.candidates.remove(inc);
        }

        self.repaired.clear();
        let repaired = repair::repair(
            self.evaluator,
            &mut self.incumbent,
            &mut self.candidates,
            &mut self.repaired,
            &mut self.rng,
        );

        if !repaired.evicted.is_empty() {
            tracing::trace!(evicted = ?repaired.evicted, "Tabu: repaired adjacency");
        }

        let predicted = before + scored.delta + repaired.delta;
        let evaluated = self.evaluator.evaluate(&self.incumbent);
        self.verify(Stage::Search, predicted, evaluated)?;
        self.incumbent.set_cost(evaluated);

        Ok(scored.mv)
    }

    fn restart_from_best(&mut self) {
        self.incumbent = self.best.clone();
        self.candidates = CandidateList::complement(self.evaluator.domain_size(), &self.incumbent);
        self.restarts += 1;
    }

    fn target_reached(&self) -> bool {
        self.config
            .target_cost
            .is_some_and(|target| self.best.cost() <= target)
    }

    fn verify(&self, stage: Stage, predicted: f64, evaluated: f64) -> Result<()> {
        let scale = 1.0_f64.max(predicted.abs()).max(evaluated.abs());
        let gap = (predicted - evaluated).abs();
        if gap <= self.config.consistency_tolerance * scale {
            return Ok(());
        }
        tracing::warn!(%stage, predicted, evaluated, "Tabu: evaluator inconsistency");
        Err(SearchError::EvaluatorInconsistency {
            stage,
            predicted,
            evaluated,
        })
    }

    fn into_result(self, elapsed: Duration) -> TabuResult {
        let reached_target = self.target_reached();
        TabuResult {
            best_cost: self.best.cost(),
            best: self.best,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            cost_history: self.cost_history,
            reached_target,
            restarts: self.restarts,
            seed: self.seed,
            elapsed,
        }
    }
}
