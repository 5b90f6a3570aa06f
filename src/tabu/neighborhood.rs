//! Insertion / removal / exchange neighborhood.
//!
//! Moves are enumerated in a fixed order: insertions (candidate-list order),
//! then removals (solution order), then exchanges (candidate-list outer,
//! solution inner). Best-improving breaks ties by that order; first-improving
//! shuffles it with the run RNG.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::candidates::CandidateList;
use super::config::SearchStrategy;
use super::tabu_list::TabuList;
use super::types::{Move, ScoredMove};
use crate::evaluator::Evaluator;
use crate::solution::Solution;

/// Which indices may currently take part in a move.
pub(crate) struct Admissibility<'a> {
    pub tabu: &'a TabuList,
    /// Evicted by the previous repair.
    pub repaired: &'a HashSet<usize>,
    /// Present only while intensification is active.
    pub fixed: Option<&'a HashSet<usize>>,
}

impl Admissibility<'_> {
    fn is_free(&self, element: usize) -> bool {
        !self.tabu.contains(element) && !self.repaired.contains(&element)
    }

    pub(crate) fn can_insert(&self, element: usize) -> bool {
        self.is_free(element)
    }

    pub(crate) fn can_remove(&self, element: usize) -> bool {
        if self.fixed.is_some_and(|fixed| fixed.contains(&element)) {
            return false;
        }
        self.is_free(element)
    }

    pub(crate) fn admits(&self, mv: Move) -> bool {
        match mv {
            Move::Insert(e) => self.can_insert(e),
            Move::Remove(e) => self.can_remove(e),
            Move::Exchange { incoming, outgoing } => {
                self.can_insert(incoming) && self.can_remove(outgoing)
            }
            Move::Stay => true,
        }
    }
}

/// Predicted cost change of `mv` on `solution`.
pub(crate) fn delta_of<E: Evaluator>(evaluator: &E, solution: &Solution, mv: Move) -> f64 {
    match mv {
        Move::Insert(e) => evaluator.insertion_cost(e, solution),
        Move::Remove(e) => evaluator.removal_cost(e, solution),
        Move::Exchange { incoming, outgoing } => {
            evaluator.exchange_cost(incoming, outgoing, solution)
        }
        Move::Stay => 0.0,
    }
}

/// Picks the next move according to `strategy`.
pub(crate) fn select<E: Evaluator, R: Rng>(
    strategy: SearchStrategy,
    evaluator: &E,
    solution: &Solution,
    candidates: &CandidateList,
    admissibility: &Admissibility<'_>,
    rng: &mut R,
) -> ScoredMove {
    match strategy {
        SearchStrategy::BestImproving => {
            best_improving(evaluator, solution, candidates, admissibility)
        }
        SearchStrategy::FirstImproving => {
            first_improving(evaluator, solution, candidates, admissibility, rng)
                .unwrap_or_else(|| best_improving(evaluator, solution, candidates, admissibility))
        }
    }
}

/// Admissible move with the strictly lowest delta, improving or not.
///
/// Returns [`Move::Stay`] when nothing is admissible.
pub(crate) fn best_improving<E: Evaluator>(
    evaluator: &E,
    solution: &Solution,
    candidates: &CandidateList,
    admissibility: &Admissibility<'_>,
) -> ScoredMove {
    let mut best = ScoredMove::stay();
    let mut best_delta = f64::INFINITY;
    let mut consider = |mv: Move, delta: f64| {
        if delta < best_delta {
            best_delta = delta;
            best = ScoredMove { mv, delta };
        }
    };

    for &incoming in candidates.as_slice() {
        if admissibility.can_insert(incoming) {
            consider(
                Move::Insert(incoming),
                evaluator.insertion_cost(incoming, solution),
            );
        }
    }

    for outgoing in solution.iter() {
        if admissibility.can_remove(outgoing) {
            consider(
                Move::Remove(outgoing),
                evaluator.removal_cost(outgoing, solution),
            );
        }
    }

    for &incoming in candidates.as_slice() {
        if !admissibility.can_insert(incoming) {
            continue;
        }
        for outgoing in solution.iter() {
            if admissibility.can_remove(outgoing) {
                consider(
                    Move::Exchange { incoming, outgoing },
                    evaluator.exchange_cost(incoming, outgoing, solution),
                );
            }
        }
    }

    best
}

/// First admissible move with a strictly negative delta, scanning every
/// move in shuffled order.
pub(crate) fn first_improving<E: Evaluator, R: Rng>(
    evaluator: &E,
    solution: &Solution,
    candidates: &CandidateList,
    admissibility: &Admissibility<'_>,
    rng: &mut R,
) -> Option<ScoredMove> {
    let mut moves = enumerate_moves(solution, candidates);
    moves.shuffle(rng);

    moves.into_iter().find_map(|mv| {
        if !admissibility.admits(mv) {
            return None;
        }
        let delta = delta_of(evaluator, solution, mv);
        (delta < 0.0).then_some(ScoredMove { mv, delta })
    })
}

fn enumerate_moves(solution: &Solution, candidates: &CandidateList) -> Vec<Move> {
    let cl = candidates.as_slice();
    let mut moves = Vec::with_capacity(cl.len() + solution.len() + cl.len() * solution.len());
    moves.extend(cl.iter().map(|&e| Move::Insert(e)));
    moves.extend(solution.iter().map(Move::Remove));
    for &incoming in cl {
        moves.extend(
            solution
                .iter()
                .map(|outgoing| Move::Exchange { incoming, outgoing }),
        );
    }
    moves
}
