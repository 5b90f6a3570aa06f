//! Greedy randomized repair of the adjacency constraint.
//!
//! A single ascending scan over the incumbent: whenever `v[i] + 1 == v[i+1]`,
//! one of the two is evicted with equal probability. Evicting the left
//! element re-examines position `i` against its new right neighbour, so a
//! run of three or more consecutive indices is settled in the same pass.

use std::collections::HashSet;

use rand::Rng;

use super::candidates::CandidateList;
use crate::evaluator::Evaluator;
use crate::solution::Solution;

/// What a repair pass changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RepairOutcome {
    /// Evicted indices, in eviction order.
    pub evicted: Vec<usize>,
    /// Sum of the removal deltas of the evictions.
    pub delta: f64,
}

/// Restores feasibility of `solution`, returning evictions to `candidates`
/// and recording them in `repaired`.
///
/// The solution's cached cost is left untouched; the caller re-evaluates it.
pub(crate) fn repair<E: Evaluator, R: Rng>(
    evaluator: &E,
    solution: &mut Solution,
    candidates: &mut CandidateList,
    repaired: &mut HashSet<usize>,
    rng: &mut R,
) -> RepairOutcome {
    let mut outcome = RepairOutcome::default();
    let mut sorted = solution.sorted();

    let mut i = 0;
    while i + 1 < sorted.len() {
        if sorted[i] + 1 != sorted[i + 1] {
            i += 1;
            continue;
        }

        let evict_left = rng.random::<f64>() <= 0.5;
        let victim = sorted.remove(if evict_left { i } else { i + 1 });

        outcome.delta += evaluator.removal_cost(victim, solution);
        solution.remove(victim);
        candidates.push(victim);
        repaired.insert(victim);
        outcome.evicted.push(victim);

        if !evict_left {
            i += 1;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Each selected index is worth -1.
    struct Count(usize);

    impl Evaluator for Count {
        fn domain_size(&self) -> usize {
            self.0
        }
        fn evaluate(&self, s: &Solution) -> f64 {
            -(s.len() as f64)
        }
        fn insertion_cost(&self, _e: usize, _s: &Solution) -> f64 {
            -1.0
        }
        fn removal_cost(&self, _e: usize, _s: &Solution) -> f64 {
            1.0
        }
        fn exchange_cost(&self, _i: usize, _o: usize, _s: &Solution) -> f64 {
            0.0
        }
    }

    fn run(
        domain: usize,
        members: &[usize],
        seed: u64,
    ) -> (Solution, CandidateList, RepairOutcome, HashSet<usize>) {
        let ev = Count(domain);
        let mut sol = Solution::from_elements(members.iter().copied());
        let mut cl = CandidateList::complement(domain, &sol);
        let mut repaired = HashSet::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = repair(&ev, &mut sol, &mut cl, &mut repaired, &mut rng);
        (sol, cl, outcome, repaired)
    }

    #[test]
    fn test_feasible_solution_is_untouched() {
        let (sol, cl, outcome, repaired) = run(8, &[6, 0, 3], 1);
        assert_eq!(sol.elements(), &[6, 0, 3]);
        assert_eq!(cl.len(), 5);
        assert!(outcome.evicted.is_empty());
        assert_eq!(outcome.delta, 0.0);
        assert!(repaired.is_empty());
    }

    #[test]
    fn test_single_pair_evicts_one() {
        for seed in 0..16 {
            let (sol, cl, outcome, repaired) = run(6, &[4, 1, 2], seed);
            assert!(sol.is_feasible());
            assert_eq!(outcome.evicted.len(), 1);
            let victim = outcome.evicted[0];
            assert!(victim == 1 || victim == 2);
            assert!(sol.contains(4));
            assert!(cl.contains(victim));
            assert!(repaired.contains(&victim));
            assert_eq!(outcome.delta, 1.0);
        }
    }

    #[test]
    fn test_chain_is_resolved_in_one_pass() {
        for seed in 0..32 {
            let (sol, _, outcome, _) = run(10, &[2, 3, 4, 5, 6], seed);
            assert!(sol.is_feasible(), "seed {seed}: {sol}");
            assert!((1..=3).contains(&sol.len()), "seed {seed}: {sol}");
            assert_eq!(outcome.evicted.len() + sol.len(), 5);
        }
    }

    #[test]
    fn test_repair_is_seed_deterministic() {
        let a = run(12, &[0, 1, 2, 5, 6, 9, 10, 11], 42);
        let b = run(12, &[0, 1, 2, 5, 6, 9, 10, 11], 42);
        assert_eq!(a.0, b.0);
        assert_eq!(a.2, b.2);
    }

    proptest! {
        #[test]
        fn prop_repair_restores_feasibility_and_partition(
            members in proptest::collection::btree_set(0usize..40, 0..30),
            seed in any::<u64>(),
        ) {
            let members: Vec<usize> = members.into_iter().collect();
            let (sol, cl, outcome, repaired) = run(40, &members, seed);

            prop_assert!(sol.is_feasible());
            prop_assert_eq!(sol.len() + cl.len(), 40);
            for e in 0..40 {
                prop_assert!(sol.contains(e) != cl.contains(e));
            }
            prop_assert_eq!(outcome.evicted.len(), repaired.len());
            prop_assert_eq!(outcome.delta, outcome.evicted.len() as f64);
            for e in &outcome.evicted {
                prop_assert!(members.contains(e));
            }
        }
    }
}
