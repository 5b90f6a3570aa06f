//! Objective-function contract consumed by the search engines.

use crate::solution::Solution;

/// Defines the objective being minimized over subsets of `0..domain_size()`.
///
/// Implementors own the only authoritative notion of cost. The incremental
/// methods must agree with [`Evaluator::evaluate`]: for every move,
/// `delta == evaluate(after) - evaluate(before)`. The runner checks this
/// after each iteration and aborts with
/// [`SearchError::EvaluatorInconsistency`](crate::SearchError::EvaluatorInconsistency)
/// when it does not hold.
///
/// Delta methods should not re-derive the full objective; O(|S|) or
/// O(domain) per call keeps the neighborhood scan tractable.
///
/// # Minimization
///
/// Lower is better. For maximization, negate every value (see
/// [`Objective::Maximize`](crate::qbf::Objective::Maximize)).
///
/// # Examples
///
/// ```
/// use qbf_metaheur::{Evaluator, Solution};
///
/// /// Every selected variable is worth -1.
/// struct Count(usize);
///
/// impl Evaluator for Count {
///     fn domain_size(&self) -> usize { self.0 }
///     fn evaluate(&self, s: &Solution) -> f64 { -(s.len() as f64) }
///     fn insertion_cost(&self, _e: usize, _s: &Solution) -> f64 { -1.0 }
///     fn removal_cost(&self, _e: usize, _s: &Solution) -> f64 { 1.0 }
///     fn exchange_cost(&self, _i: usize, _o: usize, _s: &Solution) -> f64 { 0.0 }
/// }
///
/// let ev = Count(4);
/// assert_eq!(ev.evaluate(&Solution::from_elements([0, 2])), -2.0);
/// ```
pub trait Evaluator: Send + Sync {
    /// Number of binary variables.
    fn domain_size(&self) -> usize;

    /// Full objective value of `solution`.
    fn evaluate(&self, solution: &Solution) -> f64;

    /// Cost change of adding `element` (not currently in `solution`).
    fn insertion_cost(&self, element: usize, solution: &Solution) -> f64;

    /// Cost change of removing `element` (currently in `solution`).
    fn removal_cost(&self, element: usize, solution: &Solution) -> f64;

    /// Cost change of swapping `incoming` in and `outgoing` out.
    fn exchange_cost(&self, incoming: usize, outgoing: usize, solution: &Solution) -> f64;
}

