//! Quadratic binary objective `f(x) = xᵀ A x` with O(|S|) move deltas.

use super::instance::QbfInstance;
use crate::evaluator::Evaluator;
use crate::solution::Solution;

/// Optimization direction of a [`Qbf`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Objective {
    /// Report `f(x)` as is.
    #[default]
    Minimize,
    /// Report `-f(x)`, so a minimizing search maximizes `f`.
    Maximize,
}

/// Quadratic binary function over a [`QbfInstance`].
///
/// `f(x) = Σᵢ Σⱼ xᵢ A[i][j] xⱼ`, where `xᵢ = 1` iff `i` is in the solution.
///
/// # Examples
///
/// ```
/// use qbf_metaheur::qbf::{Objective, Qbf, QbfInstance};
/// use qbf_metaheur::{Evaluator, Solution};
///
/// let inst: QbfInstance = "3\n2 1 -4\n3 0\n1".parse().unwrap();
/// let max_qbf = Qbf::new(inst, Objective::Maximize);
///
/// let sol = Solution::from_elements([0, 2]);
/// // f = A00 + A22 + A02 = 2 + 1 - 4 = -1, reported negated
/// assert_eq!(max_qbf.evaluate(&sol), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Qbf {
    instance: QbfInstance,
    objective: Objective,
}

impl Qbf {
    pub fn new(instance: QbfInstance, objective: Objective) -> Self {
        Self {
            instance,
            objective,
        }
    }

    pub fn instance(&self) -> &QbfInstance {
        &self.instance
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    #[inline]
    fn signed(&self, value: f64) -> f64 {
        match self.objective {
            Objective::Minimize => value,
            Objective::Maximize => -value,
        }
    }

    /// `A[i][j] + A[j][i]`, the pairwise weight of two distinct variables.
    #[inline]
    fn interaction(&self, i: usize, j: usize) -> f64 {
        self.instance.coefficient(i, j) + self.instance.coefficient(j, i)
    }

    /// Contribution of `element` against every selected variable except itself.
    fn contribution(&self, element: usize, solution: &Solution) -> f64 {
        let linked: f64 = solution
            .iter()
            .filter(|&j| j != element)
            .map(|j| self.interaction(element, j))
            .sum();
        self.instance.coefficient(element, element) + linked
    }

    fn raw_value(&self, solution: &Solution) -> f64 {
        let elems = solution.elements();
        let mut total = 0.0;
        for &i in elems {
            for &j in elems {
                total += self.instance.coefficient(i, j);
            }
        }
        total
    }
}

impl Evaluator for Qbf {
    fn domain_size(&self) -> usize {
        self.instance.size()
    }

    fn evaluate(&self, solution: &Solution) -> f64 {
        self.signed(self.raw_value(solution))
    }

    fn insertion_cost(&self, element: usize, solution: &Solution) -> f64 {
        if solution.contains(element) {
            return 0.0;
        }
        self.signed(self.contribution(element, solution))
    }

    fn removal_cost(&self, element: usize, solution: &Solution) -> f64 {
        if !solution.contains(element) {
            return 0.0;
        }
        self.signed(-self.contribution(element, solution))
    }

    fn exchange_cost(&self, incoming: usize, outgoing: usize, solution: &Solution) -> f64 {
        if solution.contains(incoming) {
            return self.removal_cost(outgoing, solution);
        }
        if !solution.contains(outgoing) {
            return self.insertion_cost(incoming, solution);
        }
        let delta = self.contribution(incoming, solution) - self.contribution(outgoing, solution)
            - self.interaction(incoming, outgoing);
        self.signed(delta)
    }
}
