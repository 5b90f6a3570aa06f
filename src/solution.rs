//! Subset solutions over a binary-variable domain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of selected variable indices together with its cached cost.
///
/// Elements are kept in insertion order so that scans over the solution are
/// reproducible for a given seed. The cost is whatever the last call to
/// [`Solution::set_cost`] stored; it is not recomputed automatically.
///
/// # Examples
///
/// ```
/// use qbf_metaheur::Solution;
///
/// let mut sol = Solution::new();
/// assert!(sol.insert(4));
/// assert!(sol.insert(1));
/// assert!(!sol.insert(4));
/// assert_eq!(sol.elements(), &[4, 1]);
/// assert!(sol.is_feasible());
///
/// sol.insert(2);
/// assert!(!sol.is_feasible());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    elements: Vec<usize>,
    cost: f64,
}

impl Solution {
    /// Creates an empty solution with cost 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from the given elements, dropping duplicates.
    ///
    /// The cost is left at 0; evaluate it before relying on it.
    pub fn from_elements<I: IntoIterator<Item = usize>>(elements: I) -> Self {
        let mut sol = Self::new();
        for e in elements {
            sol.insert(e);
        }
        sol
    }

    /// Selected indices in insertion order.
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    /// Cached cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Replaces the cached cost.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: usize) -> bool {
        self.elements.contains(&element)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().copied()
    }

    /// Appends `element`. Returns `false` if it was already selected.
    pub fn insert(&mut self, element: usize) -> bool {
        if self.contains(element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes `element`, keeping the order of the rest.
    /// Returns `false` if it was not selected.
    pub fn remove(&mut self, element: usize) -> bool {
        match self.elements.iter().position(|&e| e == element) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Elements sorted ascending.
    pub fn sorted(&self) -> Vec<usize> {
        let mut v = self.elements.clone();
        v.sort_unstable();
        v
    }

    /// Whether `element` has a selected neighbour (`element - 1` or `element + 1`).
    pub fn has_neighbor(&self, element: usize) -> bool {
        self.elements
            .iter()
            .any(|&e| e + 1 == element || element + 1 == e)
    }

    /// `true` when no pair `(i, i + 1)` is selected.
    pub fn is_feasible(&self) -> bool {
        self.sorted().windows(2).all(|w| w[0] + 1 != w[1])
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cost=[{}], size=[{}], elements={:?}",
            self.cost,
            self.elements.len(),
            self.elements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_solution_is_empty() {
        let sol = Solution::new();
        assert!(sol.is_empty());
        assert_eq!(sol.cost(), 0.0);
        assert!(sol.is_feasible());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut sol = Solution::from_elements([7, 3, 9, 5]);
        assert!(sol.remove(3));
        assert!(!sol.remove(3));
        assert_eq!(sol.elements(), &[7, 9, 5]);
    }

    #[test]
    fn test_from_elements_drops_duplicates() {
        let sol = Solution::from_elements([2, 4, 2, 6, 4]);
        assert_eq!(sol.elements(), &[2, 4, 6]);
    }

    #[test]
    fn test_has_neighbor() {
        let sol = Solution::from_elements([0, 4]);
        assert!(sol.has_neighbor(1));
        assert!(sol.has_neighbor(3));
        assert!(sol.has_neighbor(5));
        assert!(!sol.has_neighbor(2));
        assert!(!sol.has_neighbor(7));
    }

    #[test]
    fn test_feasibility_ignores_insertion_order() {
        let sol = Solution::from_elements([5, 0, 4]);
        assert!(!sol.is_feasible());
        let sol = Solution::from_elements([6, 0, 4, 2]);
        assert!(sol.is_feasible());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Solution::from_elements([1, 3]);
        a.set_cost(-4.0);
        let b = a.clone();
        a.remove(1);
        a.set_cost(0.0);
        assert_eq!(b.elements(), &[1, 3]);
        assert_eq!(b.cost(), -4.0);
    }

    #[test]
    fn test_display() {
        let mut sol = Solution::from_elements([2, 0]);
        sol.set_cost(-1.5);
        assert_eq!(sol.to_string(), "cost=[-1.5], size=[2], elements=[2, 0]");
    }
}
