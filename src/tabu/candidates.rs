//! Candidate list: indices outside the incumbent.

use crate::solution::Solution;

/// Indices eligible to enter the incumbent.
///
/// Kept in an explicit order so that neighborhood scans, and therefore
/// tie-breaking, are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CandidateList {
    items: Vec<usize>,
}

impl CandidateList {
    /// Every index of `0..domain_size` not selected in `solution`.
    pub(crate) fn complement(domain_size: usize, solution: &Solution) -> Self {
        let mut selected = vec![false; domain_size];
        for e in solution.iter() {
            if let Some(slot) = selected.get_mut(e) {
                *slot = true;
            }
        }
        Self {
            items: (0..domain_size).filter(|&i| !selected[i]).collect(),
        }
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn contains(&self, element: usize) -> bool {
        self.items.contains(&element)
    }

    pub(crate) fn push(&mut self, element: usize) {
        debug_assert!(!self.contains(element), "{element} already a candidate");
        self.items.push(element);
    }

    /// Removes `element`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, element: usize) -> bool {
        match self.items.iter().position(|&e| e == element) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_of_empty_solution_is_domain() {
        let cl = CandidateList::complement(5, &Solution::new());
        assert_eq!(cl.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_complement_excludes_members() {
        let sol = Solution::from_elements([3, 0]);
        let cl = CandidateList::complement(5, &sol);
        assert_eq!(cl.as_slice(), &[1, 2, 4]);
        assert_eq!(cl.len(), 3);
    }

    #[test]
    fn test_push_and_remove_keep_order() {
        let mut cl = CandidateList::complement(4, &Solution::from_elements([1]));
        assert!(cl.remove(2));
        assert!(!cl.remove(2));
        cl.push(1);
        assert_eq!(cl.as_slice(), &[0, 3, 1]);
        assert!(cl.contains(1));
        assert!(!cl.is_empty());
    }
}
