//! Neighborhood move descriptors.

/// A single move on the incumbent.
///
/// `Stay` is the explicit "no move" result of a neighborhood scan that
/// found nothing admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Add a candidate to the solution.
    Insert(usize),
    /// Drop a member from the solution.
    Remove(usize),
    /// Swap a candidate in for a member.
    Exchange { incoming: usize, outgoing: usize },
    /// Leave the solution unchanged.
    Stay,
}

impl Move {
    /// Index entering the solution, if any.
    pub fn incoming(&self) -> Option<usize> {
        match *self {
            Move::Insert(e) | Move::Exchange { incoming: e, .. } => Some(e),
            Move::Remove(_) | Move::Stay => None,
        }
    }

    /// Index leaving the solution, if any.
    pub fn outgoing(&self) -> Option<usize> {
        match *self {
            Move::Remove(e) | Move::Exchange { outgoing: e, .. } => Some(e),
            Move::Insert(_) | Move::Stay => None,
        }
    }
}

/// A move together with its predicted cost change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub delta: f64,
}

impl ScoredMove {
    pub(crate) fn stay() -> Self {
        Self {
            mv: Move::Stay,
            delta: 0.0,
        }
    }
}
