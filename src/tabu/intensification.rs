//! Intensification by restart.
//!
//! A two-state automaton driven by two counters. While inactive, every
//! iteration records which indices the incumbent holds; after
//! `start_after` such iterations the search restarts from the best solution
//! with the most frequent indices fixed (they may not be removed). After
//! `duration` active iterations the fixed set and the frequency table are
//! dropped and the cycle begins again.

use std::collections::HashSet;

use crate::solution::Solution;

/// Current state of the intensification automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Phase {
    #[default]
    Inactive,
    Active,
}

/// State change produced by [`Intensification::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Entered [`Phase::Active`]; the caller restarts the incumbent.
    Started,
    /// Returned to [`Phase::Inactive`].
    Ended,
}

#[derive(Debug, Clone)]
pub(crate) struct Intensification {
    phase: Phase,
    start_after: usize,
    duration: usize,
    percentage: u8,
    since_restart: usize,
    active_for: usize,
    /// Occurrence count per index, indexed by element.
    counts: Vec<u64>,
    /// Indices with a non-zero count, in first-seen order.
    seen: Vec<usize>,
    fixed: HashSet<usize>,
}

impl Intensification {
    pub(crate) fn new(
        domain_size: usize,
        start_after: usize,
        duration: usize,
        percentage: u8,
    ) -> Self {
        Self {
            phase: Phase::Inactive,
            start_after,
            duration,
            percentage,
            since_restart: 0,
            active_for: 0,
            counts: vec![0; domain_size],
            seen: Vec::new(),
            fixed: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// Indices that may not be removed, while active.
    pub(crate) fn fixed(&self) -> Option<&HashSet<usize>> {
        match self.phase {
            Phase::Active => Some(&self.fixed),
            Phase::Inactive => None,
        }
    }

    /// Number of distinct indices in the frequency table.
    #[cfg(test)]
    pub(crate) fn table_size(&self) -> usize {
        self.seen.len()
    }

    /// Advances the automaton by one search iteration.
    pub(crate) fn tick(&mut self, incumbent: &Solution) -> Option<Transition> {
        match self.phase {
            Phase::Inactive => {
                self.since_restart += 1;
                self.record(incumbent);
            }
            Phase::Active => self.active_for += 1,
        }

        if self.phase == Phase::Inactive && self.since_restart == self.start_after {
            self.phase = Phase::Active;
            self.since_restart = 0;
            self.fix_most_frequent();
            return Some(Transition::Started);
        }

        if self.phase == Phase::Active && self.active_for == self.duration {
            self.phase = Phase::Inactive;
            self.active_for = 0;
            self.reset();
            return Some(Transition::Ended);
        }

        None
    }

    fn record(&mut self, incumbent: &Solution) {
        for e in incumbent.iter() {
            if e >= self.counts.len() {
                self.counts.resize(e + 1, 0);
            }
            if self.counts[e] == 0 {
                self.seen.push(e);
            }
            self.counts[e] += 1;
        }
    }

    /// Number of indices fixed for a table of `table_size` entries.
    pub(crate) fn fixed_count(table_size: usize, percentage: u8) -> usize {
        (table_size as f64 * f64::from(percentage) / 100.0).round() as usize
    }

    fn fix_most_frequent(&mut self) {
        let mut ranked = self.seen.clone();
        // stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| self.counts[*b].cmp(&self.counts[*a]));

        let k = Self::fixed_count(ranked.len(), self.percentage);
        self.fixed = ranked.into_iter().take(k).collect();
    }

    fn reset(&mut self) {
        for &e in &self.seen {
            self.counts[e] = 0;
        }
        self.seen.clear();
        self.fixed.clear();
    }
}
