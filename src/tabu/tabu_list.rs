//! Fixed-length tabu memory.

/// Ring buffer of recently moved indices.
///
/// The length never changes after construction: [`TabuList::rotate`]
/// overwrites the oldest slot and advances the head. Empty slots are `None`,
/// so no real index is ever shadowed by a placeholder.
#[derive(Debug, Clone)]
pub(crate) struct TabuList {
    slots: Box<[Option<usize>]>,
    head: usize,
}

impl TabuList {
    /// Creates a list of `2 × tenure` empty slots.
    pub(crate) fn new(tenure: usize) -> Self {
        Self {
            slots: vec![None; 2 * tenure].into_boxed_slice(),
            head: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Evicts the oldest entry and appends `entry` in its place.
    /// Returns the evicted entry.
    pub(crate) fn rotate(&mut self, entry: Option<usize>) -> Option<usize> {
        if self.slots.is_empty() {
            return entry;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], entry);
        self.head = (self.head + 1) % self.slots.len();
        evicted
    }

    pub(crate) fn contains(&self, element: usize) -> bool {
        self.slots.contains(&Some(element))
    }

    /// Entries from oldest to newest.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }
}
