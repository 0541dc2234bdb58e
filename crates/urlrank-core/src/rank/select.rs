//! Bounded top-N selection with a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::table::TableEntry;

/// Heap slot. Ordered so that the *worst* candidate is the heap maximum:
/// lower count is worse, and on equal counts the later-seen entry is worse.
struct Candidate<'a> {
    seen: usize,
    entry: &'a TableEntry,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .entry
            .count
            .cmp(&self.entry.count)
            .then_with(|| self.seen.cmp(&other.seen))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Best `top_n` entries, best first. Same result as a stable sort by count desc.
pub(super) fn heap_top(entries: &[TableEntry], top_n: usize) -> Vec<&TableEntry> {
    if top_n == 0 {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(top_n.min(entries.len()) + 1);
    for (seen, entry) in entries.iter().enumerate() {
        let cand = Candidate { seen, entry };
        if heap.len() < top_n {
            heap.push(cand);
        } else if heap.peek().is_some_and(|worst| cand < *worst) {
            heap.pop();
            heap.push(cand);
        }
    }
    // Ascending under our ordering means best first.
    heap.into_sorted_vec().into_iter().map(|c| c.entry).collect()
}
