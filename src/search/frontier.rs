use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    cost: usize,
    sequence: u64,
    key: u64,
    index: NodeIndex,
}

/// min-heap on cost, first in first out among equal costs
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of the best-first search.
///
/// Holds at most one live entry per hand key, always the cheapest offered
/// so far. Replacing an entry leaves the old one in the heap; it is
/// recognised as stale and skipped when it surfaces.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    live: HashMap<u64, (NodeIndex, usize)>,
    sequence: u64,
}

impl Frontier {
    /// Queue `index` under `key` unless an entry at least as cheap is
    /// already live. Returns whether it was queued.
    pub fn offer(&mut self, index: NodeIndex, key: u64, cost: usize) -> bool {
        match self.live.get(&key) {
            Some((_, live)) if *live <= cost => false,
            _ => {
                self.live.insert(key, (index, cost));
                self.heap.push(Entry {
                    cost,
                    sequence: self.sequence,
                    key,
                    index,
                });
                self.sequence += 1;
                true
            }
        }
    }
    /// Remove and return the cheapest live entry.
    pub fn pop(&mut self) -> Option<NodeIndex> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&(entry.index, entry.cost)) {
                self.live.remove(&entry.key);
                return Some(entry.index);
            }
        }
        None
    }
    /// Live entry holding the same ranks as `key`, if any.
    pub fn find(&self, key: u64) -> Option<NodeIndex> {
        self.live.get(&key).map(|(index, _)| *index)
    }
    pub fn len(&self) -> usize {
        self.live.len()
    }
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
