//! The open list shared by every search: a binary min-heap over arena indices keyed by a
//! per-algorithm priority. There is no decrease-key; a cheaper rediscovery is pushed as a new
//! entry and the stale one is discarded when it surfaces.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<K> {
    /// The key the heap is ordered on: `g`, `h` or `g + h` depending on the solver.
    pub priority: K,
    /// Accumulated cost at the time of insertion, used to detect stale entries.
    pub cost: K,
    /// Index of the node in the search arena.
    pub index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the priority comparison is reversed. Equal priorities
        // prefer the entry with the larger accumulated cost, i.e. the one deeper in the search.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Frontier<K> {
    heap: BinaryHeap<FrontierEntry<K>>,
}

impl<K: Ord> Default for Frontier<K> {
    fn default() -> Self {
        Frontier::new()
    }
}

impl<K: Ord> Frontier<K> {
    pub fn new() -> Frontier<K> {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }
    pub fn push(&mut self, entry: FrontierEntry<K>) {
        self.heap.push(entry);
    }
    pub fn pop_min(&mut self) -> Option<FrontierEntry<K>> {
        self.heap.pop()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
