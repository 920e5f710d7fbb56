//! Bounded short-term memory of visited solution signatures.

use std::collections::{HashSet, VecDeque};

use crate::models::Signature;

#[derive(Debug, Clone)]
struct TabuEntry {
    signature: Signature,
    remaining: usize,
}

/// Tabu list keyed by solution signature.
///
/// Entries live in an insertion-ordered queue with a set alongside for O(1)
/// membership. A signature is tabu while it is present; its countdown only
/// decides when it is evicted.
///
/// Recording into a full memory ages every entry by one and evicts those
/// that reach zero. If that frees nothing, the oldest entries are evicted
/// until the new signature fits, so the memory never holds more than
/// `capacity` entries.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Solution};
/// use u_dispatch::tabu::TabuMemory;
///
/// let a = Solution::from_routes(vec![Route::from(vec![1])]).signature();
/// let b = Solution::from_routes(vec![Route::from(vec![2])]).signature();
///
/// let mut memory = TabuMemory::new(1, 1);
/// memory.record(a.clone());
/// assert!(memory.is_tabu(&a));
/// memory.record(b.clone());
/// assert!(!memory.is_tabu(&a));
/// assert!(memory.is_tabu(&b));
/// assert_eq!(memory.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    tenure: usize,
    entries: VecDeque<TabuEntry>,
    index: HashSet<Signature>,
}

impl TabuMemory {
    /// Creates an empty memory.
    ///
    /// `capacity` and `tenure` are clamped to at least 1.
    pub fn new(capacity: usize, tenure: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            tenure: tenure.max(1),
            entries: VecDeque::with_capacity(capacity + 1),
            index: HashSet::with_capacity(capacity + 1),
        }
    }

    /// Returns `true` if `signature` is currently forbidden.
    pub fn is_tabu(&self, signature: &Signature) -> bool {
        self.index.contains(signature)
    }

    /// Inserts `signature`, or refreshes its countdown if already present.
    pub fn record(&mut self, signature: Signature) {
        if self.entries.len() >= self.capacity {
            self.age();
        }

        if self.index.contains(&signature) {
            self.entries.retain(|e| e.signature != signature);
        } else {
            while self.entries.len() >= self.capacity {
                match self.entries.pop_front() {
                    Some(old) => {
                        self.index.remove(&old.signature);
                    }
                    None => break,
                }
            }
            self.index.insert(signature.clone());
        }

        self.entries.push_back(TabuEntry {
            signature,
            remaining: self.tenure,
        });
    }

    /// Decrements every countdown and evicts expired entries.
    fn age(&mut self) {
        let index = &mut self.index;
        self.entries.retain_mut(|e| {
            e.remaining = e.remaining.saturating_sub(1);
            if e.remaining == 0 {
                index.remove(&e.signature);
                false
            } else {
                true
            }
        });
    }

    /// Remaining countdown of `signature`, if present.
    pub fn remaining(&self, signature: &Signature) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| &e.signature == signature)
            .map(|e| e.remaining)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is tabu.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Countdown given to newly recorded signatures.
    pub fn tenure(&self) -> usize {
        self.tenure
    }
}
