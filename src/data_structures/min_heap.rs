use std::fmt::Debug;

/// An array-backed binary min-heap of (priority, value) entries.
///
/// Used as the frontier queue in shortest path algorithms. Entries with equal
/// priority have no guaranteed relative order. The heap never removes stale
/// entries on its own; callers that push duplicates (lazy deletion) are
/// expected to discard superseded entries when popping.
#[derive(Debug, Clone)]
pub struct MinHeap<P, V>
where
    P: Ord + Debug,
{
    /// Backing array; for every index i, entries[i].0 <= entries[2i+1].0
    /// and entries[i].0 <= entries[2i+2].0 where those children exist.
    entries: Vec<(P, V)>,
}

impl<P, V> MinHeap<P, V>
where
    P: Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap { entries: Vec::new() }
    }

    /// Creates a new empty heap with space reserved for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from an unordered vector in O(n).
    ///
    /// Sifts down every internal node from the last one up to the root, the
    /// classic bottom-up heapify.
    pub fn from_vec(entries: Vec<(P, V)>) -> Self {
        let mut heap = MinHeap { entries };
        let n = heap.entries.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Returns true if the heap has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<&(P, V)> {
        self.entries.first()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts an entry, bubbling it up until the heap property holds. O(log n).
    pub fn push(&mut self, priority: P, value: V) {
        self.entries.push((priority, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the minimum entry, or `None` if the heap is empty.
    ///
    /// Moves the last entry into the root slot and sifts it down. O(log n).
    pub fn pop(&mut self) -> Option<(P, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Drains the heap in non-decreasing priority order (heap sort).
    pub fn into_sorted_vec(mut self) -> Vec<(P, V)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Moves the entry at `idx` up while its parent has a strictly greater
    /// priority.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].0 < self.entries[parent].0 {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the heap property for the subtree rooted at `idx`, assuming
    /// both child subtrees already satisfy it.
    fn sift_down(&mut self, mut idx: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < n && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < n && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<P, V> Default for MinHeap<P, V>
where
    P: Ord + Debug,
{
    fn default() -> Self {
        MinHeap::new()
    }
}
