//! # Binary Min-Heap
//!
//! Array-backed priority queue ordered by a caller-supplied comparator.
//!
//! There is no decrease-key. Callers that need it push a fresh entry with
//! the improved priority and discard stale entries when they are popped
//! (lazy deletion).
//!
//! Ties are resolved by the comparator alone. Callers that need a
//! reproducible order among equal priorities must fold a secondary key
//! (e.g. an insertion sequence number) into the comparison.

use std::cmp::Ordering;

/// Binary min-heap over `T`.
///
/// After any sequence of `push`/`pop`, the root is a minimum element under
/// the comparator.
///
/// # Example
///
/// ```rust
/// use deadgrid_core::MinHeap;
///
/// // Max-heap by flipping the comparator.
/// let mut heap = MinHeap::new(|a: &i32, b: &i32| b.cmp(a));
/// heap.push(1);
/// heap.push(9);
/// heap.push(4);
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct MinHeap<T, C> {
    /// Heap-ordered storage; children of `i` live at `2i + 1` and `2i + 2`.
    data: Vec<T>,
    /// Ordering; `Less` means "closer to the root".
    compare: C,
}

impl<T: Ord> MinHeap<T, fn(&T, &T) -> Ordering> {
    /// Creates a heap ordered by `T`'s own `Ord`.
    #[must_use]
    pub fn ordered() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap.
    #[must_use]
    pub fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of queued elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current minimum, without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an element. O(log n).
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Moves the element at `index` toward the root until its parent is not greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.data[index], &self.data[parent]) == Ordering::Less {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` toward the leaves until both children are not smaller.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && (self.compare)(&self.data[left], &self.data[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && (self.compare)(&self.data[right], &self.data[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinHeap").field("data", &self.data).finish_non_exhaustive()
    }
}
