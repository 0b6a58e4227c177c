//! Growable contiguous storage for entity collections
//!
//! A `GrowableSequence<T>` owns a single block of `T` slots. Capacity doubles
//! (with a floor of 1) when a push finds the block full, so appends are
//! amortized O(1) and no element is ever allocated on its own.
//!
//! Growth moves every element to a new block. Anything that may grow takes
//! `&mut self`, so references obtained before a growth cannot outlive it.

use std::fmt;
use std::slice;

/// Contiguous, reallocatable, ordered collection
#[derive(Clone)]
pub struct GrowableSequence<T> {
    items: Vec<T>,
    /// Logical slot count; the backing `Vec` always holds at least this many
    capacity: usize,
}

impl<T> GrowableSequence<T> {
    /// Create an unallocated sequence
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Number of live elements
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a backing block is currently held
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity > 0
    }

    /// Append `value`, doubling the capacity first if the block is full
    pub fn push(&mut self, value: T) {
        if self.size() == self.capacity {
            self.grow_to((self.capacity * 2).max(1));
        }
        self.items.push(value);
    }

    /// Remove and return the last element. Storage is never shrunk.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Ensure room for at least `n` elements. Grows to exactly `n` slots
    /// when the current block is too small.
    pub fn reserve(&mut self, n: usize) {
        if n > self.capacity {
            self.grow_to(n);
        }
    }

    /// Set the size to `n`. Growing reserves exactly `n` slots and fills the
    /// new ones with `T::default()`; shrinking drops the tail.
    pub fn resize(&mut self, n: usize)
    where
        T: Default,
    {
        self.reserve(n);
        self.items.resize_with(n, T::default);
    }

    /// Drop every element, keeping the allocated block
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Element at `i`. `i < size()` is a caller contract.
    #[inline]
    pub fn at(&self, i: usize) -> &T {
        debug_assert!(i < self.size(), "index {i} out of bounds (size {})", self.size());
        &self.items[i]
    }

    /// Mutable element at `i`. `i < size()` is a caller contract.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.size(), "index {i} out of bounds (size {})", self.size());
        &mut self.items[i]
    }

    /// Remove the element at `i` by moving the last element into its slot.
    ///
    /// O(1); the relative order of the remaining elements is not kept.
    pub fn remove_unordered(&mut self, i: usize) -> T {
        debug_assert!(i < self.size(), "index {i} out of bounds (size {})", self.size());
        self.items.swap_remove(i)
    }

    /// Drop every element and free the block. A no-op when unallocated.
    pub fn release(&mut self) {
        *self = Self::new();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Move the live elements into a block of exactly `capacity` slots
    fn grow_to(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size());
        let mut fresh = Vec::with_capacity(capacity);
        fresh.append(&mut self.items);
        self.items = fresh;
        self.capacity = capacity;
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::rc::Rc;

    #[test]
    fn test_push_doubles_capacity() {
        let mut seq: GrowableSequence<u32> = GrowableSequence::new();
        assert_eq!(seq.capacity(), 0);
        assert_eq!(seq.size(), 0);

        let mut capacities = Vec::new();
        let mut sizes = Vec::new();
        for value in 0..5 {
            seq.push(value);
            capacities.push(seq.capacity());
            sizes.push(seq.size());
        }

        assert_eq!(capacities, vec![1, 2, 4, 4, 8]);
        assert_eq!(sizes, vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut seq: GrowableSequence<u32> = GrowableSequence::new();
        assert_eq!(seq.pop(), None);
        assert_eq!(seq.size(), 0);

        seq.push(7);
        assert_eq!(seq.pop(), Some(7));
        assert_eq!(seq.pop(), None);
        assert_eq!(seq.size(), 0);
        // Storage is kept
        assert_eq!(seq.capacity(), 1);
    }

    #[test]
    fn test_remove_unordered_swaps_in_last() {
        let mut seq = GrowableSequence::new();
        for value in [10, 20, 30, 40] {
            seq.push(value);
        }

        let removed = seq.remove_unordered(1);
        assert_eq!(removed, 20);
        assert_eq!(seq.size(), 3);
        assert_eq!(seq.as_slice(), &[10, 40, 30]);

        // Removing the last slot is a plain pop
        assert_eq!(seq.remove_unordered(2), 30);
        assert_eq!(seq.as_slice(), &[10, 40]);
    }

    #[test]
    fn test_reserve_is_exact_and_idempotent() {
        let mut seq: GrowableSequence<u64> = GrowableSequence::new();
        seq.reserve(0);
        assert!(!seq.is_allocated());

        seq.reserve(5);
        assert_eq!(seq.capacity(), 5);
        assert_eq!(seq.size(), 0);

        seq.reserve(3);
        assert_eq!(seq.capacity(), 5);

        for value in 0..6 {
            seq.push(value);
        }
        assert_eq!(seq.capacity(), 10);
    }

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut seq: GrowableSequence<i32> = GrowableSequence::new();
        seq.push(3);
        seq.resize(4);
        assert_eq!(seq.size(), 4);
        assert_eq!(seq.capacity(), 4);
        assert_eq!(*seq.at(0), 3);

        *seq.at_mut(3) = 9;
        seq.resize(2);
        assert_eq!(seq.as_slice(), &[3, 0]);
        assert_eq!(seq.capacity(), 4);
    }

    #[test]
    fn test_clear_keeps_storage_release_frees_it() {
        let mut seq = GrowableSequence::new();
        for value in 0..3 {
            seq.push(value);
        }
        seq.clear();
        assert_eq!(seq.size(), 0);
        assert_eq!(seq.capacity(), 4);

        seq.release();
        assert_eq!(seq.capacity(), 0);
        assert!(!seq.is_allocated());

        // Releasing twice is harmless
        seq.release();
        assert_eq!(seq.size(), 0);
    }

    #[test]
    #[should_panic]
    fn test_at_past_the_end_panics() {
        let mut seq = GrowableSequence::new();
        seq.push(1u8);
        let _ = seq.at(seq.size());
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut seq = GrowableSequence::new();
        for value in 0..3 {
            seq.push(value);
        }
        let copy = seq.clone();
        assert_eq!(copy, seq);
        assert_eq!(copy.capacity(), 4);
    }

    #[test]
    fn test_elements_dropped_exactly_once() {
        let marker = Rc::new(());
        let mut seq = GrowableSequence::new();
        for _ in 0..5 {
            seq.push(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 6);

        drop(seq.remove_unordered(0));
        assert_eq!(Rc::strong_count(&marker), 5);

        seq.clear();
        assert_eq!(Rc::strong_count(&marker), 1);

        seq.push(Rc::clone(&marker));
        drop(seq);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_nested_sequences_survive_growth() {
        let mut outer: GrowableSequence<GrowableSequence<u8>> = GrowableSequence::new();
        for i in 0..9u8 {
            let mut inner = GrowableSequence::new();
            inner.push(i);
            outer.push(inner);
        }
        let firsts: Vec<u8> = outer.iter().map(|inner| *inner.at(0)).collect();
        assert_eq!(firsts, (0..9).collect::<Vec<_>>());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        RemoveUnordered(usize),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i32>().prop_map(Op::Push),
            1 => Just(Op::Pop),
            2 => any::<usize>().prop_map(Op::RemoveUnordered),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn prop_matches_vec_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut seq = GrowableSequence::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(value) => {
                        seq.push(value);
                        model.push(value);
                    }
                    Op::Pop => {
                        prop_assert_eq!(seq.pop(), model.pop());
                    }
                    Op::RemoveUnordered(raw) => {
                        if !model.is_empty() {
                            let i = raw % model.len();
                            prop_assert_eq!(seq.remove_unordered(i), model.swap_remove(i));
                        }
                    }
                    Op::Clear => {
                        seq.clear();
                        model.clear();
                    }
                }
                prop_assert!(seq.size() <= seq.capacity());
                prop_assert_eq!(seq.as_slice(), model.as_slice());
            }
        }
    }
}
