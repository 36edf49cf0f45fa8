//! The composite index + sequence held behind the set's lock.
//!
//! Every method here assumes exclusive (or shared, for reads) access has
//! already been arranged by the caller. The two views are only ever touched
//! together, so that an element is in the index exactly when it appears once
//! in the sequence.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

const INVARIANT_PANIC_MESSAGE: &str = "index and sequence must hold exactly the same elements";

pub(super) struct Storage<T, S> {
    index: HashSet<T, S>,
    sequence: Vec<T>,
}

impl<T, S> Storage<T, S> {
    #[inline]
    pub(super) fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub(super) fn as_slice(&self) -> &[T] {
        &self.sequence
    }

    #[inline]
    pub(super) fn hasher(&self) -> &S {
        self.index.hasher()
    }

    pub(super) fn into_sequence(self) -> Vec<T> {
        self.sequence
    }
}

impl<T, S> Storage<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    pub(super) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            index: HashSet::with_capacity_and_hasher(capacity, hasher),
            sequence: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(super) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(value)
    }

    /// Appends `value` unless it is already present. Returns whether it was added.
    pub(super) fn insert(&mut self, value: T) -> bool {
        if self.index.contains(&value) {
            return false;
        }
        self.index.insert(value.clone());
        self.sequence.push(value);
        self.debug_check_invariants();
        true
    }

    /// Removes `value` from both views. The sequence position is found by a
    /// linear scan.
    pub(super) fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.index.remove(value) {
            return false;
        }
        if let Some(position) = self.position(value) {
            self.sequence.remove(position);
        }
        self.debug_check_invariants();
        true
    }

    pub(super) fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.sequence.len() {
            return None;
        }
        let value = self.sequence.remove(position);
        self.index.remove(&value);
        self.debug_check_invariants();
        Some(value)
    }

    #[inline]
    pub(super) fn get(&self, position: usize) -> Option<&T> {
        self.sequence.get(position)
    }

    pub(super) fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.sequence.iter().position(|item| item.borrow() == value)
    }

    /// Reorders the sequence only; the index does not depend on order.
    pub(super) fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sequence.sort_unstable_by(|left, right| {
            if less(left, right) {
                std::cmp::Ordering::Less
            } else if less(right, left) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        self.debug_check_invariants();
    }

    /// Drops every element and refills from `values`, keeping the first
    /// occurrence of repeated values.
    pub(super) fn replace_with<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(values);
    }

    pub(super) fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.index.reserve(lower);
        self.sequence.reserve(lower);
        for value in values {
            self.insert(value);
        }
    }

    pub(super) fn clear(&mut self) {
        self.index.clear();
        self.sequence.clear();
    }

    /// Deep copy into fresh storage with a caller-chosen hasher.
    pub(super) fn duplicate_with_hasher(&self, hasher: S) -> Self {
        let mut copy = Self::with_capacity_and_hasher(self.sequence.len(), hasher);
        copy.index.extend(self.sequence.iter().cloned());
        copy.sequence.extend(self.sequence.iter().cloned());
        copy.debug_check_invariants();
        copy
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert!(
            self.index.len() == self.sequence.len()
                && self.sequence.iter().all(|item| self.index.contains(item)),
            "{INVARIANT_PANIC_MESSAGE}"
        );
    }
}
