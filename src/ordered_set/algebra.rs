//! Derived sets: clone, union, intersection, difference and slicing.
//!
//! Every result is built in freshly allocated storage that nothing else can
//! see, so no lock is taken on it. At most one operand is locked at any
//! moment, which keeps `a.union(&a)` and concurrent `a.union(&b)` /
//! `b.union(&a)` free of lock cycles.

use std::hash::{BuildHasher, Hash};

use super::OrderedSet;
use super::storage::Storage;
use crate::error::SliceError;

impl<T, S> OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Builds a private set from `values` using this set's hash builder.
    fn derive_from(&self, values: Vec<T>) -> Self {
        let hasher = self.storage.read().hasher().clone();
        let mut storage = Storage::with_capacity_and_hasher(values.len(), hasher);
        storage.extend(values);
        Self::from_storage(storage)
    }

    /// Returns a new set with this set's elements followed by the elements
    /// of `other` not already present, each in its own order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2].into();
    /// let right: OrderedSet<i32> = [2, 3].into();
    /// assert_eq!(left.union(&right).values(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        let appended = other.values();
        result.storage.get_mut().extend(appended);
        result
    }

    /// Returns a new set with the elements of this set that `other` also
    /// contains, in this set's order. `other` is only read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [3, 2, 1].into();
    /// let right: OrderedSet<i32> = [1, 3, 5].into();
    /// assert_eq!(left.intersect(&right).values(), vec![3, 1]);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.retain_against(other, true)
    }

    /// Returns a new set with the elements of this set that `other` does not
    /// contain, in this set's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 2, 3].into();
    /// let right: OrderedSet<i32> = [2].into();
    /// assert_eq!(left.difference(&right).values(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.retain_against(other, false)
    }

    fn retain_against(&self, other: &Self, keep_shared: bool) -> Self {
        let candidates = self.values();
        let kept: Vec<T> = {
            let other = other.storage.read();
            candidates
                .into_iter()
                .filter(|value| other.contains(value) == keep_shared)
                .collect()
        };
        self.derive_from(kept)
    }

    /// Returns a new set with the elements at positions `from..to`.
    ///
    /// `from == to` yields an empty set.
    ///
    /// # Errors
    ///
    /// - [`SliceError::EndOutOfRange`] if `to` is greater than [`len`](Self::len)
    /// - [`SliceError::StartAfterEnd`] if `from` is greater than `to`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::{OrderedSet, SliceError};
    ///
    /// let set: OrderedSet<char> = ['a', 'b', 'c', 'd'].into();
    /// assert_eq!(set.slice(1, 3)?.values(), vec!['b', 'c']);
    /// assert!(set.slice(2, 2)?.is_empty());
    /// assert!(set.slice(0, 9).is_err());
    /// # Ok::<(), SliceError>(())
    /// ```
    pub fn slice(&self, from: usize, to: usize) -> Result<Self, SliceError> {
        let selected = {
            let storage = self.storage.read();
            SliceError::check(from, to, storage.len()).inspect_err(|error| {
                tracing::debug!(from, to, len = storage.len(), %error, "rejected slice");
            })?;
            storage.as_slice()[from..to].to_vec()
        };
        Ok(self.derive_from(selected))
    }
}

impl<T, S> Clone for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Copies both views into new storage; the copies never share state.
    fn clone(&self) -> Self {
        let storage = self.storage.read();
        let copy = storage.duplicate_with_hasher(storage.hasher().clone());
        drop(storage);
        Self::from_storage(copy)
    }
}
