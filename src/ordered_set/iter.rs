//! Standard trait implementations: construction from iterators, consumption,
//! formatting and equality.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::OrderedSet;
use super::storage::Storage;

impl<T, S> Default for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Collects in iteration order, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use orderedset::OrderedSet;
///
/// let set: OrderedSet<i32> = vec![3, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.values(), vec![3, 1, 2]);
/// ```
impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut storage = Storage::with_capacity_and_hasher(0, S::default());
        storage.extend(iter);
        Self::from_storage(storage)
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.get_mut().extend(iter);
    }
}

impl<T, S> From<Vec<T>> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S, const N: usize> From<[T; N]> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_values().into_iter()
    }
}

impl<T, S> fmt::Debug for OrderedSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_set()
            .entries(self.storage.read().as_slice())
            .finish()
    }
}

/// Two sets are equal when they hold the same elements in the same order.
impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let left = self.values();
        other.with_values(|right| left.as_slice() == right)
    }
}

impl<T, S> Eq for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
}
