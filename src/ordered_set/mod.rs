//! Thread-safe set that preserves insertion order.
//!
//! This module provides [`OrderedSet`], a collection that behaves like a
//! hash set (no duplicates, constant-time membership test) while remembering
//! the order in which elements were first added, like a `Vec`.
//!
//! # Overview
//!
//! Internally the set keeps two views of the same elements:
//! - an **index** (`HashSet`) for membership and uniqueness
//! - a **sequence** (`Vec`) for insertion order and positional access
//!
//! Both views live in one structure behind a single
//! [`parking_lot::RwLock`], so every public operation sees and leaves them
//! consistent. Reads share the lock; mutations hold it exclusively. Locks are
//! released by guard drop, so early returns cannot leak them.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity        |
//! |--------------------|-------------------|
//! | `add`              | O(1) amortized    |
//! | `has` / `contains` | O(1)              |
//! | `len`              | O(1)              |
//! | `at`               | O(1)              |
//! | `remove`           | O(n)              |
//! | `remove_at`        | O(n)              |
//! | `index_of`         | O(n)              |
//! | `sort_by`          | O(n log n)        |
//! | `union`            | O(n + m)          |
//! | `intersect`        | O(n)              |
//! | `difference`       | O(n)              |
//! | `slice`            | O(to - from)      |
//!
//! `remove` and `index_of` scan the sequence linearly. No value-to-position
//! map is kept, since it would be a third structure to keep in step.
//!
//! # Examples
//!
//! ```rust
//! use orderedset::OrderedSet;
//!
//! let set = OrderedSet::new();
//! set.add(1);
//! set.add(2);
//! set.add(2);
//! assert_eq!(set.values(), vec![1, 2]);
//!
//! set.remove(&1);
//! assert!(!set.has(&1));
//!
//! set.add(3);
//! set.add(4);
//! let other: OrderedSet<i32> = [4, 5].into();
//!
//! let union = set.union(&other);
//! assert_eq!(union.values(), vec![2, 3, 4, 5]);
//! assert_eq!(set.intersect(&other).values(), vec![4]);
//! assert_eq!(set.difference(&other).values(), vec![2, 3]);
//! assert_eq!(union.slice(1, 3).unwrap().values(), vec![3, 4]);
//!
//! union.sort_by(|left, right| left > right);
//! assert_eq!(union.values(), vec![5, 4, 3, 2]);
//! ```

mod algebra;
mod iter;
#[cfg(feature = "serde")]
mod serialization;
mod storage;

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;

use crate::hash::DefaultHashBuilder;
use storage::Storage;

/// A set that remembers the order in which its elements were first added.
///
/// All methods take `&self`; the set synchronizes internally and can be
/// shared between threads behind an `Arc` without further locking.
///
/// Re-adding an element that is already present does not move it. The only
/// operations that reorder elements are [`sort_by`](Self::sort_by) and
/// [`sort`](Self::sort).
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq`, and `Hash`.
/// * `S` - The hash builder for the index. See [`crate::hash`].
///
/// # Examples
///
/// ```rust
/// use orderedset::OrderedSet;
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(OrderedSet::new());
/// let handles: Vec<_> = (0..4)
///     .map(|worker| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             for value in 0..10 {
///                 set.add(worker * 10 + value);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(set.len(), 40);
/// ```
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    storage: RwLock<Storage<T, S>>,
}

impl<T> OrderedSet<T, DefaultHashBuilder>
where
    T: Clone + Eq + Hash,
{
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements in
    /// both views.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty set that hashes with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let set = OrderedSet::with_hasher(RandomState::new());
    /// set.add("alpha");
    /// assert!(set.has("alpha"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set with the given capacity and hash builder.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_storage(Storage::with_capacity_and_hasher(capacity, hasher))
    }

    fn from_storage(storage: Storage<T, S>) -> Self {
        Self {
            storage: RwLock::new(storage),
        }
    }

    /// Adds `value` at the end of the set unless it is already present.
    ///
    /// Returns `true` if the value was added. Adding a present value leaves
    /// the set unchanged, including the value's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set = OrderedSet::new();
    /// assert!(set.add("b"));
    /// assert!(set.add("a"));
    /// assert!(!set.add("b"));
    /// assert_eq!(set.values(), vec!["b", "a"]);
    /// ```
    pub fn add(&self, value: T) -> bool {
        let added = self.storage.write().insert(value);
        if !added {
            tracing::trace!("ignored add of an element already present");
        }
        added
    }

    /// Removes `value` if present, keeping the relative order of the others.
    ///
    /// Returns `true` if the value was present. Removing an absent value is a
    /// no-op.
    ///
    /// Supports borrowed lookups, e.g. `&str` for an `OrderedSet<String>`.
    ///
    /// # Complexity
    ///
    /// O(n): the sequence position is found by a linear scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<String> = ["x", "y", "z"].map(String::from).into();
    /// assert!(set.remove("y"));
    /// assert!(!set.remove("y"));
    /// assert_eq!(set.values(), vec!["x".to_string(), "z".to_string()]);
    /// ```
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.write().remove(value)
    }

    /// Removes and returns the element at `position`.
    ///
    /// Later elements shift one position left. Returns `None`, leaving the
    /// set untouched, if `position` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [10, 20].into();
    /// assert_eq!(set.remove_at(1), Some(20));
    /// assert_eq!(set.remove_at(5), None);
    /// assert_eq!(set.values(), vec![10]);
    /// ```
    pub fn remove_at(&self, position: usize) -> Option<T> {
        let mut storage = self.storage.write();
        let removed = storage.remove_at(position);
        if removed.is_none() {
            tracing::trace!(position, len = storage.len(), "remove_at out of range");
        }
        removed
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1].into();
    /// assert!(set.has(&1));
    /// assert!(!set.has(&2));
    /// ```
    #[inline]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.read().contains(value)
    }

    /// Same as [`has`](Self::has), under the name std collections use.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.has(value)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `position`, or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5].into();
    /// assert_eq!(set.at(0), Some(5));
    /// assert_eq!(set.at(1), None);
    /// ```
    pub fn at(&self, position: usize) -> Option<T> {
        self.storage.read().get(position).cloned()
    }

    /// Returns the position of `value`, or `None` if it is absent.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5, 10].into();
    /// assert_eq!(set.index_of(&10), Some(1));
    /// assert_eq!(set.index_of(&15), None);
    /// ```
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.storage.read().position(value)
    }

    /// Returns the elements in insertion order as a new `Vec`.
    ///
    /// The returned vector is independent of the set.
    pub fn values(&self) -> Vec<T> {
        self.storage.read().as_slice().to_vec()
    }

    /// Runs `f` on the elements in order without copying them.
    ///
    /// A shared lock is held while `f` runs. Calling back into this set from
    /// inside `f` can deadlock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let total: i32 = set.with_values(|values| values.iter().sum());
    /// assert_eq!(total, 6);
    /// ```
    pub fn with_values<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(self.storage.read().as_slice())
    }

    /// Reorders the elements in place so that `less(a, b)` holds for every
    /// `a` placed before `b` that it distinguishes.
    ///
    /// `less` must be a strict weak ordering. Elements it considers equal may
    /// end up in any relative order. Membership is unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 5, 3].into();
    /// set.sort_by(|left, right| left > right);
    /// assert_eq!(set.values(), vec![5, 3, 2]);
    /// ```
    pub fn sort_by<F>(&self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut storage = self.storage.write();
        tracing::debug!(len = storage.len(), "sorting ordered set");
        storage.sort_by(less);
    }

    /// Sorts the elements in ascending order.
    pub fn sort(&self)
    where
        T: Ord,
    {
        self.sort_by(|left, right| left < right);
    }

    /// Replaces the contents with `values`, keeping the first occurrence of
    /// repeated values.
    ///
    /// Not additive: previous elements are dropped. Parse and validate
    /// external input completely before calling this, so that a rejected
    /// input never reaches the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [9].into();
    /// let parsed: Vec<i32> = serde_json::from_str("[1,2,1]").unwrap();
    /// set.replace_with(parsed);
    /// assert_eq!(set.values(), vec![1, 2]);
    ///
    /// assert!(serde_json::from_str::<Vec<i32>>("[3] trailing").is_err());
    /// assert_eq!(set.values(), vec![1, 2]);
    /// ```
    pub fn replace_with<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut storage = self.storage.write();
        storage.replace_with(values);
        tracing::debug!(len = storage.len(), "replaced set contents");
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.storage.write().clear();
    }

    /// Consumes the set, returning its elements in order.
    pub fn into_values(self) -> Vec<T> {
        self.storage.into_inner().into_sequence()
    }
}
