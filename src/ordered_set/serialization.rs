//! Serde support.
//!
//! A set is represented as a flat sequence of its elements in order
//! (`[1,2,3]` in JSON). The index is rebuilt on load and never written.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::OrderedSet;
use super::storage::Storage;

impl<T, S> Serialize for OrderedSet<T, S>
where
    T: Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        let storage = self.storage.read();
        let mut seq = serializer.serialize_seq(Some(storage.len()))?;
        for element in storage.as_slice() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

struct OrderedSetVisitor<T, S> {
    marker: PhantomData<fn() -> (T, S)>,
}

impl<T, S> OrderedSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, S> Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Untrusted length hints must not drive a large up-front allocation.
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ELEMENTS);
        let mut storage = Storage::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            storage.insert(element);
        }
        Ok(OrderedSet::from_storage(storage))
    }
}

/// Loads a set from a sequence. Later duplicates of a value are dropped.
///
/// # Examples
///
/// ```rust
/// use orderedset::OrderedSet;
///
/// let set: OrderedSet<i32> = serde_json::from_str("[3,1,3,2]").unwrap();
/// assert_eq!(set.values(), vec![3, 1, 2]);
/// assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");
/// ```
impl<'de, T, S> Deserialize<'de> for OrderedSet<T, S>
where
    T: Deserialize<'de> + Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Replaces the contents of this set with a sequence read from
    /// `deserializer`, keeping the first occurrence of repeated values.
    ///
    /// The sequence is parsed completely before the set is locked. Only the
    /// sequence itself is read: anything the deserializer holds after it is
    /// not inspected. For a streaming format such as JSON, trailing input is
    /// only rejected by the caller's later `end()` check, after the set has
    /// been replaced. When the whole input must be valid, parse it into a
    /// `Vec<T>` first (e.g. `serde_json::from_str`) and pass that to
    /// [`replace_with`](Self::replace_with).
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input is not a sequence of `T`.
    /// The set is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [9].into();
    ///
    /// let mut input = serde_json::Deserializer::from_str("[1,2,1]");
    /// set.replace_from(&mut input).unwrap();
    /// assert_eq!(set.values(), vec![1, 2]);
    ///
    /// let mut malformed = serde_json::Deserializer::from_str("{\"a\":1}");
    /// assert!(set.replace_from(&mut malformed).is_err());
    /// assert_eq!(set.values(), vec![1, 2]);
    /// ```
    pub fn replace_from<'de, D>(&self, deserializer: D) -> Result<(), D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer).inspect_err(|_| {
            tracing::debug!("rejected malformed input, set left unchanged");
        })?;
        self.replace_with(values);
        Ok(())
    }
}
