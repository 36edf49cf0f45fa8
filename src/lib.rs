//! # orderedset
//!
//! A thread-safe set that remembers insertion order.
//!
//! ## Overview
//!
//! [`OrderedSet`] answers both "is this value present?" in constant time and
//! "in what order were values added?" through positional access and ordered
//! iteration. It includes:
//!
//! - **Primitive operations**: `add`, `remove`, `remove_at`, `has`, `len`
//! - **Positional access**: `at`, `index_of`, `values`
//! - **Set algebra**: `union`, `intersect`, `difference`, `slice`
//! - **Ordering**: `sort_by` with a caller-supplied less-than predicate
//! - **Serialization**: serde support as a flat sequence
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` and `OrderedSet::replace_from`
//! - `fxhash`: hash the index with `rustc_hash::FxBuildHasher`
//! - `ahash`: hash the index with `ahash::RandomState`
//!
//! ## Logging
//!
//! Diagnostic events are emitted through [`tracing`] at `trace` and `debug`
//! level. The library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use orderedset::prelude::*;
//!
//! let set = OrderedSet::new();
//! set.add("first");
//! set.add("second");
//! set.add("first");
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.at(0), Some("first"));
//! assert_eq!(set.index_of("second"), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use orderedset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SliceError;
    pub use crate::hash::DefaultHashBuilder;
    pub use crate::ordered_set::OrderedSet;
}

pub mod error;
pub mod hash;
mod ordered_set;

pub use error::SliceError;
pub use hash::DefaultHashBuilder;
pub use ordered_set::OrderedSet;
