//! Hash builder selection.
//!
//! The index of an [`OrderedSet`](crate::OrderedSet) hashes its elements with
//! [`DefaultHashBuilder`] unless another [`BuildHasher`](std::hash::BuildHasher)
//! is supplied. The default is chosen by feature flag:
//!
//! - no flag: `std`'s SipHash-based `RandomState` (HashDoS resistant)
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState`
//!
//! `fxhash` takes precedence when both flags are enabled. Neither fast hasher
//! is HashDoS resistant; only enable them for trusted input.

/// The hash builder used when none is specified.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used when none is specified.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used when none is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
