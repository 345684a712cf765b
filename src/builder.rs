//! Fluent construction of [`SharedMap`] values.
//!
//! This module provides [`MapBuilder`], which accumulates key-value pairs
//! into a map and optionally makes the map immutable before handing it to
//! the caller, all in one chained expression.
//!
//! # Overview
//!
//! A builder is created by one of three factories:
//!
//! - [`MapBuilder::ordered`]: fresh insertion-ordered backing store
//! - [`MapBuilder::hashed`]: fresh unordered hash backing store
//! - [`MapBuilder::wrapping`]: a caller-supplied [`SharedMap`], which the
//!   builder mutates directly
//!
//! The builder has exactly two states, mutable and frozen, with a single
//! one-way transition via [`read_only`](MapBuilder::read_only). In either
//! state [`build`](MapBuilder::build) hands out a handle to the backing
//! store as it currently stands.
//!
//! # Examples
//!
//! ```rust
//! use fluentmap::MapBuilder;
//!
//! let status_names = MapBuilder::ordered()
//!     .put(200, "OK")?
//!     .put(404, "Not Found")?
//!     .put(500, "Internal Server Error")?
//!     .read_only()
//!     .build();
//!
//! assert_eq!(status_names.get(&404).as_deref(), Some(&"Not Found"));
//! assert!(status_names.insert(503, "Service Unavailable").is_err());
//! # Ok::<(), fluentmap::UnsupportedMutationError>(())
//! ```

use std::hash::Hash;

use crate::error::UnsupportedMutationError;
use crate::map::SharedMap;

// =============================================================================
// MapBuilder Definition
// =============================================================================

/// A fluent builder that populates and optionally freezes a [`SharedMap`].
///
/// Each mutating step returns the builder again so that construction reads
/// as one expression. `put` is fallible (the store may already be frozen),
/// so chains link with `?`:
///
/// ```rust
/// use fluentmap::MapBuilder;
///
/// let map = MapBuilder::hashed()
///     .put("a", 1)?
///     .put("b", 2)?
///     .build();
/// assert_eq!(map.len(), 2);
/// # Ok::<(), fluentmap::UnsupportedMutationError>(())
/// ```
///
/// The builder stays usable after [`build`](MapBuilder::build); further
/// `put` calls keep mutating the same backing store the built handle
/// aliases.
#[derive(Debug)]
pub struct MapBuilder<K, V> {
    map: SharedMap<K, V>,
}

impl<K, V> MapBuilder<K, V> {
    /// Creates a builder over a fresh insertion-ordered map.
    ///
    /// Iteration of the built map follows insertion order; a key overwritten
    /// by a later `put` keeps its first-seen position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::MapBuilder;
    ///
    /// let map = MapBuilder::ordered()
    ///     .put("a", 1)?
    ///     .put("b", 2)?
    ///     .put("a", 3)?
    ///     .build();
    ///
    /// assert_eq!(map.entries(), vec![("a", 3), ("b", 2)]);
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn ordered() -> Self {
        Self {
            map: SharedMap::ordered(),
        }
    }

    /// Creates a builder over a fresh unordered hash map.
    pub fn hashed() -> Self {
        Self {
            map: SharedMap::hashed(),
        }
    }

    /// Creates a builder that mutates a caller-supplied map directly.
    ///
    /// The builder takes no copy: every `put` lands in the supplied store,
    /// and is visible through any other handle to it. Pre-existing entries
    /// are preserved until overwritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::{MapBuilder, SharedMap};
    ///
    /// let existing = SharedMap::ordered();
    /// existing.insert("a", 1)?;
    ///
    /// let map = MapBuilder::wrapping(existing.clone())
    ///     .put("b", 2)?
    ///     .build();
    ///
    /// assert!(map.ptr_eq(&existing));
    /// assert_eq!(existing.get("b").as_deref(), Some(&2));
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn wrapping(map: SharedMap<K, V>) -> Self {
        Self { map }
    }

    /// Freezes the underlying map.
    ///
    /// All subsequent mutation attempts, through this builder or through any
    /// handle obtained from [`build`](MapBuilder::build), fail with
    /// [`UnsupportedMutationError`]. Calling `read_only` on an
    /// already-frozen builder is a no-op.
    pub fn read_only(self) -> Self {
        self.map.freeze();
        self
    }

    /// Returns `true` if the underlying map has been frozen.
    pub fn is_read_only(&self) -> bool {
        self.map.is_frozen()
    }

    /// Returns a handle to the underlying map as it currently stands.
    ///
    /// No copy is made: the returned [`SharedMap`] aliases the backing store
    /// the builder has been mutating, frozen or not.
    pub fn build(&self) -> SharedMap<K, V> {
        self.map.clone()
    }
}

impl<K: Hash + Eq, V> MapBuilder<K, V> {
    /// Inserts or overwrites the value for `key`, returning the builder.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedMutationError`] if the builder has been frozen
    /// via [`read_only`](MapBuilder::read_only); the map is unchanged in
    /// that case.
    pub fn put(self, key: K, value: V) -> Result<Self, UnsupportedMutationError> {
        self.map.insert(key, value)?;
        Ok(self)
    }

    /// Inserts every entry of `entries`, in order, returning the builder.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedMutationError`] if the builder has been frozen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::MapBuilder;
    ///
    /// let map = MapBuilder::ordered()
    ///     .put_all([("a", 1), ("b", 2)])?
    ///     .put("c", 3)?
    ///     .build();
    /// assert_eq!(map.keys(), vec!["a", "b", "c"]);
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn put_all(
        self,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, UnsupportedMutationError> {
        for (key, value) in entries {
            self.map.insert(key, value)?;
        }
        Ok(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::MapBuilder;
    use rstest::rstest;

    #[rstest]
    fn test_build_aliases_the_builder_store() {
        let builder = MapBuilder::ordered();
        let first = builder.build();
        let builder = builder.put("a", 1).unwrap();
        let second = builder.build();

        assert!(first.ptr_eq(&second));
        assert_eq!(first.get("a").as_deref(), Some(&1));
    }

    #[rstest]
    fn test_is_read_only_tracks_freeze() {
        let builder = MapBuilder::<&str, i32>::hashed();
        assert!(!builder.is_read_only());
        let builder = builder.read_only();
        assert!(builder.is_read_only());
    }
}
