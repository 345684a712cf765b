//! Shared, freezable associative containers.
//!
//! This module provides [`SharedMap`], a handle to a key-value store that can
//! be populated through any handle and then frozen exactly once. Cloning a
//! `SharedMap` clones the handle, not the contents: every clone aliases the
//! same backing store, so a mutation or a freeze performed through one handle
//! is observed by all of them.
//!
//! # Overview
//!
//! A `SharedMap` is created over one of two backing stores:
//!
//! - **Ordered** ([`SharedMap::ordered`]): iteration follows insertion order,
//!   with a key keeping its first-seen position when its value is overwritten.
//! - **Hashed** ([`SharedMap::hashed`]): no iteration order guarantee.
//!
//! Mutating operations return `Result` and fail with
//! [`UnsupportedMutationError`] once the store has been frozen via
//! [`freeze`](SharedMap::freeze). Freezing is one-way and idempotent.
//!
//! # Examples
//!
//! ```rust
//! use fluentmap::SharedMap;
//!
//! let map = SharedMap::ordered();
//! map.insert("one", 1)?;
//! map.insert("two", 2)?;
//!
//! // A clone is another handle to the same store.
//! let alias = map.clone();
//! alias.insert("three", 3)?;
//! assert_eq!(map.len(), 3);
//!
//! map.freeze();
//! assert!(alias.insert("four", 4).is_err());
//! assert_eq!(map.get("three").as_deref(), Some(&3));
//! # Ok::<(), fluentmap::UnsupportedMutationError>(())
//! ```

use std::borrow::Borrow;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::UnsupportedMutationError;

// =============================================================================
// Backing store
// =============================================================================

/// The two container choices behind a [`SharedMap`].
#[derive(Clone)]
enum Backing<K, V> {
    /// Insertion-ordered entries.
    Ordered(IndexMap<K, V>),
    /// Unordered hash entries.
    Hashed(HashMap<K, V>),
}

impl<K, V> Backing<K, V> {
    fn len(&self) -> usize {
        match self {
            Self::Ordered(map) => map.len(),
            Self::Hashed(map) => map.len(),
        }
    }
}

impl<K: Hash + Eq, V> Backing<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self {
            Self::Ordered(map) => map.insert(key, value),
            Self::Hashed(map) => map.insert(key, value),
        }
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self {
            Self::Ordered(map) => map.get(key),
            Self::Hashed(map) => map.get(key),
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self {
            // shift_remove keeps the relative order of the surviving entries.
            Self::Ordered(map) => map.shift_remove(key),
            Self::Hashed(map) => map.remove(key),
        }
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self {
            Self::Ordered(map) => map.contains_key(key),
            Self::Hashed(map) => map.contains_key(key),
        }
    }
}

/// Interior state of a [`SharedMap`]: the backing store plus the one-way
/// freeze flag.
struct MapCell<K, V> {
    backing: Backing<K, V>,
    frozen: bool,
}

// =============================================================================
// SharedMap Definition
// =============================================================================

/// A handle to a shared, freezable key-value store.
///
/// `SharedMap` is the mapping type produced by
/// [`MapBuilder::build`](crate::MapBuilder::build). It wraps its backing
/// container in `Rc<RefCell<...>>`, so handles are cheap to clone and every
/// clone reads and writes the same store. Once [`freeze`](SharedMap::freeze)
/// has been called, all mutating operations fail with
/// [`UnsupportedMutationError`] through every handle, permanently.
///
/// `SharedMap` is single-threaded by construction (`Rc` is not `Send`); it
/// carries the same concurrency contract as the containers it wraps.
///
/// # Examples
///
/// ```rust
/// use fluentmap::SharedMap;
///
/// let map = SharedMap::hashed();
/// map.insert("x".to_string(), 1)?;
/// assert_eq!(map.get("x").as_deref(), Some(&1));
///
/// map.freeze();
/// let error = map.insert("y".to_string(), 2).unwrap_err();
/// assert_eq!(error.operation, "insert");
/// # Ok::<(), fluentmap::UnsupportedMutationError>(())
/// ```
pub struct SharedMap<K, V> {
    inner: Rc<RefCell<MapCell<K, V>>>,
}

impl<K, V> SharedMap<K, V> {
    fn from_backing(backing: Backing<K, V>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MapCell {
                backing,
                frozen: false,
            })),
        }
    }

    /// Creates an empty map with an insertion-ordered backing store.
    ///
    /// Iteration yields entries in the order their keys were first inserted;
    /// overwriting a value keeps the key's original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map: SharedMap<String, i32> = SharedMap::ordered();
    /// assert!(map.is_empty());
    /// ```
    pub fn ordered() -> Self {
        Self::from_backing(Backing::Ordered(IndexMap::new()))
    }

    /// Creates an empty map with an unordered hash backing store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map: SharedMap<String, i32> = SharedMap::hashed();
    /// assert!(map.is_empty());
    /// ```
    pub fn hashed() -> Self {
        Self::from_backing(Backing::Hashed(HashMap::new()))
    }

    /// Freezes the backing store.
    ///
    /// After this call every mutating operation, through this handle or any
    /// clone of it, fails with [`UnsupportedMutationError`]. Freezing an
    /// already-frozen map is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map: SharedMap<&str, i32> = SharedMap::ordered();
    /// map.freeze();
    /// map.freeze(); // idempotent
    /// assert!(map.is_frozen());
    /// ```
    pub fn freeze(&self) {
        self.inner.borrow_mut().frozen = true;
    }

    /// Returns `true` if the map has been frozen.
    pub fn is_frozen(&self) -> bool {
        RefCell::borrow(&self.inner).frozen
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        RefCell::borrow(&self.inner).backing.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles alias the same backing store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map: SharedMap<&str, i32> = SharedMap::ordered();
    /// let alias = map.clone();
    /// let other: SharedMap<&str, i32> = SharedMap::ordered();
    ///
    /// assert!(map.ptr_eq(&alias));
    /// assert!(!map.ptr_eq(&other));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Calls `f` on every entry, in iteration order, without cloning.
    ///
    /// The map is borrowed for the duration of the call; `f` must not mutate
    /// the map through another handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map = SharedMap::ordered();
    /// map.insert("a", 1)?;
    /// map.insert("b", 2)?;
    ///
    /// let mut total = 0;
    /// map.for_each(|_, value| total += value);
    /// assert_eq!(total, 3);
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        let cell = RefCell::borrow(&self.inner);
        match &cell.backing {
            Backing::Ordered(map) => {
                for (key, value) in map {
                    f(key, value);
                }
            }
            Backing::Hashed(map) => {
                for (key, value) in map {
                    f(key, value);
                }
            }
        }
    }

    /// Returns a snapshot of the keys, in iteration order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.for_each(|key, _| keys.push(key.clone()));
        keys
    }

    /// Returns a snapshot of the values, in iteration order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        self.for_each(|_, value| values.push(value.clone()));
        values
    }

    /// Returns a snapshot of the entries, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map = SharedMap::ordered();
    /// map.insert("a", 1)?;
    /// map.insert("b", 2)?;
    /// assert_eq!(map.entries(), vec![("a", 1), ("b", 2)]);
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = Vec::with_capacity(self.len());
        self.for_each(|key, value| entries.push((key.clone(), value.clone())));
        entries
    }
}

impl<K: Hash + Eq, V> SharedMap<K, V> {
    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedMutationError`] if the map has been frozen; the
    /// contents are unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map = SharedMap::ordered();
    /// assert_eq!(map.insert("a", 1)?, None);
    /// assert_eq!(map.insert("a", 2)?, Some(1));
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn insert(&self, key: K, value: V) -> Result<Option<V>, UnsupportedMutationError> {
        let mut cell = self.inner.borrow_mut();
        if cell.frozen {
            return Err(UnsupportedMutationError {
                operation: "insert",
            });
        }
        Ok(cell.backing.insert(key, value))
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// On the ordered backing the surviving entries keep their relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedMutationError`] if the map has been frozen.
    pub fn remove<Q>(&self, key: &Q) -> Result<Option<V>, UnsupportedMutationError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cell = self.inner.borrow_mut();
        if cell.frozen {
            return Err(UnsupportedMutationError {
                operation: "remove",
            });
        }
        Ok(cell.backing.remove(key))
    }

    /// Returns a borrowed view of the value for `key`, if present.
    ///
    /// The view holds a shared borrow of the backing store; dropping it
    /// releases the borrow. Attempting to mutate the map while a view is
    /// alive follows the standard `RefCell` borrow rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentmap::SharedMap;
    ///
    /// let map = SharedMap::hashed();
    /// map.insert("x".to_string(), 1)?;
    ///
    /// assert_eq!(map.get("x").as_deref(), Some(&1));
    /// assert!(map.get("y").is_none());
    /// # Ok::<(), fluentmap::UnsupportedMutationError>(())
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<Ref<'_, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ref::filter_map(RefCell::borrow(&self.inner), |cell| cell.backing.get(key)).ok()
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        RefCell::borrow(&self.inner).backing.contains_key(key)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Cloning a `SharedMap` clones the handle, not the contents: the clone
/// aliases the same backing store and observes the same freeze state.
impl<K, V> Clone for SharedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedMap<K, V> {
    /// The default map is empty and insertion-ordered.
    fn default() -> Self {
        Self::ordered()
    }
}

/// Moves a caller-supplied `IndexMap` into a shareable, insertion-ordered
/// store. No entries are copied.
impl<K, V> From<IndexMap<K, V>> for SharedMap<K, V> {
    fn from(map: IndexMap<K, V>) -> Self {
        Self::from_backing(Backing::Ordered(map))
    }
}

/// Moves a caller-supplied `HashMap` into a shareable, unordered store. No
/// entries are copied.
impl<K, V> From<HashMap<K, V>> for SharedMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_backing(Backing::Hashed(map))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SharedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = RefCell::borrow(&self.inner);
        let mut debug_map = formatter.debug_map();
        match &cell.backing {
            Backing::Ordered(map) => debug_map.entries(map.iter()),
            Backing::Hashed(map) => debug_map.entries(map.iter()),
        };
        debug_map.finish()
    }
}

/// Content equality: two maps are equal when they associate the same values
/// with the same keys, regardless of backing store or iteration order.
impl<K: Hash + Eq, V: PartialEq> PartialEq for SharedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        let ours = RefCell::borrow(&self.inner);
        let theirs = RefCell::borrow(&other.inner);
        if ours.backing.len() != theirs.backing.len() {
            return false;
        }
        let matches = |key: &K, value: &V| theirs.backing.get(key) == Some(value);
        match &ours.backing {
            Backing::Ordered(map) => map.iter().all(|(key, value)| matches(key, value)),
            Backing::Hashed(map) => map.iter().all(|(key, value)| matches(key, value)),
        }
    }
}

impl<K: Hash + Eq, V: Eq> Eq for SharedMap<K, V> {}

// =============================================================================
// Tests
// =============================================================================
