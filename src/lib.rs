//! # fluentmap
//!
//! A fluent builder for associative containers with freeze-on-demand
//! immutability.
//!
//! ## Overview
//!
//! This library provides a single small utility for constructing, populating,
//! and optionally freezing a key-value mapping in one chained expression. It
//! is a thin convenience layer over the standard associative containers,
//! aimed at call-site readability (inline construction of constant lookup
//! tables) rather than at any algorithmic problem. It includes:
//!
//! - **[`MapBuilder`]**: fluent `put` / `read_only` / `build` chaining
//! - **[`SharedMap`]**: a handle to a shared, freezable map; clones of the
//!   handle alias the same backing store
//! - **[`UnsupportedMutationError`]**: the single error kind, raised when a
//!   mutation reaches a frozen map
//!
//! ## Example
//!
//! ```rust
//! use fluentmap::MapBuilder;
//!
//! let weekdays = MapBuilder::ordered()
//!     .put("mon", 1)?
//!     .put("tue", 2)?
//!     .put("wed", 3)?
//!     .read_only()
//!     .build();
//!
//! assert_eq!(weekdays.get("tue").as_deref(), Some(&2));
//! assert!(weekdays.insert("sun", 7).is_err());
//! # Ok::<(), fluentmap::UnsupportedMutationError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use fluentmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::MapBuilder;
    pub use crate::error::UnsupportedMutationError;
    pub use crate::map::SharedMap;
}

pub mod builder;
pub mod error;
pub mod map;

pub use builder::MapBuilder;
pub use error::UnsupportedMutationError;
pub use map::SharedMap;
