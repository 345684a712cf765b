//! Error types for the map builder.
//!
//! This module provides the single error that can occur when working with
//! [`MapBuilder`](crate::MapBuilder) and [`SharedMap`](crate::SharedMap):
//! attempting to mutate a map that has been frozen.

/// Represents an error when a mutating operation reaches a frozen map.
///
/// Once a map has been frozen via
/// [`MapBuilder::read_only`](crate::MapBuilder::read_only) or
/// [`SharedMap::freeze`](crate::SharedMap::freeze), every subsequent
/// mutation attempt through any handle to the same backing store fails with
/// this error. The map's contents are left unchanged.
///
/// # Examples
///
/// ```rust
/// use fluentmap::UnsupportedMutationError;
///
/// let error = UnsupportedMutationError { operation: "insert" };
/// assert_eq!(
///     format!("{}", error),
///     "insert: map is frozen and rejects further mutation"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedMutationError {
    /// The name of the rejected operation.
    pub operation: &'static str,
}

impl std::fmt::Display for UnsupportedMutationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: map is frozen and rejects further mutation",
            self.operation
        )
    }
}

impl std::error::Error for UnsupportedMutationError {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::UnsupportedMutationError;
    use rstest::rstest;

    #[rstest]
    #[case("insert")]
    #[case("remove")]
    #[case("put")]
    fn test_display_names_the_operation(#[case] operation: &'static str) {
        let error = UnsupportedMutationError { operation };
        let rendered = format!("{error}");
        assert!(rendered.starts_with(operation));
        assert!(rendered.contains("frozen"));
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let error = UnsupportedMutationError { operation: "insert" };
        assert_error(&error);
    }
}
