//! inventory::errors — error type for fare classes and the cabin.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for constructing fare classes and
//! querying the cabin. Construction-time validation keeps the invariants the
//! optimizers rely on (positive yields, non-negative demand statistics, and
//! the non-increasing-yield ordering) out of the hot paths.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("average
//!   yield must be positive") rather than low-level details.
//! - Optimizer-level failures (capacity, class count, draw count) live in
//!   `crate::optimization::errors`; this module covers only the data model.

pub type InventoryResult<T> = Result<T, InventoryError>;

/// InventoryError — failure conditions for the fare-class data model.
///
/// Variants
/// --------
/// - `InvalidYield(value)`
///   The average yield is not a finite, strictly positive number.
/// - `InvalidMean(value)`
///   The demand mean is not finite or is negative.
/// - `InvalidStandardDeviation(value)`
///   The demand standard deviation is not finite or is negative. Zero is
///   legal; every downstream formula guards the degenerate case.
/// - `YieldOrdering { index, yield_, previous }`
///   Inserting a class would break the non-increasing-yield ordering: the
///   class at `index` carries `yield_`, which exceeds `previous`.
/// - `EmptyCollection`
///   A query that needs at least one class (e.g. the lowest average yield)
///   was made on a cabin with zero classes.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryError {
    InvalidYield(f64),
    InvalidMean(f64),
    InvalidStandardDeviation(f64),
    YieldOrdering { index: usize, yield_: f64, previous: f64 },
    EmptyCollection,
}

impl std::error::Error for InventoryError {}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::InvalidYield(value) => {
                write!(f, "Invalid average yield: {value}. Must be finite and positive.")
            }
            InventoryError::InvalidMean(value) => {
                write!(f, "Invalid demand mean: {value}. Must be finite and non-negative.")
            }
            InventoryError::InvalidStandardDeviation(value) => {
                write!(
                    f,
                    "Invalid demand standard deviation: {value}. Must be finite and \
                     non-negative."
                )
            }
            InventoryError::YieldOrdering { index, yield_, previous } => {
                write!(
                    f,
                    "Class {index} breaks the yield ordering: {yield_} exceeds the previous \
                     class's {previous}. Classes must be added highest yield first."
                )
            }
            InventoryError::EmptyCollection => {
                write!(f, "The cabin holds no fare classes.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for InventoryError variants.
    // - Embedding of payload values into error messages.
    //
    // They intentionally DO NOT cover:
    // - The constructors that produce these errors; those are tested in
    //   `inventory::fare_class` and `inventory::cabin`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InventoryError::InvalidYield` includes the offending
    // value in its `Display` representation.
    //
    // Given
    // -----
    // - An `InventoryError::InvalidYield` with value -10.0.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "-10".
    fn inventory_error_invalid_yield_includes_payload_in_display() {
        // Arrange
        let err = InventoryError::InvalidYield(-10.0);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-10"), "Display message should include the offending yield: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InventoryError::YieldOrdering` names both the new and
    // the previous yield.
    //
    // Given
    // -----
    // - A `YieldOrdering` error with yield 120 after a previous 100.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "120" and "100".
    fn inventory_error_yield_ordering_names_both_yields() {
        // Arrange
        let err = InventoryError::YieldOrdering { index: 1, yield_: 120.0, previous: 100.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("120") && msg.contains("100"), "Got: {msg}");
    }
}
