use thiserror::Error;

/// Precondition failures of the sorter.
///
/// Returned wrapped in [`anyhow::Error`]; use `downcast_ref::<SortError>()`
/// to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// No values were given, so there is no maximum to count digits of.
    #[error("no input values")]
    EmptyInput,
    /// A value is not a non-negative integer.
    #[error("value must be non-negative: {0}")]
    InvalidInput(String),
}
