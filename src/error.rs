//! Error types.
//!
//! Failures fall into two classes:
//! - [`ConfigError`]: the comparator was set up with an unknown field tag or an
//!   empty/oversized field selection.
//! - [`SortError::StrategyNotBound`]: a sort was requested from a [`SortRunner`]
//!   that has no strategy.
//!
//! Empty input, an absent input and a partial sort with nothing qualifying are
//! not errors; those calls leave the input untouched.
//!
//! [`SortRunner`]: crate::runner::SortRunner

use thiserror::Error;

/// Maximum number of tie-break tiers a comparator accepts.
pub const MAX_SORT_FIELDS: usize = 3;

/// Invalid comparator setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown sort field '{0}'")]
    UnknownField(String),
    #[error("no sort fields selected")]
    EmptySelection,
    #[error("at most {max} sort fields may be selected, got {got}", max = MAX_SORT_FIELDS)]
    TooManyFields { got: usize },
}

/// A record rejected by [`Record::try_new`](crate::core::Record::try_new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("identifier must not be blank")]
    BlankIdentifier,
    #[error("identifier is {len} characters long, limit is 10")]
    IdentifierTooLong { len: usize },
    #[error("model must not be blank")]
    BlankModel,
    #[error("model is {len} characters long, limit is 50")]
    ModelTooLong { len: usize },
    #[error("mileage {0} is outside 0..=1000000")]
    MileageOutOfRange(i32),
}

/// Failure of a sort request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no sort strategy is bound")]
    StrategyNotBound,
}

impl SortError {
    /// Returns `true` for comparator setup failures.
    pub fn is_config(&self) -> bool {
        matches!(self, SortError::Config(_))
    }

    /// Returns `true` when the runner was used before a strategy was bound.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, SortError::StrategyNotBound)
    }
}
