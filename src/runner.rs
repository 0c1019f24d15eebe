//! Strategy dispatch.

use crate::compare::Comparator;
use crate::core::{RecordCollection, Slot, SortStrategy};
use crate::error::SortError;
use std::fmt;
use tracing::debug;

/// Holds the current [`SortStrategy`] and [`Comparator`] and runs sorts with them.
///
/// A runner starts without a strategy; every sort request fails with
/// [`SortError::StrategyNotBound`] until one is bound with [`set_strategy`](Self::set_strategy).
///
/// # Examples
///
/// ```
/// use bussort::prelude::*;
///
/// let comparator = Comparator::from_tags(["identifier"]).unwrap();
/// let mut runner = SortRunner::new(comparator);
/// runner.set_strategy(HybridSort);
///
/// let mut slots = vec![
///     Some(Record::new("C", "PAZ", 40_000)),
///     Some(Record::new("A", "LiAZ", 20_000)),
/// ];
/// runner.sort(Some(slots.as_mut_slice())).unwrap();
/// assert_eq!(slots[0].as_ref().unwrap().identifier(), "A");
/// ```
pub struct SortRunner {
    strategy: Option<Box<dyn SortStrategy>>,
    comparator: Comparator,
}

impl SortRunner {
    pub fn new(comparator: Comparator) -> Self {
        Self {
            strategy: None,
            comparator,
        }
    }

    /// Binds `strategy`, replacing whatever was bound before.
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: SortStrategy + 'static,
    {
        debug!(strategy = strategy.description(), "sort strategy bound");
        self.strategy = Some(Box::new(strategy));
    }

    /// Unbinds the current strategy, if any.
    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy_description(&self) -> Option<&str> {
        self.strategy.as_deref().map(|strategy| strategy.description())
    }

    pub fn set_comparator(&mut self, comparator: Comparator) {
        self.comparator = comparator;
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Sorts `slots` with the bound strategy.
    ///
    /// Fails with [`SortError::StrategyNotBound`] before looking at `slots` when no strategy is
    /// bound. An absent or empty arrangement is otherwise left as it is.
    pub fn sort(&self, slots: Option<&mut [Slot]>) -> Result<(), SortError> {
        let strategy = self.strategy.as_deref().ok_or(SortError::StrategyNotBound)?;
        debug!(
            strategy = strategy.description(),
            len = slots.as_ref().map(|slots| slots.len()),
            "sorting"
        );
        strategy.sort(slots, &self.comparator);
        Ok(())
    }

    /// Sorts a snapshot of `collection` and writes the result back.
    ///
    /// The collection is untouched when the runner has no strategy.
    pub fn sort_collection(&self, collection: &mut RecordCollection) -> Result<(), SortError> {
        let mut slots = collection.snapshot();
        self.sort(Some(slots.as_mut_slice()))?;
        collection.replace_contents(slots);
        Ok(())
    }
}

impl fmt::Debug for SortRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRunner")
            .field("strategy", &self.strategy_description())
            .field("comparator", &self.comparator)
            .finish()
    }
}
