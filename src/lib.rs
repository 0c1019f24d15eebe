//! # Bussort
//!
//! `bussort` sorts collections of bus fleet records (identifier, model label, mileage) by a
//! runtime-selected, multi-key ordering.
//!
//! It provides a stable **hybrid sort**, a simplified TimSort that insertion-sorts fixed runs of
//! 32 elements and then merges them bottom-up, and a **partial** variant that only reorders the
//! records with an even mileage while every other record keeps its position.
//!
//! ## Key Features
//!
//! - **Pluggable strategies**: [`HybridSort`] and [`PartialHybridSort`] implement the
//!   [`SortStrategy`] trait, and a [`SortRunner`] dispatches to whichever is bound.
//! - **Multi-key ordering**: a [`Comparator`] applies up to three [`SortField`] tiers in priority
//!   order, with optional case-insensitive string comparison.
//! - **Stable**: records that compare equal keep their original relative order.
//! - **Generic core**: [`hybrid_sort_by`], [`hybrid_sort_indices`] and [`partial_sort_by`] work on
//!   any element type, without requiring `Clone`.
//!
//! ## Usage
//!
//! ### Sorting a collection
//!
//! ```rust
//! use bussort::prelude::*;
//!
//! let mut fleet: RecordCollection = [
//!     Record::new("C300", "LiAZ-5292", 40_000),
//!     Record::new("B200", "PAZ-3205", 30_000),
//!     Record::new("A100", "Ikarus 280", 20_000),
//! ]
//! .into_iter()
//! .collect();
//!
//! let comparator = Comparator::new(&[SortField::Identifier]).unwrap();
//! let mut runner = SortRunner::new(comparator);
//! runner.set_strategy(HybridSort);
//! runner.sort_collection(&mut fleet).unwrap();
//!
//! let ids: Vec<&str> = fleet.iter().map(|r| r.identifier()).collect();
//! assert_eq!(ids, vec!["A100", "B200", "C300"]);
//! ```
//!
//! ### Sorting only even mileages
//!
//! ```rust
//! use bussort::prelude::*;
//!
//! let comparator = Comparator::new(&[SortField::Mileage]).unwrap();
//! let mut slots = vec![
//!     Some(Record::new("A", "PAZ", 40_000)),
//!     Some(Record::new("B", "PAZ", 30_001)),
//!     Some(Record::new("C", "PAZ", 20_000)),
//! ];
//!
//! PartialHybridSort.sort(Some(slots.as_mut_slice()), &comparator);
//!
//! let mileages: Vec<i32> = slots.iter().flatten().map(|r| r.mileage()).collect();
//! assert_eq!(mileages, vec![20_000, 30_001, 40_000]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Worst Case**: O(N log N) comparisons.
//! - **Presorted input**: only the per-run insertion sort benefits; merging always runs.
//! - **Memory Overhead**: a permutation vector and a merge scratch vector (`8 bytes` per item each).

pub mod algo;
pub mod compare;
pub mod core;
pub mod error;
pub mod runner;

pub use algo::{HybridSort, PartialHybridSort, hybrid_sort_by, hybrid_sort_indices, partial_sort_by};
pub use compare::{Comparator, ComparatorConfig, SortField};
pub use crate::core::{Record, RecordCollection, Slot, SortStrategy};
pub use error::{ConfigError, RecordError, SortError};
pub use runner::SortRunner;

pub mod prelude {
    pub use crate::algo::{
        HybridSort, PartialHybridSort, hybrid_sort_by, hybrid_sort_indices, partial_sort_by,
    };
    pub use crate::compare::{Comparator, ComparatorConfig, SortField};
    pub use crate::core::{Record, RecordCollection, Slot, SortStrategy};
    pub use crate::error::{ConfigError, SortError};
    pub use crate::runner::SortRunner;
}
