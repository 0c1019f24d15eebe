//! Core types and traits for bussort.
//!
//! This module defines:
//! - [`Record`]: one immutable bus entry.
//! - [`Slot`]: a possibly absent record inside a sort arrangement.
//! - [`RecordCollection`]: the growable, owning sequence records are kept in.
//! - [`SortStrategy`]: the trait every sorting algorithm implements.

use crate::compare::Comparator;
use crate::error::RecordError;
use std::fmt;

/// Longest accepted identifier, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 10;
/// Longest accepted model label, in characters.
pub const MAX_MODEL_LEN: usize = 50;
/// Highest accepted mileage.
pub const MAX_MILEAGE: i32 = 1_000_000;

/// Initial capacity of a fresh [`RecordCollection`].
const DEFAULT_CAPACITY: usize = 10;

/// A single bus entry: identifier, model label and mileage.
///
/// Records are never mutated after construction. Two records are equal when
/// all three fields are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    identifier: String,
    model: String,
    mileage: i32,
}

impl Record {
    /// Builds a record from fields that were already validated elsewhere.
    pub fn new(identifier: impl Into<String>, model: impl Into<String>, mileage: i32) -> Self {
        Self {
            identifier: identifier.into(),
            model: model.into(),
            mileage,
        }
    }

    /// Builds a record, checking the field limits first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bussort::core::Record;
    ///
    /// assert!(Record::try_new("A100", "Ikarus 280", 120_000).is_ok());
    /// assert!(Record::try_new("   ", "Ikarus 280", 120_000).is_err());
    /// ```
    pub fn try_new(
        identifier: impl Into<String>,
        model: impl Into<String>,
        mileage: i32,
    ) -> Result<Self, RecordError> {
        let identifier = identifier.into();
        let model = model.into();

        if identifier.trim().is_empty() {
            return Err(RecordError::BlankIdentifier);
        }
        let len = identifier.chars().count();
        if len > MAX_IDENTIFIER_LEN {
            return Err(RecordError::IdentifierTooLong { len });
        }
        if model.trim().is_empty() {
            return Err(RecordError::BlankModel);
        }
        let len = model.chars().count();
        if len > MAX_MODEL_LEN {
            return Err(RecordError::ModelTooLong { len });
        }
        if !(0..=MAX_MILEAGE).contains(&mileage) {
            return Err(RecordError::MileageOutOfRange(mileage));
        }

        Ok(Self::new(identifier, model, mileage))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn mileage(&self) -> i32 {
        self.mileage
    }

    /// Whether the record takes part in an even-mileage partial sort.
    #[inline]
    pub fn has_even_mileage(&self) -> bool {
        self.mileage % 2 == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bus No.{}, Model: {}, Mileage: {} km",
            self.identifier, self.model, self.mileage
        )
    }
}

/// A position in a sort arrangement. `None` marks an absent element.
pub type Slot = Option<Record>;

/// An ordered, growable, duplicate-permitting sequence of records.
///
/// Capacity at least doubles whenever an append finds the storage full.
/// [`snapshot`](Self::snapshot) hands out an independent copy, so sorting the
/// snapshot never touches the collection until it is written back with
/// [`replace_contents`](Self::replace_contents).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record, doubling the capacity when the storage is full.
    pub fn push(&mut self, record: Record) {
        if self.records.len() == self.records.capacity() {
            let grow_by = self.records.capacity().max(DEFAULT_CAPACITY);
            self.records.reserve_exact(grow_by);
        }
        self.records.push(record);
    }

    /// Returns the record at `index`, or `None` when `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Copies the records out into a fresh arrangement of exactly `len()` slots.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.records.iter().cloned().map(Some).collect()
    }

    /// Replaces every record with the present slots of `slots`, in order.
    ///
    /// Absent slots are dropped.
    pub fn replace_contents(&mut self, slots: Vec<Slot>) {
        self.records.clear();
        self.records.extend(slots.into_iter().flatten());
    }

    /// Takes over the contents of `other` wholesale.
    pub fn replace_with(&mut self, other: RecordCollection) {
        self.records = other.records;
    }
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut collection = RecordCollection::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<Record> for RecordCollection {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        iter.into_iter().for_each(|record| self.push(record));
    }
}

impl IntoIterator for RecordCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A sorting algorithm over record arrangements.
///
/// Implementors reorder `slots` in place under the supplied [`Comparator`].
/// Absent slots must never be handed to the comparator.
///
/// # Examples
///
/// A strategy that keeps the arrangement as it is:
///
/// ```
/// use bussort::prelude::*;
///
/// struct Identity;
///
/// impl SortStrategy for Identity {
///     fn sort_slots(&self, _slots: &mut [Slot], _comparator: &Comparator) {}
///
///     fn description(&self) -> &str {
///         "identity"
///     }
/// }
///
/// let comparator = Comparator::new(&[SortField::Mileage]).unwrap();
/// let mut slots = vec![Some(Record::new("B", "LiAZ", 2)), Some(Record::new("A", "PAZ", 1))];
/// Identity.sort(Some(slots.as_mut_slice()), &comparator);
/// assert_eq!(slots[0].as_ref().unwrap().identifier(), "B");
/// ```
pub trait SortStrategy {
    /// Reorders `slots` in place.
    fn sort_slots(&self, slots: &mut [Slot], comparator: &Comparator);

    /// Human-readable name of the algorithm.
    fn description(&self) -> &str;

    /// Sorts `slots` when present. An absent arrangement is left as it is.
    fn sort(&self, slots: Option<&mut [Slot]>, comparator: &Comparator) {
        if let Some(slots) = slots {
            self.sort_slots(slots, comparator);
        }
    }
}
