//! Core sorting algorithms (run-based hybrid merge sort and its predicate-scoped variant).
//!
//! The hybrid sort is a simplified TimSort without run detection or galloping:
//! - **Insertion Sort**: every fixed-length run of [`RUN_LENGTH`] elements is sorted in isolation.
//! - **Bottom-up Merge**: adjacent runs are merged pairwise with a doubling width until a
//!   single run spans the whole input.
//!
//! Both phases work on a permutation of indices rather than on the elements themselves, so the
//! element type needs neither `Clone` nor `Copy`. The permutation is applied in place at the end.
//! Ties always resolve to the element that came first, which makes the sort stable.
//!
//! The main entry points are [`hybrid_sort_indices`], [`hybrid_sort_by`] and
//! [`partial_sort_by`], plus the [`HybridSort`] and [`PartialHybridSort`] strategies built on them.

use crate::compare::Comparator;
use crate::core::{Record, Slot, SortStrategy};
use cuneiform::cuneiform;
use std::cmp::Ordering;
use tracing::trace;

/// Length of the runs sorted by insertion sort before merging starts.
pub const RUN_LENGTH: usize = 32;

/// Computes the stable sorted order of `v` without moving any element.
///
/// # Returns
///
/// A vector of indices such that `compare(&v[indices[i]], &v[indices[i + 1]])` is never
/// `Ordering::Greater`, and equal elements keep their original relative order.
///
/// # Examples
///
/// ```
/// use bussort::hybrid_sort_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = hybrid_sort_indices(&data, |a, b| a.cmp(b));
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn hybrid_sort_indices<T, F>(v: &[T], mut compare: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut indices: Vec<usize> = (0..len).collect();
    if len < 2 {
        return indices;
    }

    // 1. Sort each run on its own.
    indices
        .chunks_mut(RUN_LENGTH)
        .for_each(|run| insertion_sort_run(v, run, &mut compare));

    // 2. Merge neighbouring runs, doubling the width each pass.
    let mut scratch = Vec::with_capacity(len);
    let mut width = RUN_LENGTH;
    while width < len {
        trace!(width, len, "merge pass");
        let mut left = 0;
        while left < len {
            let mid = left + width;
            let right = (mid + width).min(len);

            // Nothing to merge when the left run already reaches the end.
            if mid < right {
                merge_runs(
                    v,
                    &mut indices[left..right],
                    mid - left,
                    &mut scratch,
                    &mut compare,
                );
            }
            left = right;
        }
        width *= 2;
    }

    indices
}

/// Sorts a mutable slice in place.
///
/// This is a convenience wrapper for [`hybrid_sort_indices`] which computes the sorted indices
/// and then applies the permutation to the slice.
///
/// # Examples
///
/// ```
/// use bussort::hybrid_sort_by;
///
/// let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// hybrid_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn hybrid_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let indices = hybrid_sort_indices(v, compare);
    apply_permutation(v, indices);
}

/// Sorts only the present elements of `slots` that satisfy `include`.
///
/// Qualifying elements are lifted out in scan order, sorted with [`hybrid_sort_by`], and written
/// back to the positions they were lifted from: the smallest goes to the lowest of those
/// positions. Every other slot, absent ones included, is left where it was.
///
/// Returns the number of qualifying elements.
///
/// # Examples
///
/// ```
/// use bussort::partial_sort_by;
///
/// let mut data = vec![Some(8), Some(3), None, Some(2), Some(6)];
/// let moved = partial_sort_by(&mut data, |n| n % 2 == 0, |a, b| a.cmp(b));
///
/// assert_eq!(moved, 3);
/// assert_eq!(data, vec![Some(2), Some(3), None, Some(6), Some(8)]);
/// ```
pub fn partial_sort_by<T, P, F>(slots: &mut [Option<T>], mut include: P, compare: F) -> usize
where
    P: FnMut(&T) -> bool,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut positions = Vec::new();
    let mut picked = Vec::new();

    for (index, slot) in slots.iter_mut().enumerate() {
        if let Some(item) = slot.take_if(|item| include(&*item)) {
            positions.push(index);
            picked.push(item);
        }
    }

    let count = picked.len();
    hybrid_sort_by(&mut picked, compare);

    positions
        .into_iter()
        .zip(picked)
        .for_each(|(index, item)| slots[index] = Some(item));

    count
}

/// Moves `data[indices[i]]` to position `i` for every `i`, following permutation cycles.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}

/// Stable insertion sort of one run of indices.
///
/// An entry only moves left past entries that compare strictly greater, so equal elements
/// never swap places.
fn insertion_sort_run<T, F>(v: &[T], run: &mut [usize], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..run.len() {
        let current = run[i];
        let mut j = i;
        while j > 0 && compare(&v[run[j - 1]], &v[current]) == Ordering::Greater {
            run[j] = run[j - 1];
            j -= 1;
        }
        run[j] = current;
    }
}

// Cache-aligned read positions for the two halves of a merge.
#[cuneiform]
struct MergeCursor {
    left: usize,
    right: usize,
}

/// Merges the sorted halves `run[..mid]` and `run[mid..]` through `scratch`.
///
/// On ties the left half is taken first.
fn merge_runs<T, F>(
    v: &[T],
    run: &mut [usize],
    mid: usize,
    scratch: &mut Vec<usize>,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();
    let (lo, hi) = run.split_at(mid);
    let mut cursor = MergeCursor { left: 0, right: 0 };

    while cursor.left < lo.len() && cursor.right < hi.len() {
        let (a, b) = (lo[cursor.left], hi[cursor.right]);
        if compare(&v[a], &v[b]) != Ordering::Greater {
            scratch.push(a);
            cursor.left += 1;
        } else {
            scratch.push(b);
            cursor.right += 1;
        }
    }
    scratch.extend_from_slice(&lo[cursor.left..]);
    scratch.extend_from_slice(&hi[cursor.right..]);

    run.copy_from_slice(scratch);
}

/// General-purpose stable strategy: insertion sort on runs of 32, then bottom-up merging.
///
/// Absent slots stay at their index; the present records are sorted among the remaining
/// positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HybridSort;

impl SortStrategy for HybridSort {
    fn sort_slots(&self, slots: &mut [Slot], comparator: &Comparator) {
        partial_sort_by(slots, |_| true, |a, b| comparator.compare(a, b));
    }

    fn description(&self) -> &str {
        "Hybrid sort (insertion sort on runs of 32, bottom-up merge)"
    }
}

/// Sorts only the records with an even mileage, in the positions they already occupy.
///
/// Records with an odd mileage and absent slots keep their index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialHybridSort;

impl PartialHybridSort {
    /// The inclusion predicate: a present record with an even mileage.
    pub fn qualifies(slot: &Slot) -> bool {
        slot.as_ref().is_some_and(Record::has_even_mileage)
    }
}

impl SortStrategy for PartialHybridSort {
    fn sort_slots(&self, slots: &mut [Slot], comparator: &Comparator) {
        let qualifying = partial_sort_by(slots, Record::has_even_mileage, |a, b| {
            comparator.compare(a, b)
        });
        trace!(qualifying, total = slots.len(), "even-mileage partial sort");
    }

    fn description(&self) -> &str {
        "Hybrid sort (only records with an even mileage are sorted)"
    }
}
