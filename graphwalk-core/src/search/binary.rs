//! Binary search: O(log n) over input sorted in ascending order.
//!
//! With duplicates, any index holding the target may be returned. Unsorted
//! input gives an unspecified (but memory-safe) answer.

use std::cmp::Ordering;

use super::Searcher;

/// Bisecting search over ascending input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl<T: Ord> Searcher<T> for BinarySearch {
    fn search(&self, items: &[T], target: &T) -> Option<usize> {
        // Half-open window [left, right).
        let mut left = 0;
        let mut right = items.len();

        while left < right {
            let mid = left + (right - left) / 2;
            match items[mid].cmp(target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }
        None
    }

    fn search_recursive(&self, items: &[T], target: &T) -> Option<usize> {
        fn bisect<T: Ord>(items: &[T], left: usize, right: usize, target: &T) -> Option<usize> {
            if left >= right {
                return None;
            }
            let mid = left + (right - left) / 2;
            match items[mid].cmp(target) {
                Ordering::Equal => Some(mid),
                Ordering::Less => bisect(items, mid + 1, right, target),
                Ordering::Greater => bisect(items, left, mid, target),
            }
        }
        bisect(items, 0, items.len(), target)
    }
}
