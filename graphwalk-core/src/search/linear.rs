//! Linear search: O(n), works on unsorted input, returns the first match.

use super::Searcher;

/// Front-to-back scan; returns the first matching index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl<T: Ord> Searcher<T> for LinearSearch {
    fn search(&self, items: &[T], target: &T) -> Option<usize> {
        items.iter().position(|item| item == target)
    }

    fn search_recursive(&self, items: &[T], target: &T) -> Option<usize> {
        // Halving keeps the depth logarithmic; the left half goes first so
        // the earliest match wins.
        fn scan<T: Ord>(items: &[T], offset: usize, target: &T) -> Option<usize> {
            match items {
                [] => None,
                [item] => (item == target).then_some(offset),
                _ => {
                    let mid = items.len() / 2;
                    let (left, right) = items.split_at(mid);
                    scan(left, offset, target)
                        .or_else(|| scan(right, offset + mid, target))
                }
            }
        }
        scan(items, 0, target)
    }
}
