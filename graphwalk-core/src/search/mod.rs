//! Array Search
//!
//! Linear and binary search over slices, each with an iterative and a
//! recursive form, behind one [`Searcher`] trait. The async variants move
//! the work to tokio's blocking pool; they return the same index the
//! synchronous call would.

mod binary;
mod linear;

use std::sync::Arc;

pub use binary::BinarySearch;
pub use linear::LinearSearch;

use crate::error::{Error, Result};

/// A search over a slice of ordered items.
pub trait Searcher<T: Ord> {
    /// Index of `target` in `items`, or `None`.
    fn search(&self, items: &[T], target: &T) -> Option<usize>;

    /// Same contract as [`search`](Searcher::search), written recursively.
    fn search_recursive(&self, items: &[T], target: &T) -> Option<usize>;

    /// Run [`search`](Searcher::search) on the blocking pool.
    fn search_async(
        &self,
        items: Arc<[T]>,
        target: T,
    ) -> impl std::future::Future<Output = Result<Option<usize>>> + Send
    where
        Self: Clone + Send + 'static,
        T: Send + Sync + 'static,
    {
        let searcher = self.clone();
        run_blocking(move || Searcher::<T>::search(&searcher, &items, &target))
    }

    /// Run [`search_recursive`](Searcher::search_recursive) on the blocking pool.
    fn search_recursive_async(
        &self,
        items: Arc<[T]>,
        target: T,
    ) -> impl std::future::Future<Output = Result<Option<usize>>> + Send
    where
        Self: Clone + Send + 'static,
        T: Send + Sync + 'static,
    {
        let searcher = self.clone();
        run_blocking(move || Searcher::<T>::search_recursive(&searcher, &items, &target))
    }
}

async fn run_blocking<F>(job: F) -> Result<Option<usize>>
where
    F: FnOnce() -> Option<usize> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| Error::Background {
            reason: e.to_string(),
        })
}
