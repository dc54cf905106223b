//! Parallel fan-out for per-item provider lookups.
//!
//! Used where one provider response names several recipes whose details
//! must each be fetched separately.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Type alias for boxed futures used in parallel fetching
type ItemFuture<I, T> = Pin<Box<dyn Future<Output = (usize, I, Result<T>)> + Send>>;

/// Fetch every item in parallel and return one outcome per item.
///
/// Unlike a `try_join`, a failed item does not abort the others: each result
/// is returned alongside its input so the caller can decide how to degrade.
/// Outcomes come back in input order regardless of completion order.
///
/// # Arguments
///
/// * `items` - Inputs to fetch (typically recipe IDs)
/// * `fetch` - Async function that fetches a single item
/// * `max_concurrent` - Maximum requests in flight; `None` fires all at once
///
/// # Example
///
/// ```ignore
/// let outcomes = fetch_all(
///     ids,
///     |id: String| {
///         let p = provider.clone();
///         async move { p.get_recipe_information(&id).await }
///     },
///     Some(4),
/// ).await;
/// ```
pub async fn fetch_all<I, T, F, Fut>(
    items: Vec<I>,
    fetch: F,
    max_concurrent: Option<usize>,
) -> Vec<(I, Result<T>)>
where
    I: Clone + Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let limit = max_concurrent.unwrap_or(total).max(1);
    debug!("Fetching {} items with max {} concurrent", total, limit);

    let make_future = |index: usize, item: I| -> ItemFuture<I, T> {
        let fut = fetch(item.clone());
        Box::pin(async move {
            let result = fut.await;
            (index, item, result)
        })
    };

    let mut futures: FuturesUnordered<ItemFuture<I, T>> = FuturesUnordered::new();
    let mut pending = items.into_iter().enumerate();

    // Seed initial batch up to the limit
    for (index, item) in pending.by_ref().take(limit) {
        futures.push(make_future(index, item));
    }

    let mut slots: Vec<Option<(I, Result<T>)>> = (0..total).map(|_| None).collect();

    while let Some((index, item, result)) = futures.next().await {
        if let Err(ref e) = result {
            debug!("Item {} failed: {}", index, e);
        }
        slots[index] = Some((item, result));

        if let Some((next_index, next_item)) = pending.next() {
            futures.push(make_future(next_index, next_item));
        }
    }

    slots.into_iter().flatten().collect()
}
