//! Elapsed-time measurement for async operations.
//!
//! ```rust,ignore
//! use bookstack_api::timing::timed;
//! use bookstack_api::rest::{Filters, Listable};
//!
//! // logs "list books took 0.42s"
//! let books = timed("list books", client.books().list_all(None, &Filters::new())).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// Awaits `future` and logs how long it took at `info` level.
///
/// The duration is logged whatever the output, including errors.
pub async fn timed<F: Future>(label: &str, future: F) -> F::Output {
    let (output, elapsed) = measure(future).await;
    tracing::info!("{} took {:.2}s", label, elapsed.as_secs_f64());
    output
}

/// Awaits `future` and returns its output with the elapsed time.
pub async fn measure<F: Future>(future: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let output = future.await;
    (output, start.elapsed())
}
