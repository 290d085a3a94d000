//! Draining an asynchronous producer into an ordered collection.

use anyhow::Result;

/// A finite, ordered producer of items whose `next` may suspend on I/O.
///
/// `Ok(None)` marks exhaustion. Implementors yield items exactly once,
/// in a stable order.
#[allow(async_fn_in_trait)]
pub trait Sequence {
    type Item;

    async fn next(&mut self) -> Result<Option<Self::Item>>;
}

/// Drain `seq` into a vector, preserving emission order.
///
/// The producer is consumed end to end exactly once. A failure mid-stream
/// aborts the whole drain; partially collected items are discarded with it.
pub async fn buffer<S: Sequence>(mut seq: S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    while let Some(item) = seq.next().await? {
        items.push(item);
    }
    Ok(items)
}
