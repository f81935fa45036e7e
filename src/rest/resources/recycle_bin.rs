//! Recycle bin resource implementation.
//!
//! Recycle bin items are addressed by their deletion ID, not the ID of the
//! deleted book, chapter, page, or shelf.
//!
//! # Example
//!
//! ```rust,ignore
//! let outcomes = client.recycle_bin().empty().await?;
//! let failed = outcomes.iter().filter(|o| !o.is_success()).count();
//! println!("{} destroyed, {failed} failed", outcomes.len() - failed);
//! ```

use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{into_record, Filters, Listable, Record, Resource, ResourceError};

/// Handle for the `recycle-bin` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RecycleBin<'a> {
    client: &'a RestClient,
}

/// The result of destroying one recycle bin item during [`RecycleBin::empty`].
#[derive(Debug)]
pub struct DestroyOutcome {
    /// The deletion ID that was destroyed.
    pub deletion_id: u64,
    /// The server reply (usually `{"delete_count": n}`) or the failure.
    pub result: Result<Record, ResourceError>,
}

impl DestroyOutcome {
    /// Returns `true` if the item was destroyed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl<'a> RecycleBin<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Restores a deleted item. The reply carries `restore_count`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn restore(&self, deletion_id: u64) -> Result<Record, ResourceError> {
        let value = self
            .client
            .put(&Self::item_path(deletion_id), None, Vec::new())
            .await?;
        into_record(value)
    }

    /// Permanently destroys a deleted item. The reply carries `delete_count`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn destroy(&self, deletion_id: u64) -> Result<Record, ResourceError> {
        let value = self
            .client
            .delete(&Self::item_path(deletion_id), None)
            .await?;
        into_record(value)
    }

    /// Permanently destroys everything in the recycle bin.
    ///
    /// Items are destroyed one at a time. A failed item is logged and recorded
    /// in its outcome; the remaining items are still attempted. Items without
    /// an integer `id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] only if listing the recycle bin fails.
    pub async fn empty(&self) -> Result<Vec<DestroyOutcome>, ResourceError> {
        let items = self.list_all(None, &Filters::new()).await?;
        let mut outcomes = Vec::with_capacity(items.len());

        for item in &items {
            let Some(deletion_id) = item.get("id").and_then(Value::as_u64) else {
                tracing::warn!("Skipping recycle bin item without an id: {:?}", item);
                continue;
            };

            let result = self.destroy(deletion_id).await;
            if let Err(e) = &result {
                tracing::warn!("Failed to destroy recycle bin item {}: {}", deletion_id, e);
            }
            outcomes.push(DestroyOutcome {
                deletion_id,
                result,
            });
        }

        tracing::debug!(
            "Emptied recycle bin: {} of {} items destroyed",
            outcomes.iter().filter(|o| o.is_success()).count(),
            items.len()
        );
        Ok(outcomes)
    }
}

impl Resource for RecycleBin<'_> {
    const ENDPOINT: &'static str = "recycle-bin";
    const NAME: &'static str = "Recycle bin item";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for RecycleBin<'_> {}
