//! Audit log resource implementation.
//!
//! Read-only. The token owner needs permission to manage both users and
//! system settings.

use crate::clients::RestClient;
use crate::rest::{Filters, Listable, Record, Resource, ResourceError};

/// Handle for the `audit-log` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct AuditLog<'a> {
    client: &'a RestClient,
}

impl<'a> AuditLog<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every entry recorded for a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_user(&self, user_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("user_id", user_id))
            .await
    }

    /// Lists every entry of one event type, such as `page_create` or `auth_login`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_type(&self, event_type: &str) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("type", event_type))
            .await
    }
}

impl Resource for AuditLog<'_> {
    const ENDPOINT: &'static str = "audit-log";
    const NAME: &'static str = "Audit log entry";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for AuditLog<'_> {}
