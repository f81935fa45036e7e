//! System information resource.

use crate::clients::{ResponseBody, RestClient};
use crate::rest::{into_record, Record, Resource, ResourceError};

/// Handle for the `system` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    client: &'a RestClient,
}

impl<'a> System<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Returns instance details: `version`, `instance_id`, `app_name`,
    /// `app_logo`, and `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn info(&self) -> Result<Record, ResourceError> {
        match self.client.get(Self::ENDPOINT, &[]).await? {
            ResponseBody::Structured(value) => into_record(value),
            ResponseBody::Binary(_) => Ok(Record::new()),
        }
    }
}

impl Resource for System<'_> {
    const ENDPOINT: &'static str = "system";
    const NAME: &'static str = "System";

    fn client(&self) -> &RestClient {
        self.client
    }
}
