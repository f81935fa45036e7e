//! User resource implementation.
//!
//! Managing users requires the "manage users" permission on the API token's
//! owner.

use serde::Serialize;
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::{
    into_record, Creatable, Deletable, Listable, Payload, Readable, Record, Resource,
    ResourceError, Updatable,
};

/// Handle for the `users` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a RestClient,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Deletes a user and transfers ownership of their content to another user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn delete_with_migration(
        &self,
        id: u64,
        migrate_ownership_id: u64,
    ) -> Result<Record, ResourceError> {
        let data = json!({ "migrate_ownership_id": migrate_ownership_id });
        let value = self
            .client
            .delete(&Self::item_path(id), Some(data))
            .await?;
        into_record(value)
    }
}

impl Resource for Users<'_> {
    const ENDPOINT: &'static str = "users";
    const NAME: &'static str = "User";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Users<'_> {}
impl Readable for Users<'_> {}
impl Deletable for Users<'_> {}

impl Creatable for Users<'_> {
    type Create = UserCreate;
}

impl Updatable for Users<'_> {
    type Update = UserUpdate;
}

/// Payload for creating a user.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UserCreate {
    /// Display name (max 100 characters).
    pub name: String,
    pub email: String,
    /// Role IDs to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
    /// Password (min 8 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Language code such as `en` or `fr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    /// Send an invite email. Only sent when `true`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_invite: bool,
}

impl UserCreate {
    /// Starts a user payload with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Assigns roles.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Requests an invite email instead of setting a password.
    #[must_use]
    pub const fn send_invite(mut self) -> Self {
        self.send_invite = true;
        self
    }
}

impl Payload for UserCreate {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.email.trim().is_empty() {
            return Err(ResourceError::validation(Users::NAME, "email must not be empty"));
        }
        Ok(())
    }
}

/// Payload for updating a user.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replaces the role assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
}

impl Payload for UserUpdate {}
