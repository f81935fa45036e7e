//! Role resource implementation.

use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::{
    Creatable, Deletable, Listable, Payload, Readable, Resource, ResourceError, Updatable,
};

/// Handle for the `roles` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    client: &'a RestClient,
}

impl<'a> Roles<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }
}

impl Resource for Roles<'_> {
    const ENDPOINT: &'static str = "roles";
    const NAME: &'static str = "Role";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Roles<'_> {}
impl Readable for Roles<'_> {}
impl Deletable for Roles<'_> {}

impl Creatable for Roles<'_> {
    type Create = RoleCreate;
}

impl Updatable for Roles<'_> {
    type Update = RoleUpdate;
}

/// Payload for creating a role.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RoleCreate {
    /// Display name (3 to 180 characters).
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Require MFA for members. Only sent when `true`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mfa_enforced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    /// Permission names such as `content-export`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl RoleCreate {
    /// Starts a role payload with the required display name.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Sets the permission list.
    #[must_use]
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }
}

impl Payload for RoleCreate {
    fn validate(&self) -> Result<(), ResourceError> {
        let len = self.display_name.chars().count();
        if !(3..=180).contains(&len) {
            return Err(ResourceError::validation(
                Roles::NAME,
                format!("display_name must be 3-180 characters, got {len}"),
            ));
        }
        Ok(())
    }
}

/// Payload for updating a role.
///
/// `permissions: Some(vec![])` clears every permission.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Payload for RoleUpdate {}
