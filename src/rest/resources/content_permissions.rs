//! Content-level permission overrides.
//!
//! Permissions are addressed by content type and ID
//! (`content-permissions/<type>/<id>`) rather than by a numeric ID alone.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::rest::resources::{ContentType, RolePermission};
//!
//! let perms = client.content_permissions();
//!
//! perms
//!     .set_role_permission(ContentType::Book, 4, RolePermission::view_only(3))
//!     .await?;
//! perms.clear_role_permissions(ContentType::Book, 4).await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{ResponseBody, RestClient};
use crate::rest::{into_record, Payload, Record, Resource, ResourceError};

/// Kinds of content that carry permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Page,
    Book,
    Chapter,
    Bookshelf,
}

impl ContentType {
    /// Returns the path segment for this content type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Book => "book",
            Self::Chapter => "chapter",
            Self::Bookshelf => "bookshelf",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permissions granted to one role on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    pub role_id: u64,
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub update: bool,
    #[serde(default)]
    pub delete: bool,
}

impl RolePermission {
    /// Grants view access only.
    #[must_use]
    pub const fn view_only(role_id: u64) -> Self {
        Self {
            role_id,
            view: true,
            create: false,
            update: false,
            delete: false,
        }
    }
}

/// Permissions applied when no role entry matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FallbackPermissions {
    /// Inherit from the parent item instead of using the flags below.
    pub inheriting: bool,
    pub view: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

/// Payload for updating an item's permissions.
///
/// `role_permissions` replaces the full role list when set.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PermissionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_permissions: Option<Vec<RolePermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_permissions: Option<FallbackPermissions>,
}

impl Payload for PermissionsUpdate {}

/// Handle for the `content-permissions` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ContentPermissions<'a> {
    client: &'a RestClient,
}

impl<'a> ContentPermissions<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    fn content_path(content_type: ContentType, content_id: u64) -> String {
        format!("{}/{content_type}/{content_id}", Self::ENDPOINT)
    }

    /// Reads `owner`, `role_permissions`, and `fallback_permissions` for an item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn read(
        &self,
        content_type: ContentType,
        content_id: u64,
    ) -> Result<Record, ResourceError> {
        let path = Self::content_path(content_type, content_id);
        match self.client.get(&path, &[]).await? {
            ResponseBody::Structured(value) => into_record(value),
            ResponseBody::Binary(_) => Ok(Record::new()),
        }
    }

    /// Updates an item's permissions. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn update(
        &self,
        content_type: ContentType,
        content_id: u64,
        payload: &PermissionsUpdate,
    ) -> Result<Record, ResourceError> {
        let path = Self::content_path(content_type, content_id);
        let value = self
            .client
            .put(&path, Some(payload.to_body()?), Vec::new())
            .await?;
        into_record(value)
    }

    /// Sets one role's permissions, keeping every other role entry.
    ///
    /// Reads the current role list, replaces or appends the entry for
    /// `permission.role_id`, then writes the list back.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the current role list is
    /// malformed, or [`ResourceError::Rest`] for transport errors.
    pub async fn set_role_permission(
        &self,
        content_type: ContentType,
        content_id: u64,
        permission: RolePermission,
    ) -> Result<Record, ResourceError> {
        let existing = self.read(content_type, content_id).await?;
        let role_permissions = merge_role_permission(&existing, permission)?;

        let payload = PermissionsUpdate {
            role_permissions: Some(role_permissions),
            ..Default::default()
        };
        self.update(content_type, content_id, &payload).await
    }

    /// Removes every role-specific entry from an item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn clear_role_permissions(
        &self,
        content_type: ContentType,
        content_id: u64,
    ) -> Result<Record, ResourceError> {
        let payload = PermissionsUpdate {
            role_permissions: Some(Vec::new()),
            ..Default::default()
        };
        self.update(content_type, content_id, &payload).await
    }
}

fn merge_role_permission(
    existing: &Record,
    permission: RolePermission,
) -> Result<Vec<RolePermission>, ResourceError> {
    let mut role_permissions: Vec<RolePermission> = match existing.get("role_permissions") {
        Some(Value::Array(entries)) => entries
            .iter()
            .cloned()
            .map(serde_json::from_value::<RolePermission>)
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    match role_permissions
        .iter()
        .position(|entry| entry.role_id == permission.role_id)
    {
        Some(index) => role_permissions[index] = permission,
        None => role_permissions.push(permission),
    }
    Ok(role_permissions)
}

impl Resource for ContentPermissions<'_> {
    const ENDPOINT: &'static str = "content-permissions";
    const NAME: &'static str = "Content permissions";

    fn client(&self) -> &RestClient {
        self.client
    }
}
