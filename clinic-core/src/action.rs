use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ActionId;

/// An administrative action that clinic staff can be assigned to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Action {
    /// Unique identifier for this action.
    pub id: ActionId,
    /// Display name, unique among active actions.
    pub name: String,
    /// When this action was first registered.
    pub created_at: DateTime<Utc>,
    /// When this action was last modified.
    pub updated_at: DateTime<Utc>,
    /// Set while the action sits in the trash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Action {
    /// Create a fresh, active action stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ActionId::new(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Returns `true` unless the action has been soft-deleted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Request body for `POST /actions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CreateActionRequest {
    /// Requested display name. A missing key binds to the empty string so the
    /// validator, not the JSON decoder, reports it.
    #[serde(default)]
    pub name: String,
}

impl CreateActionRequest {
    /// Creates a request for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body for `PUT /actions/{id}`.
///
/// `id` never comes from the body; the handler injects the path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UpdateActionRequest {
    /// Id of the action to rename, taken from the request path.
    #[serde(skip)]
    pub id: String,
    /// New display name. A missing key binds to the empty string.
    #[serde(default)]
    pub name: String,
}

impl UpdateActionRequest {
    /// Creates a request targeting `id` with the new `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
