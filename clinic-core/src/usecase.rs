//! Usecase abstraction consumed by the HTTP handlers.

use async_trait::async_trait;

use crate::action::{Action, CreateActionRequest, UpdateActionRequest};
use crate::error::UsecaseError;

/// Business operations on the `actions` resource.
///
/// Implementations must be `Send + Sync`; handlers share one instance across
/// all requests and never mutate it themselves. Ids arrive exactly as they
/// appeared in the request path, so an unparseable id is the implementation's
/// to report, normally as [`UsecaseError::NotFound`].
#[async_trait]
pub trait ActionUsecase: Send + Sync {
    /// List every active action.
    ///
    /// # Errors
    /// Returns [`UsecaseError::Internal`] if the listing cannot be produced.
    async fn get_all(&self) -> Result<Vec<Action>, UsecaseError>;

    /// Fetch one active action.
    ///
    /// # Errors
    /// Returns [`UsecaseError::NotFound`] if no active action has this id.
    async fn get_by_id(&self, id: &str) -> Result<Action, UsecaseError>;

    /// Register a new action.
    ///
    /// # Errors
    /// Returns [`UsecaseError::DuplicateName`] if the name is already taken.
    async fn create(&self, request: CreateActionRequest) -> Result<Action, UsecaseError>;

    /// Rename an existing action.
    ///
    /// # Errors
    /// Returns [`UsecaseError::NotFound`] if the action is missing, or
    /// [`UsecaseError::DuplicateName`] if another action holds the name.
    async fn update(&self, request: UpdateActionRequest) -> Result<Action, UsecaseError>;

    /// Permanently remove an action.
    ///
    /// # Errors
    /// Returns [`UsecaseError::NotFound`] if the action is missing.
    async fn delete(&self, id: &str) -> Result<(), UsecaseError>;

    /// Move an action to the trash.
    ///
    /// # Errors
    /// Returns [`UsecaseError::NotFound`] if the action is missing or already trashed.
    async fn soft_delete(&self, id: &str) -> Result<(), UsecaseError>;

    /// Bring a trashed action back.
    ///
    /// # Errors
    /// Returns [`UsecaseError::NotFound`] if the action is missing or not trashed.
    async fn restore(&self, id: &str) -> Result<(), UsecaseError>;
}
