//! In-memory `actions` usecase.
//!
//! Keeps every action, trashed or not, in a map keyed by id. Stands in for a
//! database-backed usecase in development and tests.

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use chrono::Utc;
use clinic_core::{
    Action, ActionId, ActionUsecase, CreateActionRequest, UpdateActionRequest, UsecaseError,
    Validate,
};

/// Thread-safe registry of actions.
#[derive(Debug, Default)]
pub struct ActionStore {
    entries: RwLock<HashMap<ActionId, Action>>,
}

impl ActionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `actions`.
    #[must_use]
    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let entries = actions.into_iter().map(|a| (a.id, a)).collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ActionId, Action>>, UsecaseError> {
        self.entries
            .read()
            .map_err(|_| UsecaseError::internal("action store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ActionId, Action>>, UsecaseError> {
        self.entries
            .write()
            .map_err(|_| UsecaseError::internal("action store lock poisoned"))
    }
}

/// Unparseable ids cannot match any row.
fn parse_id(id: &str) -> Result<ActionId, UsecaseError> {
    id.parse().map_err(|_| UsecaseError::NotFound)
}

/// Refuses names that break the request rules, even when the caller skipped
/// validation.
fn ensure_valid(request: &impl Validate) -> Result<(), UsecaseError> {
    match request.validate().into_iter().next() {
        Some(failure) => Err(UsecaseError::internal(failure.message)),
        None => Ok(()),
    }
}

/// Whether an active action other than `except` already uses `name`.
fn name_taken(entries: &HashMap<ActionId, Action>, name: &str, except: Option<ActionId>) -> bool {
    entries.values().any(|a| {
        a.is_active() && Some(a.id) != except && a.name.to_lowercase() == name.to_lowercase()
    })
}

#[async_trait]
impl ActionUsecase for ActionStore {
    async fn get_all(&self) -> Result<Vec<Action>, UsecaseError> {
        let mut actions: Vec<Action> =
            self.read()?.values().filter(|a| a.is_active()).cloned().collect();
        actions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(actions)
    }

    async fn get_by_id(&self, id: &str) -> Result<Action, UsecaseError> {
        let id = parse_id(id)?;
        self.read()?
            .get(&id)
            .filter(|a| a.is_active())
            .cloned()
            .ok_or(UsecaseError::NotFound)
    }

    async fn create(&self, request: CreateActionRequest) -> Result<Action, UsecaseError> {
        ensure_valid(&request)?;
        let name = request.name.trim();
        let mut entries = self.write()?;
        if name_taken(&entries, name, None) {
            return Err(UsecaseError::DuplicateName);
        }
        let action = Action::new(name);
        entries.insert(action.id, action.clone());
        tracing::debug!(id = %action.id, name = %action.name, "action created");
        Ok(action)
    }

    async fn update(&self, request: UpdateActionRequest) -> Result<Action, UsecaseError> {
        let id = parse_id(&request.id)?;
        let name = request.name.trim();
        let mut entries = self.write()?;
        if !entries.get(&id).is_some_and(Action::is_active) {
            return Err(UsecaseError::NotFound);
        }
        ensure_valid(&request)?;
        if name_taken(&entries, name, Some(id)) {
            return Err(UsecaseError::DuplicateName);
        }
        let action = entries.get_mut(&id).ok_or(UsecaseError::NotFound)?;
        name.clone_into(&mut action.name);
        action.updated_at = Utc::now();
        tracing::debug!(%id, name = %action.name, "action updated");
        Ok(action.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), UsecaseError> {
        let id = parse_id(id)?;
        self.write()?.remove(&id).ok_or(UsecaseError::NotFound)?;
        tracing::debug!(%id, "action deleted");
        Ok(())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), UsecaseError> {
        let id = parse_id(id)?;
        let mut entries = self.write()?;
        let action = entries
            .get_mut(&id)
            .filter(|a| a.is_active())
            .ok_or(UsecaseError::NotFound)?;
        let now = Utc::now();
        action.deleted_at = Some(now);
        action.updated_at = now;
        tracing::debug!(%id, "action moved to trash");
        Ok(())
    }

    async fn restore(&self, id: &str) -> Result<(), UsecaseError> {
        let id = parse_id(id)?;
        let mut entries = self.write()?;
        let action = entries
            .get_mut(&id)
            .filter(|a| !a.is_active())
            .ok_or(UsecaseError::NotFound)?;
        action.deleted_at = None;
        action.updated_at = Utc::now();
        tracing::debug!(%id, "action restored");
        Ok(())
    }
}
