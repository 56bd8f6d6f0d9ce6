//! Request validation producing field-level failure descriptions.

use serde::{Deserialize, Serialize};

use crate::action::{CreateActionRequest, UpdateActionRequest};

/// Longest accepted action name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// One failed validation rule, reported to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ValidationField {
    /// Name of the offending request field (e.g. `"name"`).
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationField {
    /// Creates a `ValidationField` from any string-like values.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A request type that can check its own field rules.
pub trait Validate {
    /// Returns one entry per failed rule; an empty vector means valid.
    fn validate(&self) -> Vec<ValidationField>;
}

/// Rules every action name must satisfy, whichever request carries it.
fn name_failures(name: &str) -> Vec<ValidationField> {
    let name = name.trim();
    if name.is_empty() {
        vec![ValidationField::new("name", "Name is required")]
    } else if name.chars().count() > MAX_NAME_LEN {
        vec![ValidationField::new(
            "name",
            format!("Name must be at most {MAX_NAME_LEN} characters"),
        )]
    } else {
        Vec::new()
    }
}

impl Validate for CreateActionRequest {
    fn validate(&self) -> Vec<ValidationField> {
        name_failures(&self.name)
    }
}

impl Validate for UpdateActionRequest {
    fn validate(&self) -> Vec<ValidationField> {
        name_failures(&self.name)
    }
}
