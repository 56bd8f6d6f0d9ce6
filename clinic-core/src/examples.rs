//! Example action records used to seed development instances.

use crate::action::Action;

/// Returns the canonical example actions, all active.
#[must_use]
pub fn example_actions() -> Vec<Action> {
    ["Consultation", "Vaccination", "Dental Cleaning"]
        .into_iter()
        .map(Action::new)
        .collect()
}
