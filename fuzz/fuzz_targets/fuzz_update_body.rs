//! Fuzz target: binding `UpdateActionRequest`.
//!
//! The id must never be taken from the body, whatever the body contains.

#![no_main]

use clinic_core::UpdateActionRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<UpdateActionRequest>(data) {
        assert!(request.id.is_empty(), "id must only come from the path");
    }
});
