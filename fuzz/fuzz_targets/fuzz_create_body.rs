//! Fuzz target: binding and validating `CreateActionRequest`.
//!
//! Arbitrary bytes go through the same JSON decoding and validation the
//! `POST /actions` handler runs. Errors are expected; panics are not.

#![no_main]

use clinic_core::{CreateActionRequest, Validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<CreateActionRequest>(data) else {
        return;
    };
    let failures = request.validate();
    assert!(failures.len() <= 1, "name yields at most one failure");
    assert!(failures.iter().all(|f| f.field == "name"));
});
