//! Fuzz target: relaying an arbitrary upstream JSON body.
//!
//! Whatever upstream sends, a parsed body must re-serialize into JSON that
//! parses again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quota_core::RelayOutcome;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let outcome = RelayOutcome::Relayed { status: 200, body };
    let Some(relayed) = outcome.body() else {
        panic!("relayed outcome must carry a body");
    };
    let bytes = match serde_json::to_vec(&relayed) {
        Ok(b) => b,
        Err(e) => panic!("re-serialization failed: {e}"),
    };
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&bytes) {
        panic!("relayed body is not valid JSON: {e}");
    }
});
