//! Fuzz target: credential extraction from raw header bytes.
//!
//! Any non-empty input is accepted and held byte for byte.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quota_core::Credential;

fuzz_target!(|data: &[u8]| {
    match Credential::from_header_bytes(data) {
        Some(cred) => assert_eq!(cred.as_bytes(), data),
        None => assert!(data.is_empty()),
    }
});
