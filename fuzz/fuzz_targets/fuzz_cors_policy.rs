//! Fuzz target: parsing of the CORS policy setting.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quota_core::CorsPolicy;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(policy) = s.parse::<CorsPolicy>() {
        assert_eq!(policy.to_string().parse::<CorsPolicy>(), Ok(policy));
    }
});
