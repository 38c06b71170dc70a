#![no_main]

use libfuzzer_sys::fuzz_target;

use ezmd::domain::services::{canonicalize, resolve_source};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let once = canonicalize(raw);
        assert_eq!(canonicalize(&once), once);
        let _ = resolve_source(raw);
    }
});
