#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing with unknown-key collection must never panic
        let _ = ezmd::config::parse_with_warnings(content, std::path::Path::new("fuzz.toml"));
    }
});
