#![no_main]

use libfuzzer_sys::fuzz_target;

use ezmd::domain::services::sanitize_title;

fuzz_target!(|data: (&str, u8)| {
    let (title, max_len) = data;
    let name = sanitize_title(title, usize::from(max_len));
    assert!(!name.is_empty());
    assert!(name.chars().count() <= usize::from(max_len).max(1));
    assert!(name.chars().all(|c| c == '-' || c == '_' || !c.is_whitespace()));
});
