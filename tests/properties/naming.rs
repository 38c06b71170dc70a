//! Property tests for title sanitization.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

use ezmd::domain::services::sanitize_title;

static SAFE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+$").unwrap());

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sanitized names only hold word characters, underscores and hyphens.
    #[test]
    fn property_sanitized_charset(
        title in "(?s).{0,200}",
        max_len in 0usize..300
    ) {
        let name = sanitize_title(&title, max_len);
        prop_assert!(SAFE_NAME.is_match(&name), "unsafe name {:?}", name);
    }

    /// PROPERTY: Sanitized names are non-empty and never exceed the cap.
    #[test]
    fn property_sanitized_length_bounded(
        title in "(?s).{0,200}",
        max_len in 0usize..64
    ) {
        let name = sanitize_title(&title, max_len);
        let len = name.chars().count();
        prop_assert!(len >= 1);
        prop_assert!(len <= max_len.max(1));
    }

    /// PROPERTY: Sanitizing twice changes nothing.
    #[test]
    fn property_sanitize_idempotent(
        title in "(?s).{0,120}",
        max_len in 1usize..128
    ) {
        let once = sanitize_title(&title, max_len);
        prop_assert_eq!(sanitize_title(&once, max_len), once);
    }
}
