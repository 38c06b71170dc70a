//! Property tests for source canonicalization.

use proptest::prelude::*;

use ezmd::domain::services::{canonicalize, infer_extension, resolve_source};

fn arxiv_id() -> impl Strategy<Value = String> {
    ("[0-9]{4}", "[0-9]{4,5}", proptest::option::of(1u8..20)).prop_map(|(a, b, v)| match v {
        Some(v) => format!("{}.{}v{}", a, b, v),
        None => format!("{}.{}", a, b),
    })
}

fn arxiv_flavoured() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just("https://arxiv.org/abs/"),
        Just("http://arxiv.org/abs/"),
        Just("https://arxiv.org/pdf/"),
        Just("arxiv.org/"),
        Just("https://www.arxiv.org/abs/"),
    ];
    let suffix = prop_oneof![
        Just(""),
        Just(".pdf"),
        Just("/"),
        Just("?context=cs"),
        Just("#page=2"),
    ];
    (prefix, arxiv_id(), suffix).prop_map(|(p, id, s)| format!("{}{}{}", p, id, s))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: canonicalize(canonicalize(x)) == canonicalize(x) for any input.
    #[test]
    fn property_canonicalize_idempotent_any(
        s in "(?s).{0,200}"
    ) {
        let once = canonicalize(&s);
        prop_assert_eq!(canonicalize(&once), once);
    }

    /// PROPERTY: canonicalize is idempotent on arXiv-looking inputs.
    #[test]
    fn property_canonicalize_idempotent_arxiv(
        s in arxiv_flavoured()
    ) {
        let once = canonicalize(&s);
        prop_assert!(once.starts_with("https://arxiv.org/pdf/"), "{}", once);
        prop_assert!(once.ends_with(".pdf"));
        prop_assert_eq!(canonicalize(&once), once);
    }

    /// PROPERTY: Bare ids become the canonical PDF link with a `.pdf` extension.
    #[test]
    fn property_bare_id_is_canonical_pdf(
        id in arxiv_id()
    ) {
        let source = resolve_source(&id);
        prop_assert_eq!(source.reference, format!("https://arxiv.org/pdf/{}.pdf", id));
        prop_assert_eq!(source.extension, ".pdf");
    }

    /// PROPERTY: Extension inference never panics and always yields a dotted suffix.
    #[test]
    fn property_extension_is_dotted(
        s in "(?s).{0,200}"
    ) {
        let ext = infer_extension(&canonicalize(&s));
        prop_assert!(ext.starts_with('.'));
        prop_assert!(ext.len() > 1);
    }
}

#[test]
fn known_arxiv_example() {
    let source = resolve_source("2306.02564");
    assert_eq!(source.reference, "https://arxiv.org/pdf/2306.02564.pdf");
    assert_eq!(source.extension, ".pdf");
}
