//! Property tests for collision resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use ezmd::application::resolve_collision_with;
use ezmd::infrastructure::ScriptedPrompter;

fn taken_set(base: &Path, versions: &[u32]) -> HashSet<PathBuf> {
    let mut taken: HashSet<PathBuf> = versions
        .iter()
        .map(|v| base.with_file_name(format!("paper_v{}.pdf", v)))
        .collect();
    taken.insert(base.to_path_buf());
    taken
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: overwrite=true always returns the computed path, without prompting.
    #[test]
    fn property_overwrite_returns_computed_path(
        versions in proptest::collection::vec(2u32..12, 0..6)
    ) {
        let base = PathBuf::from("/ctx/raw/paper.pdf");
        let taken = taken_set(&base, &versions);
        let prompter = ScriptedPrompter::new(Vec::<String>::new());

        let resolved =
            resolve_collision_with(&base, true, &prompter, |p| taken.contains(p)).unwrap();

        prop_assert_eq!(resolved, base);
        prop_assert!(prompter.prompts().is_empty());
    }

    /// PROPERTY: Accepting the proposal never returns an existing path.
    #[test]
    fn property_accepted_proposal_is_free(
        versions in proptest::collection::vec(2u32..12, 0..8)
    ) {
        let base = PathBuf::from("/ctx/raw/paper.pdf");
        let taken = taken_set(&base, &versions);
        let prompter = ScriptedPrompter::new([""]);

        let resolved =
            resolve_collision_with(&base, false, &prompter, |p| taken.contains(p)).unwrap();

        prop_assert!(!taken.contains(&resolved), "{} is taken", resolved.display());
        if !versions.contains(&2) {
            prop_assert_eq!(resolved, PathBuf::from("/ctx/raw/paper_v2.pdf"));
        }
    }
}
