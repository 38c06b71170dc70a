//! Interactive collision resolution for staging and output paths
//!
//! An existing file is never silently replaced unless the request asked to
//! overwrite. Otherwise the user accepts a `_vN` proposal, types another
//! path, or cancels the whole request.

use std::path::{Path, PathBuf};

use crate::domain::ports::Prompter;
use crate::domain::services::next_free_version;
use crate::error::{EzmdError, EzmdResult};

/// Resolve `path` against the real filesystem.
pub fn resolve_collision(
    path: &Path,
    overwrite: bool,
    prompter: &dyn Prompter,
) -> EzmdResult<PathBuf> {
    resolve_collision_with(path, overwrite, prompter, |p| p.exists())
}

/// Resolve `path` with an injected existence check.
///
/// Returns `path` when overwriting or when it is free. Otherwise proposes
/// `<stem>_vN<ext>` and asks: blank accepts, `c`/`C` or end of input cancels,
/// anything else is taken as a replacement path and re-checked.
pub fn resolve_collision_with<F>(
    path: &Path,
    overwrite: bool,
    prompter: &dyn Prompter,
    exists: F,
) -> EzmdResult<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    if overwrite || !exists(path) {
        return Ok(path.to_path_buf());
    }

    let proposed = next_free_version(path, &exists);
    tracing::debug!(path = %path.display(), proposed = %proposed.display(), "collision");

    let cancelled = || EzmdError::UserCancelled {
        path: path.to_path_buf(),
    };

    loop {
        prompter.warn(&format!("File already exists: {}", path.display()));
        prompter.say(&format!("Proposed: {}", proposed.display()));

        let answer = prompter
            .input("New path, Enter to accept the proposal, or 'c' to cancel")
            .ok_or_else(cancelled)?;

        if answer.eq_ignore_ascii_case("c") {
            return Err(cancelled());
        }
        if answer.is_empty() {
            return Ok(proposed);
        }

        let candidate = PathBuf::from(answer);
        if exists(&candidate) {
            prompter.warn("That path also exists, try again.");
            continue;
        }
        return Ok(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::prompt::ScriptedPrompter;
    use std::collections::HashSet;

    fn taken(paths: &[&str]) -> HashSet<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn free_path_is_returned_without_prompting() {
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        let path = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |_| false)
            .unwrap();
        assert_eq!(path, PathBuf::from("/ctx/a.md"));
        assert!(prompter.prompts().is_empty());
    }

    #[test]
    fn overwrite_returns_existing_path() {
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        let path =
            resolve_collision_with(Path::new("/ctx/a.md"), true, &prompter, |_| true).unwrap();
        assert_eq!(path, PathBuf::from("/ctx/a.md"));
        assert!(prompter.prompts().is_empty());
    }

    #[test]
    fn blank_answer_accepts_v2_proposal() {
        let existing = taken(&["/ctx/a.md"]);
        let prompter = ScriptedPrompter::new([""]);
        let path = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |p| {
            existing.contains(p)
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/ctx/a_v2.md"));
        assert!(prompter.said().iter().any(|s| s.contains("a_v2.md")));
    }

    #[test]
    fn proposal_skips_taken_versions() {
        let existing = taken(&["/ctx/a.md", "/ctx/a_v2.md"]);
        let prompter = ScriptedPrompter::new([""]);
        let path = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |p| {
            existing.contains(p)
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/ctx/a_v3.md"));
    }

    #[test]
    fn explicit_path_is_rechecked() {
        let existing = taken(&["/ctx/a.md", "/ctx/other.md"]);
        let prompter = ScriptedPrompter::new(["/ctx/other.md", "/ctx/free.md"]);
        let path = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |p| {
            existing.contains(p)
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/ctx/free.md"));
        assert_eq!(prompter.prompts().len(), 2);
        assert!(prompter
            .warnings()
            .iter()
            .any(|w| w.contains("also exists")));
    }

    #[test]
    fn c_cancels() {
        for answer in ["c", "C"] {
            let prompter = ScriptedPrompter::new([answer]);
            let err = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |_| true)
                .unwrap_err();
            assert!(err.is_cancellation());
        }
    }

    #[test]
    fn end_of_input_cancels() {
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        let err = resolve_collision_with(Path::new("/ctx/a.md"), false, &prompter, |_| true)
            .unwrap_err();
        assert!(matches!(err, EzmdError::UserCancelled { path } if path == Path::new("/ctx/a.md")));
    }
}
