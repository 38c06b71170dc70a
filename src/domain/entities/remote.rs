//! Remote target entities
//!
//! A [`RemoteTarget`] is one rsync destination; a [`RemoteSet`] is the ordered
//! collection persisted as `[[remotes]]` in the config.

use serde::{Deserialize, Serialize};

use crate::error::{EzmdError, EzmdResult};

/// Placeholder shown for fields missing from a hand-edited config entry.
pub const MISSING_FIELD: &str = "???";

/// One configured rsync destination.
///
/// Every field defaults so that a malformed entry still loads; the menus show
/// [`MISSING_FIELD`] for blanks instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemoteTarget {
    #[serde(default)]
    pub alias: String,
    /// SSH destination (`host` or `user@host`)
    #[serde(default)]
    pub ssh_host: String,
    /// Directory on the remote host
    #[serde(default)]
    pub remote_dir: String,
    /// Sync every new conversion to this remote without asking
    #[serde(default)]
    pub auto_sync: bool,
}

impl RemoteTarget {
    pub fn new(
        alias: impl Into<String>,
        ssh_host: impl Into<String>,
        remote_dir: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            ssh_host: ssh_host.into(),
            remote_dir: remote_dir.into(),
            auto_sync: false,
        }
    }

    pub fn with_auto_sync(mut self, auto_sync: bool) -> Self {
        self.auto_sync = auto_sync;
        self
    }

    pub fn display_alias(&self) -> &str {
        non_empty_or_placeholder(&self.alias)
    }

    pub fn display_host(&self) -> &str {
        non_empty_or_placeholder(&self.ssh_host)
    }

    pub fn display_dir(&self) -> &str {
        non_empty_or_placeholder(&self.remote_dir)
    }

    /// `host:dir` for listings.
    pub fn display_destination(&self) -> String {
        format!("{}:{}", self.display_host(), self.display_dir())
    }

    /// Whether the entry has everything needed to attempt a transfer.
    pub fn is_complete(&self) -> bool {
        !self.ssh_host.trim().is_empty() && !self.remote_dir.trim().is_empty()
    }
}

fn non_empty_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_FIELD
    } else {
        value
    }
}

/// Ordered set of remotes keyed by alias.
///
/// Insertion order is kept for display. Alias uniqueness is enforced by
/// [`RemoteSet::insert`]; entries loaded from disk are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RemoteSet(Vec<RemoteTarget>);

impl RemoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemoteTarget> {
        self.0.iter()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }

    pub fn get(&self, alias: &str) -> Option<&RemoteTarget> {
        self.0.iter().find(|r| r.alias == alias)
    }

    /// Remote at a 1-based display index.
    pub fn by_index(&self, index: usize) -> Option<&RemoteTarget> {
        index.checked_sub(1).and_then(|i| self.0.get(i))
    }

    /// Mutable remote at a 1-based display index.
    ///
    /// Hand-edited files may repeat an alias (or leave it blank), so menus
    /// address entries by position rather than by alias.
    pub fn by_index_mut(&mut self, index: usize) -> Option<&mut RemoteTarget> {
        index.checked_sub(1).and_then(|i| self.0.get_mut(i))
    }

    /// Add a new remote, rejecting empty or duplicate aliases.
    pub fn insert(&mut self, remote: RemoteTarget) -> EzmdResult<()> {
        if remote.alias.trim().is_empty() {
            return Err(EzmdError::EmptyAlias);
        }
        if self.contains(&remote.alias) {
            return Err(EzmdError::DuplicateAlias(remote.alias));
        }
        self.0.push(remote);
        Ok(())
    }

    /// Remove the remote at a 1-based display index.
    pub fn remove_at(&mut self, index: usize) -> Option<RemoteTarget> {
        let i = index.checked_sub(1).filter(|&i| i < self.0.len())?;
        Some(self.0.remove(i))
    }

    pub fn aliases(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.alias.as_str()).collect()
    }

    pub fn auto_sync_targets(&self) -> impl Iterator<Item = &RemoteTarget> {
        self.0.iter().filter(|r| r.auto_sync)
    }

    pub fn has_auto_sync(&self) -> bool {
        self.auto_sync_targets().next().is_some()
    }
}

impl FromIterator<RemoteTarget> for RemoteSet {
    fn from_iter<I: IntoIterator<Item = RemoteTarget>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RemoteSet {
    type Item = &'a RemoteTarget;
    type IntoIter = std::slice::Iter<'a, RemoteTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RemoteSet {
        let mut set = RemoteSet::new();
        set.insert(RemoteTarget::new("laptop", "me@laptop", "~/notes"))
            .unwrap();
        set.insert(RemoteTarget::new("server", "deploy@srv", "/srv/ctx").with_auto_sync(true))
            .unwrap();
        set
    }

    #[test]
    fn insert_rejects_duplicate_alias() {
        let mut set = sample();
        let err = set
            .insert(RemoteTarget::new("laptop", "other@host", "/tmp"))
            .unwrap_err();
        assert!(matches!(err, EzmdError::DuplicateAlias(a) if a == "laptop"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_rejects_empty_alias() {
        let mut set = RemoteSet::new();
        let err = set.insert(RemoteTarget::new("  ", "h", "/d")).unwrap_err();
        assert!(matches!(err, EzmdError::EmptyAlias));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut set = sample();
        set.insert(RemoteTarget::new("alpha", "a@a", "/a")).unwrap();
        assert_eq!(set.aliases(), vec!["laptop", "server", "alpha"]);
    }

    #[test]
    fn by_index_is_one_based() {
        let set = sample();
        assert_eq!(set.by_index(1).unwrap().alias, "laptop");
        assert_eq!(set.by_index(2).unwrap().alias, "server");
        assert!(set.by_index(0).is_none());
        assert!(set.by_index(3).is_none());
    }

    #[test]
    fn remove_at_returns_removed_target() {
        let mut set = sample();
        let removed = set.remove_at(1).unwrap();
        assert_eq!(removed.ssh_host, "me@laptop");
        assert!(!set.contains("laptop"));
        assert!(set.remove_at(2).is_none());
        assert!(set.remove_at(0).is_none());
    }

    #[test]
    fn positional_access_distinguishes_repeated_aliases() {
        let mut set: RemoteSet = [
            RemoteTarget::new("", "first", "/a"),
            RemoteTarget::new("", "second", "/b"),
        ]
        .into_iter()
        .collect();

        set.by_index_mut(2).unwrap().remote_dir = "/changed".into();
        assert_eq!(set.by_index(1).unwrap().remote_dir, "/a");
        assert_eq!(set.by_index(2).unwrap().remote_dir, "/changed");

        set.remove_at(2).unwrap();
        assert_eq!(set.by_index(1).unwrap().ssh_host, "first");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn auto_sync_targets_filters() {
        let set = sample();
        let autos: Vec<_> = set.auto_sync_targets().map(|r| r.alias.as_str()).collect();
        assert_eq!(autos, vec!["server"]);
        assert!(set.has_auto_sync());
    }

    #[test]
    fn blank_fields_display_placeholder() {
        let remote = RemoteTarget {
            alias: "broken".into(),
            ..Default::default()
        };
        assert_eq!(remote.display_destination(), "???:???");
        assert_eq!(RemoteTarget::default().display_alias(), "???");
        assert!(!remote.is_complete());
    }
}
