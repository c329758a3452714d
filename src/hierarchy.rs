//! Branch hierarchy resolution - pure functions for building the cascade path
//!
//! No I/O happens here - the branch list is passed in, making the ordering
//! logic easy to unit test.

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::types::Branch;
use semver::Version;
use std::collections::HashSet;

/// Ordered chain of branches forming the cascade path
///
/// Invariants: the production branch is first; the development branch, when
/// configured, is last; release branches sit between them in ascending
/// semantic-version order; no entry appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy(Vec<String>);

impl Hierarchy {
    /// The ordered branch names
    pub fn branches(&self) -> &[String] {
        &self.0
    }

    /// Position of a branch in the chain
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|branch| branch == name)
    }

    /// Branch at a given position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of branches in the chain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain is empty (never true for a built hierarchy)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// Build the cascade hierarchy from the host's branch list.
///
/// Names matching the release pattern are sorted by semantic-version
/// precedence; names whose suffix is not a valid semver (partial versions
/// like `1.2`, or prefixed junk like `old_0.0.1`) are silently dropped.
/// The production branch is prepended and the development branch, when
/// configured, appended. Duplicate entries keep their earliest position.
pub fn build_hierarchy(branches: &[Branch], config: &Configuration) -> Result<Hierarchy> {
    // Defensive check against a misbehaving host: every entry must be named.
    if branches.iter().any(|branch| branch.name.is_empty()) {
        return Err(Error::MalformedHostResponse(
            "branch list contains an unnamed entry".to_string(),
        ));
    }

    let mut releases: Vec<(Version, &str)> = branches
        .iter()
        .filter_map(|branch| branch.name.strip_prefix(&config.release_pattern))
        .filter_map(|suffix| Version::parse(suffix).ok().map(|version| (version, suffix)))
        .collect();
    releases.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let mut chain = Vec::with_capacity(releases.len() + 2);
    chain.push(config.production_branch.clone());
    chain.extend(
        releases
            .iter()
            .map(|(_, suffix)| format!("{}{suffix}", config.release_pattern)),
    );
    if let Some(ref development) = config.development_branch {
        chain.push(development.clone());
    }

    let mut seen = HashSet::new();
    chain.retain(|name| seen.insert(name.clone()));

    Ok(Hierarchy(chain))
}
