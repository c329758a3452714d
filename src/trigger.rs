//! Trigger context for a run
//!
//! The ref and repository that initiated a run are threaded in explicitly;
//! the core never reads them from ambient process state.

use crate::types::RepoIdentity;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// The event that initiated a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    /// Repository the run operates on
    pub repo: RepoIdentity,
    /// Fully qualified git ref that triggered the run
    pub git_ref: String,
}

impl TriggerContext {
    /// Create a trigger context from a repository and a fully qualified ref
    pub fn new(repo: RepoIdentity, git_ref: impl Into<String>) -> Self {
        Self {
            repo,
            git_ref: git_ref.into(),
        }
    }

    /// The branch this run was triggered by, if the ref points at one.
    ///
    /// Tag pushes and other non-branch refs yield `None`; the run then
    /// completes as a no-op rather than an error.
    pub fn branch(&self) -> Option<&str> {
        self.git_ref
            .strip_prefix(BRANCH_REF_PREFIX)
            .filter(|name| !name.is_empty())
    }
}
