//! Repository host client
//!
//! Provides a unified interface for the three host operations the cascade
//! needs: listing branches, merging one branch into another, and opening a
//! review request as a merge fallback.

mod github;

pub use github::GitHubHost;

use crate::error::Result;
use crate::types::{Branch, RepoIdentity, ReviewRequest};
use async_trait::async_trait;

/// Host client trait for branch and review-request operations
///
/// This trait abstracts the hosting platform's API, allowing the cascade
/// logic to run against a mock in tests.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// List every branch in the repository
    async fn list_branches(&self) -> Result<Vec<Branch>>;

    /// Merge `head` into `base` with the given commit message.
    ///
    /// An `Err` covers both merge conflicts and any other host-side
    /// rejection; the caller decides whether to fall back to a review
    /// request.
    async fn merge_branch(&self, base: &str, head: &str, commit_message: &str) -> Result<()>;

    /// Open a review request with `head` as source and `base` as target
    async fn create_review_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<ReviewRequest>;

    /// The repository this client operates on
    fn repo(&self) -> &RepoIdentity;
}
