//! Core types for downstream-cascade

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A branch as reported by the repository host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branch {
    /// Branch name
    pub name: String,
}

impl Branch {
    /// Create a branch from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Identity of the repository a run operates on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoIdentity {
    /// Parse an `"owner/name"` string (the `GITHUB_REPOSITORY` format).
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(Error::Config(format!(
                "repository must be \"owner/name\", got {value:?}"
            ))),
        }
    }
}

impl std::fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A single proposed merge of one branch into its downstream neighbor
///
/// Derived from the hierarchy per run, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// Branch the commit landed on
    pub source: String,
    /// Next branch in the hierarchy
    pub target: String,
}

impl std::fmt::Display for CascadeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} into {}", self.source, self.target)
    }
}

/// A review request (pull request) opened as a merge fallback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Review request number
    pub number: u64,
    /// Web URL for the review request
    pub html_url: String,
}

/// Outcome of one attempted cascade step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// The direct merge succeeded
    Merged {
        /// The step that was merged
        step: CascadeStep,
    },
    /// The merge was rejected and a review request was opened instead
    ReviewRequested {
        /// The step the review request covers
        step: CascadeStep,
        /// The review request that was opened
        review: ReviewRequest,
    },
    /// Neither the merge nor the review-request fallback went through
    Failed {
        /// The step that could not be performed
        step: CascadeStep,
        /// Why it could not be performed
        reason: String,
    },
}

impl ActionResult {
    /// The step this result applies to
    pub const fn step(&self) -> &CascadeStep {
        match self {
            Self::Merged { step }
            | Self::ReviewRequested { step, .. }
            | Self::Failed { step, .. } => step,
        }
    }

    /// Whether this action left the run in a failed state
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl std::fmt::Display for ActionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged { step } => write!(f, "Merged {step}"),
            Self::ReviewRequested { step, review } => {
                write!(f, "Review request #{} opened for {step}", review.number)
            }
            Self::Failed { step, reason } => {
                write!(f, "Unable to merge or open a review request for {step}: {reason}")
            }
        }
    }
}
