//! Cascade planning - pure functions for deciding the next hop
//!
//! No I/O happens here - the hierarchy and trigger branch are passed in,
//! making the decision logic easy to unit test.

use crate::hierarchy::Hierarchy;
use crate::types::CascadeStep;

/// Why a run has no step to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The trigger branch is not part of the managed chain
    NotInHierarchy,
    /// The trigger branch is the last element; nothing downstream remains
    EndOfChain,
}

impl std::fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInHierarchy => write!(f, "not part of the cascade"),
            Self::EndOfChain => write!(f, "the end of the cascade"),
        }
    }
}

/// The one adjacent step a run should attempt, or the reason there is none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDecision {
    /// Merge the trigger branch into its downstream neighbor
    Cascade(CascadeStep),
    /// Nothing to do; this is an expected outcome, not an error
    NoOp(NoOpReason),
}

/// Locate the trigger branch in the hierarchy and derive the next hop.
///
/// A branch outside the chain (a feature branch, say) and the chain's last
/// element both yield a no-op.
pub fn determine_step(hierarchy: &Hierarchy, trigger_branch: &str) -> StepDecision {
    let Some(position) = hierarchy.position(trigger_branch) else {
        return StepDecision::NoOp(NoOpReason::NotInHierarchy);
    };

    hierarchy.get(position + 1).map_or(
        StepDecision::NoOp(NoOpReason::EndOfChain),
        |target| {
            StepDecision::Cascade(CascadeStep {
                source: trigger_branch.to_string(),
                target: target.to_string(),
            })
        },
    )
}
