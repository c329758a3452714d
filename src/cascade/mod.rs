//! Cascade engine
//!
//! Three-phase pattern:
//! 1. Gather - list branches from the host (effectful, bounded)
//! 2. Plan - build the hierarchy and decide the step (pure, testable)
//! 3. Execute - perform at most one merge-or-review action (effectful)

mod execute;
mod plan;

pub use execute::execute_step;
pub use plan::{NoOpReason, StepDecision, determine_step};

use crate::config::Configuration;
use crate::error::Result;
use crate::hierarchy::build_hierarchy;
use crate::host::HostClient;
use crate::trigger::TriggerContext;
use crate::types::ActionResult;
use tracing::{debug, info};

/// Result of one cascade run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Ordered log of the actions taken
    pub actions: Vec<ActionResult>,
    /// Set when no cascade step applied to this run
    pub no_op: Option<String>,
}

impl RunReport {
    fn no_op_with(note: String) -> Self {
        Self {
            actions: Vec::new(),
            no_op: Some(note),
        }
    }

    /// Whether the run completed without a failed action
    pub fn succeeded(&self) -> bool {
        !self.actions.iter().any(ActionResult::is_failure)
    }

    /// Human-readable summary of the run, one line per action
    pub fn summary(&self) -> String {
        self.no_op.as_ref().map_or_else(
            || {
                self.actions
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            },
            Clone::clone,
        )
    }
}

/// Run one cascade pass: list branches, build the hierarchy, and perform
/// at most the single adjacent step for the triggering branch.
///
/// Propagation further down the chain happens only when the target
/// branch's own update triggers a later run, so one invocation never
/// merges more than one hop.
pub async fn run_cascade(
    config: &Configuration,
    trigger: &TriggerContext,
    host: &dyn HostClient,
) -> Result<RunReport> {
    config.validate()?;

    let branches = host.list_branches().await?;
    let hierarchy = build_hierarchy(&branches, config)?;
    debug!(%hierarchy, "built branch hierarchy");

    let Some(trigger_branch) = trigger.branch() else {
        info!(git_ref = %trigger.git_ref, "ref does not point at a branch; nothing to do");
        return Ok(RunReport::no_op_with(format!(
            "Ref {} does not point at a branch; nothing to do",
            trigger.git_ref
        )));
    };

    match determine_step(&hierarchy, trigger_branch) {
        StepDecision::NoOp(reason) => {
            info!(branch = trigger_branch, %reason, "no cascade step applies");
            Ok(RunReport::no_op_with(format!(
                "Branch {trigger_branch} is {reason}; nothing to do"
            )))
        }
        StepDecision::Cascade(step) => {
            let action = execute_step(&step, config, host).await?;
            info!(%action, "cascade step finished");
            Ok(RunReport {
                actions: vec![action],
                no_op: None,
            })
        }
    }
}
