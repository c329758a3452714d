//! Cascade execution - effectful operations
//!
//! Takes the step decided by the pure planning function and performs it via
//! the host client, falling back to a review request when the direct merge
//! is rejected.

use crate::config::Configuration;
use crate::error::Result;
use crate::host::HostClient;
use crate::types::{ActionResult, CascadeStep};
use tracing::{debug, warn};

/// Perform one cascade step.
///
/// The merge commit message and review title are rendered from the
/// configured templates. A rejected merge is never retried: it is either
/// escalated to a review request (when enabled) or recorded as failed.
/// Both outcomes are ordinary results; only the caller decides whether a
/// failed action is fatal for the run.
pub async fn execute_step(
    step: &CascadeStep,
    config: &Configuration,
    host: &dyn HostClient,
) -> Result<ActionResult> {
    let commit_message = config.merge_message(step);
    debug!(source = %step.source, target = %step.target, "attempting direct merge");

    let merge_error = match host
        .merge_branch(&step.target, &step.source, &commit_message)
        .await
    {
        Ok(()) => {
            return Ok(ActionResult::Merged { step: step.clone() });
        }
        Err(e) => e,
    };

    warn!(source = %step.source, target = %step.target, %merge_error, "direct merge rejected");

    if !config.open_review_on_failed_merge {
        return Ok(ActionResult::Failed {
            step: step.clone(),
            reason: merge_error.to_string(),
        });
    }

    let title = config.review_title(step);
    let body = format!(
        "Automatic merge of `{}` into `{}` was rejected:\n\n> {merge_error}\n\n\
         Resolve the conflict and merge this review request to continue the cascade.",
        step.source, step.target
    );

    match host
        .create_review_request(&step.target, &step.source, &title, &body)
        .await
    {
        Ok(review) => Ok(ActionResult::ReviewRequested {
            step: step.clone(),
            review,
        }),
        Err(review_error) => {
            warn!(source = %step.source, target = %step.target, %review_error, "review request failed");
            Ok(ActionResult::Failed {
                step: step.clone(),
                reason: format!(
                    "merge rejected ({merge_error}); review request failed ({review_error})"
                ),
            })
        }
    }
}
