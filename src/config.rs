//! Run configuration and message templating
//!
//! A `Configuration` is built once per run from the action's inputs and is
//! read-only afterwards. Validation happens before the first host call.

use crate::error::{Error, Result};
use crate::types::CascadeStep;

/// Placeholder for the merge source in message templates
pub const SOURCE_PLACEHOLDER: &str = "{source_branch}";
/// Placeholder for the merge target in message templates
pub const TARGET_PLACEHOLDER: &str = "{target_branch}";

/// Immutable per-run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Production branch, always the head of the hierarchy
    pub production_branch: String,
    /// Development branch, always the tail of the hierarchy when set
    pub development_branch: Option<String>,
    /// Prefix identifying release branches (e.g. `release/`)
    pub release_pattern: String,
    /// Commit message template for direct merges
    pub merge_message_template: String,
    /// Title template for fallback review requests
    pub review_title_template: String,
    /// Open a review request when a direct merge is rejected
    pub open_review_on_failed_merge: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            production_branch: "master".to_string(),
            development_branch: None,
            release_pattern: "release/".to_string(),
            merge_message_template: format!(
                "Auto Merged {SOURCE_PLACEHOLDER} into {TARGET_PLACEHOLDER}"
            ),
            review_title_template: format!(
                "Failed Auto Merged {SOURCE_PLACEHOLDER} into {TARGET_PLACEHOLDER}"
            ),
            open_review_on_failed_merge: true,
        }
    }
}

impl Configuration {
    /// Check that every input is usable.
    ///
    /// Runs before the host is queried; a failure here aborts the run.
    pub fn validate(&self) -> Result<()> {
        if self.production_branch.is_empty() {
            return Err(Error::Config("production branch must not be empty".into()));
        }
        if self.release_pattern.is_empty() {
            return Err(Error::Config("release pattern must not be empty".into()));
        }
        if self.merge_message_template.is_empty() {
            return Err(Error::Config("merge message template must not be empty".into()));
        }
        if self.open_review_on_failed_merge && self.review_title_template.is_empty() {
            return Err(Error::Config("review title template must not be empty".into()));
        }
        Ok(())
    }

    /// Render the merge commit message for a step
    pub fn merge_message(&self, step: &CascadeStep) -> String {
        render_template(&self.merge_message_template, step)
    }

    /// Render the fallback review-request title for a step
    pub fn review_title(&self, step: &CascadeStep) -> String {
        render_template(&self.review_title_template, step)
    }
}

/// Substitute the two step placeholders into `template`.
///
/// Only `{source_branch}` and `{target_branch}` are recognized; anything
/// else passes through verbatim.
pub fn render_template(template: &str, step: &CascadeStep) -> String {
    template
        .replace(SOURCE_PLACEHOLDER, &step.source)
        .replace(TARGET_PLACEHOLDER, &step.target)
}

/// Interpret a yes/no action input ("yes", "true", "1" and "on" are truthy).
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}
