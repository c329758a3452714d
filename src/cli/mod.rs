//! CLI surface for the `cascade` binary
//!
//! Every flag is backed by the environment variable a workflow run would
//! set (`GITHUB_*` context, `INPUT_*` action inputs), so the binary works
//! both as an action step and from a shell.

mod run;

pub use run::run;

use clap::Parser;
use downstream_cascade::config::{Configuration, parse_flag};
use std::path::PathBuf;

/// Cascades merges down a chain of versioned release branches
#[derive(Debug, Parser)]
#[command(name = "cascade", version, about)]
pub struct Cli {
    /// Repository the run operates on, as "owner/name"
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Fully qualified git ref that triggered the run
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: String,

    /// API token used to authenticate against the host
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Production branch at the head of the cascade
    #[arg(long, env = "INPUT_PRODUCTION-BRANCH", default_value = "master")]
    pub production_branch: String,

    /// Development branch at the tail of the cascade (empty = none)
    #[arg(long, env = "INPUT_DEVELOPMENT-BRANCH", default_value = "")]
    pub development_branch: String,

    /// Prefix identifying release branches
    #[arg(long, env = "INPUT_RELEASE-PATTERN", default_value = "release/")]
    pub release_pattern: String,

    /// Merge commit message; {source_branch} and {target_branch} are substituted
    #[arg(
        long,
        env = "INPUT_MERGE-MESSAGE-TEMPLATE",
        default_value = "Auto Merged {source_branch} into {target_branch}"
    )]
    pub merge_message_template: String,

    /// Review request title; same placeholders as the merge message
    #[arg(
        long,
        env = "INPUT_PR-TITLE-TEMPLATE",
        default_value = "Failed Auto Merged {source_branch} into {target_branch}"
    )]
    pub review_title_template: String,

    /// Open a review request when a direct merge fails ("yes"/"no")
    #[arg(long, env = "INPUT_PR-ON-FAILED-MERGE", default_value = "yes")]
    pub review_on_failed_merge: String,

    /// Step-output file the run summary is appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_path: Option<PathBuf>,
}

impl Cli {
    /// Turn the raw inputs into the run configuration
    pub fn configuration(&self) -> Configuration {
        Configuration {
            production_branch: self.production_branch.clone(),
            development_branch: (!self.development_branch.is_empty())
                .then(|| self.development_branch.clone()),
            release_pattern: self.release_pattern.clone(),
            merge_message_template: self.merge_message_template.clone(),
            review_title_template: self.review_title_template.clone(),
            open_review_on_failed_merge: parse_flag(&self.review_on_failed_merge),
        }
    }
}
