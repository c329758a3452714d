//! Run orchestration - thin I/O glue around the cascade engine

use crate::cli::Cli;
use downstream_cascade::cascade::run_cascade;
use downstream_cascade::error::{Error, Result};
use downstream_cascade::host::GitHubHost;
use downstream_cascade::output::append_step_output;
use downstream_cascade::trigger::TriggerContext;
use downstream_cascade::types::RepoIdentity;

/// Execute one cascade run from the parsed CLI inputs.
///
/// Prints the run summary, mirrors it into the step-output file when one
/// is configured, and maps a failed action to a non-zero exit.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.configuration();
    config.validate()?;

    let repo = RepoIdentity::parse(&cli.repository)?;
    let trigger = TriggerContext::new(repo.clone(), cli.git_ref);
    let host = GitHubHost::new(&cli.token, repo)?;

    let report = run_cascade(&config, &trigger, &host).await?;

    let summary = report.summary();
    println!("{summary}");

    if let Some(ref path) = cli.output_path {
        append_step_output(path, "details", &summary)?;
    }

    if report.succeeded() {
        Ok(())
    } else {
        Err(Error::Host(
            "both the direct merge and the review request failed".to_string(),
        ))
    }
}
