//! GitHub host client implementation

use crate::error::{Error, Result};
use crate::host::HostClient;
use crate::types::{Branch, RepoIdentity, ReviewRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GitHub host using octocrab
pub struct GitHubHost {
    client: Octocrab,
    repo: RepoIdentity,
    /// Token for raw HTTP requests (branch-merge endpoint)
    token: String,
    /// HTTP client for raw requests (branch-merge endpoint)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubHost {
    /// Create a new GitHub host client
    pub fn new(token: &str, repo: RepoIdentity) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::Host(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("downstream-cascade")
            .build()
            .map_err(|e| Error::Host(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            repo,
            token: token.to_string(),
            http_client,
            api_host: "api.github.com".to_string(),
        })
    }
}

/// Extract the `message` field from a GitHub error body, falling back to
/// the raw body when it is not the usual JSON shape.
fn rejection_reason(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    serde_json::from_str::<ApiError>(body)
        .map_or_else(|_| body.trim().to_string(), |err| err.message)
}

#[async_trait]
impl HostClient for GitHubHost {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        debug!(repo = %self.repo, "listing branches");

        let page = self
            .client
            .repos(&self.repo.owner, &self.repo.repo)
            .list_branches()
            .per_page(100)
            .send()
            .await?;
        let branches = self.client.all_pages(page).await?;

        let result: Vec<Branch> = branches
            .into_iter()
            .map(|branch| Branch { name: branch.name })
            .collect();
        debug!(count = result.len(), "listed branches");
        Ok(result)
    }

    async fn merge_branch(&self, base: &str, head: &str, commit_message: &str) -> Result<()> {
        #[derive(Serialize)]
        struct MergeRequest<'a> {
            base: &'a str,
            head: &'a str,
            commit_message: &'a str,
        }

        debug!(base, head, "merging branch");

        // octocrab has no wrapper for the branch-merge endpoint, so hit it raw.
        let url = format!(
            "https://{}/repos/{}/{}/merges",
            self.api_host, self.repo.owner, self.repo.repo
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&MergeRequest {
                base,
                head,
                commit_message,
            })
            .send()
            .await
            .map_err(|e| Error::Host(format!("merge request failed: {e}")))?;

        let status = response.status();
        // 201 = merge commit created, 204 = base already contains head
        if status.is_success() {
            debug!(base, head, %status, "merged branch");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Host(format!(
            "merge of {head} into {base} rejected ({status}): {}",
            rejection_reason(&body)
        )))
    }

    async fn create_review_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<ReviewRequest> {
        debug!(base, head, "creating review request");

        let pr = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        let result = ReviewRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        };
        debug!(number = result.number, "created review request");
        Ok(result)
    }

    fn repo(&self) -> &RepoIdentity {
        &self.repo
    }
}
