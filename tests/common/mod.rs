//! Shared fixtures for downstream-cascade tests

#![allow(dead_code)]

mod mock_host;

pub use mock_host::{MergeCall, MockHostClient, ReviewCall};

use downstream_cascade::config::Configuration;
use downstream_cascade::types::{Branch, RepoIdentity};

/// The repository every test run operates on
pub fn repo_id() -> RepoIdentity {
    RepoIdentity {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
    }
}

/// A representative branch set: production, development, valid and invalid
/// release names, and an unrelated feature branch.
pub fn sample_branch_names() -> Vec<&'static str> {
    vec![
        "develop",
        "master",
        "release/1.2.1-beta1",
        "release/1.0.0-RC1",
        "release/1.0.0",
        "release/1.1.0",
        "release/1.2.2",
        "release/1.2",
        "release/1.11.0",
        "release/old_0.0.1",
        "feature/abc",
    ]
}

/// Branch structs for the sample set
pub fn sample_branches() -> Vec<Branch> {
    sample_branch_names().into_iter().map(Branch::new).collect()
}

/// Configuration matching the sample set: master -> releases -> develop
pub fn test_config() -> Configuration {
    Configuration {
        development_branch: Some("develop".to_string()),
        ..Configuration::default()
    }
}
