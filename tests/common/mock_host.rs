//! Mock host client for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use downstream_cascade::error::{Error, Result};
use downstream_cascade::host::HostClient;
use downstream_cascade::types::{Branch, RepoIdentity, ReviewRequest};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `merge_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub base: String,
    pub head: String,
    pub commit_message: String,
}

/// Call record for `create_review_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCall {
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
}

/// Simple mock host client for testing
///
/// Features:
/// - Configurable branch listing
/// - Auto-incrementing review-request numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockHostClient {
    repo: RepoIdentity,
    branches: Mutex<Vec<Branch>>,
    next_review_number: AtomicU64,
    // Call tracking
    list_branches_calls: Mutex<u64>,
    merge_calls: Mutex<Vec<MergeCall>>,
    review_calls: Mutex<Vec<ReviewCall>>,
    // Error injection
    error_on_list_branches: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
    error_on_review: Mutex<Option<String>>,
}

impl MockHostClient {
    /// Create a new mock for the given repository
    pub fn new(repo: RepoIdentity) -> Self {
        Self {
            repo,
            branches: Mutex::new(Vec::new()),
            next_review_number: AtomicU64::new(1),
            list_branches_calls: Mutex::new(0),
            merge_calls: Mutex::new(Vec::new()),
            review_calls: Mutex::new(Vec::new()),
            error_on_list_branches: Mutex::new(None),
            error_on_merge: Mutex::new(None),
            error_on_review: Mutex::new(None),
        }
    }

    /// Set the branches returned by `list_branches`
    pub fn set_branches(&self, names: &[&str]) {
        *self.branches.lock().unwrap() = names.iter().map(|name| Branch::new(*name)).collect();
    }

    // === Error injection methods ===

    /// Make `list_branches` return an error
    pub fn fail_list_branches(&self, msg: &str) {
        *self.error_on_list_branches.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_branch` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_review_request` return an error
    pub fn fail_review(&self, msg: &str) {
        *self.error_on_review.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Number of times `list_branches` was called
    pub fn list_branches_call_count(&self) -> u64 {
        *self.list_branches_calls.lock().unwrap()
    }

    /// Get all `merge_branch` calls
    pub fn get_merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get all `create_review_request` calls
    pub fn get_review_calls(&self) -> Vec<ReviewCall> {
        self.review_calls.lock().unwrap().clone()
    }

    /// Count of `merge_branch` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Count of `create_review_request` calls
    pub fn review_call_count(&self) -> usize {
        self.review_calls.lock().unwrap().len()
    }

    /// Assert that `merge_branch` was called with specific base and head
    pub fn assert_merge_called(&self, base: &str, head: &str) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.base == base && c.head == head),
            "Expected merge_branch({base}, {head}) but got: {calls:?}"
        );
    }

    /// Assert that `create_review_request` was called with specific base and head
    pub fn assert_review_called(&self, base: &str, head: &str) {
        let calls = self.get_review_calls();
        assert!(
            calls.iter().any(|c| c.base == base && c.head == head),
            "Expected create_review_request({base}, {head}) but got: {calls:?}"
        );
    }

    /// Assert that no merge or review-request call was made
    pub fn assert_no_host_mutation(&self) {
        assert_eq!(self.merge_call_count(), 0, "expected no merge calls");
        assert_eq!(self.review_call_count(), 0, "expected no review calls");
    }
}

#[async_trait]
impl HostClient for MockHostClient {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        *self.list_branches_calls.lock().unwrap() += 1;

        // Check for injected error
        if let Some(msg) = self.error_on_list_branches.lock().unwrap().as_ref() {
            return Err(Error::Host(msg.clone()));
        }

        Ok(self.branches.lock().unwrap().clone())
    }

    async fn merge_branch(&self, base: &str, head: &str, commit_message: &str) -> Result<()> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            base: base.to_string(),
            head: head.to_string(),
            commit_message: commit_message.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::Host(msg.clone()));
        }

        Ok(())
    }

    async fn create_review_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<ReviewRequest> {
        self.review_calls.lock().unwrap().push(ReviewCall {
            base: base.to_string(),
            head: head.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_review.lock().unwrap().as_ref() {
            return Err(Error::Host(msg.clone()));
        }

        let number = self.next_review_number.fetch_add(1, Ordering::SeqCst);
        Ok(ReviewRequest {
            number,
            html_url: format!("https://github.com/{}/pull/{number}", self.repo),
        })
    }

    fn repo(&self) -> &RepoIdentity {
        &self.repo
    }
}
