//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::error::TransportError;
use crate::types::{GithubRepo, GithubUser};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Each method performs exactly one network call. Implementations must not
/// retry or paginate; both are the caller's concern.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, GithubRepo, TransportError};
///
/// async fn first_page(client: &dyn GitHubClient) -> Result<Vec<GithubRepo>, TransportError> {
///     client.fetch_repositories_page("octocat", 1, 100).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public profile of a user
    ///
    /// # Arguments
    ///
    /// * `login` - GitHub username
    async fn fetch_user(&self, login: &str) -> Result<GithubUser, TransportError>;

    /// Fetch one page of a user's repositories
    ///
    /// # Arguments
    ///
    /// * `login` - GitHub username
    /// * `page` - 1-based page number
    /// * `per_page` - Requested page size
    ///
    /// # Returns
    ///
    /// The raw page, private entries included. A page shorter than
    /// `per_page` is the last one.
    async fn fetch_repositories_page(
        &self,
        login: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<GithubRepo>, TransportError>;
}
