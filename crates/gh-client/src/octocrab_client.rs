//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Every method maps to exactly one REST call.

use crate::client::GitHubClient;
use crate::error::TransportError;
use crate::types::{GithubRepo, GithubUser};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

/// Query parameters for the repository listing endpoint
#[derive(Debug, Serialize)]
struct RepoPageParams {
    per_page: u8,
    page: u32,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create a client talking to `base_url`
    ///
    /// Requests are anonymous unless a personal access token is given.
    pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self, TransportError> {
        let mut builder = Octocrab::builder().base_uri(base_url)?;
        if let Some(token) = token {
            debug!("Authenticating with personal access token");
            builder = builder.personal_token(token);
        }
        Ok(Self::new(Arc::new(builder.build()?)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_user(&self, login: &str) -> Result<GithubUser, TransportError> {
        debug!("Fetching user {}", login);

        let route = user_route(login);
        let user: GithubUser = self.octocrab.get(route, None::<&()>).await?;

        Ok(user)
    }

    async fn fetch_repositories_page(
        &self,
        login: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<GithubRepo>, TransportError> {
        debug!("Fetching repositories of {} (page {})", login, page);

        let route = repos_route(login);
        let params = RepoPageParams { per_page, page };
        let repos: Vec<GithubRepo> = self.octocrab.get(route, Some(&params)).await?;

        debug!(
            "Fetched {} repositories of {} (page {})",
            repos.len(),
            login,
            page
        );
        Ok(repos)
    }
}

// The login is a single path segment; `/`, `?` and `#` must not change the route
fn user_route(login: &str) -> String {
    format!("/users/{}", urlencoding::encode(login))
}

fn repos_route(login: &str) -> String {
    format!("/users/{}/repos", urlencoding::encode(login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(user_route("octocat"), "/users/octocat");
        assert_eq!(repos_route("octocat"), "/users/octocat/repos");
    }

    #[test]
    fn test_routes_encode_login() {
        assert_eq!(user_route("foo/repos"), "/users/foo%2Frepos");
        assert_eq!(repos_route("a?x=1"), "/users/a%3Fx%3D1/repos");
        assert_eq!(user_route("a#b"), "/users/a%23b");
        assert_eq!(user_route("dash-ok_1.2"), "/users/dash-ok_1.2");
    }

    #[test]
    fn test_page_params_serialize() {
        let params = RepoPageParams {
            per_page: 100,
            page: 3,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"per_page": 100, "page": 3}));
    }

    #[tokio::test]
    async fn test_with_base_url() {
        let client = OctocrabClient::with_base_url("https://ghe.example.com/api/v3", None).unwrap();
        let _ = client.octocrab();
    }

    #[tokio::test]
    async fn test_with_token() {
        let client =
            OctocrabClient::with_base_url("https://api.github.com", Some("ghp_test".to_string()));
        assert!(client.is_ok());
    }

    #[test]
    fn test_with_invalid_base_url() {
        assert!(OctocrabClient::with_base_url("not a url", None).is_err());
    }
}
