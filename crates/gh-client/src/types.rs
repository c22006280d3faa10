//! GitHub API data transfer objects
//!
//! These types mirror the JSON returned by the GitHub REST API. Almost every
//! field is optional on the wire; mapping to non-null domain values is left
//! to the application so this crate stays pure and reusable.

use serde::{Deserialize, Serialize};

/// A user profile from `GET /users/{login}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    /// Display name (often unset)
    #[serde(default)]
    pub name: Option<String>,

    /// URL of the avatar image
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A repository entry from `GET /users/{login}/repos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepo {
    /// Repository ID, unique per owner
    pub id: u64,

    /// Repository name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// ISO-8601 timestamp of the last update
    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub stargazers_count: Option<u64>,

    #[serde(default)]
    pub forks: Option<u64>,

    #[serde(default)]
    pub watchers_count: Option<u64>,

    #[serde(default)]
    pub open_issues_count: Option<u64>,

    /// Whether the repository is private
    #[serde(default)]
    pub private: Option<bool>,
}

impl GithubRepo {
    /// A repository counts as private only when the API says so explicitly
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(false)
    }
}
