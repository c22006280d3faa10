//! Repository model
//!
//! Domain model for a user's public GitHub repository.

use chrono::DateTime;
use gh_client::GithubRepo;

/// A public repository of the looked-up user
///
/// `id` is the stable identity, unique per owner.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// ISO-8601 timestamp, or empty when unknown
    pub updated_at: String,
    pub stargazers: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
}

impl Repository {
    /// Last update rendered as e.g. "Jun 15, 2024 at 10:30"
    ///
    /// The timestamp keeps the offset it was reported in. Returns `None`
    /// when `updated_at` is empty or not valid RFC 3339.
    pub fn formatted_updated_at(&self) -> Option<String> {
        DateTime::parse_from_rfc3339(&self.updated_at)
            .ok()
            .map(|ts| ts.format("%b %d, %Y at %H:%M").to_string())
    }
}

impl From<GithubRepo> for Repository {
    fn from(repo: GithubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name.unwrap_or_default(),
            description: repo.description.unwrap_or_default(),
            updated_at: repo.updated_at.unwrap_or_default(),
            stargazers: repo.stargazers_count.unwrap_or(0),
            forks: repo.forks.unwrap_or(0),
            watchers: repo.watchers_count.unwrap_or(0),
            open_issues: repo.open_issues_count.unwrap_or(0),
        }
    }
}
