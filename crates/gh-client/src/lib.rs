//! GitHub API client for user lookups
//!
//! This crate provides a trait-based GitHub API client covering the two
//! calls a user lookup needs: the public profile and one page of the
//! user's repositories. Each call is a single request; pagination and
//! retry belong to the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_user()                                  │
//! │  - fetch_repositories_page()                     │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let octocrab = octocrab::Octocrab::builder().build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab));
//!
//! let user = client.fetch_user("octocat").await?;
//! let first_page = client.fetch_repositories_page("octocat", 1, 100).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use error::TransportError;
pub use octocrab_client::OctocrabClient;
pub use types::{GithubRepo, GithubUser};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
