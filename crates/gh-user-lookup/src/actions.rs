//! Actions module
//!
//! Three kinds of messages cross the boundaries of the crate:
//! - `Intent`: what the presentation layer asks for
//! - `Action`: the only input of the reducer
//! - `SideEffect`: one-shot notifications back to the presentation layer

use crate::domain_models::{FetchOutcome, Repository, UserProfile};

/// Identifies one search request; a larger id supersedes a smaller one
pub type RequestId = u64;

/// User intents forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The search field was edited
    QueryChanged(String),
    /// The search button was pressed
    SearchPressed,
    /// A repository in the list was picked
    RepoSelected(Repository),
    /// The detail view was left
    ClearSelection,
}

/// Root action enum, reduced into `ViewState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw query text changed
    QueryChanged(String),
    /// A new request became live; resets both streams
    SearchStarted { request: RequestId, query: String },
    /// Outcome of the user profile stream
    User {
        request: RequestId,
        outcome: FetchOutcome<UserProfile>,
    },
    /// Outcome of the repository stream (cumulative snapshot on success)
    Repositories {
        request: RequestId,
        outcome: FetchOutcome<Vec<Repository>>,
    },
    /// A repository was selected for the detail view
    RepositorySelected(Repository),
    /// The selection was cleared
    SelectionCleared,
}

impl Action {
    /// Compact description for logs (snapshots can hold hundreds of entries)
    pub fn summary(&self) -> String {
        match self {
            Action::Repositories {
                request,
                outcome: FetchOutcome::Success(repos),
            } => format!(
                "Repositories {{ request: {}, outcome: Success({} repositories) }}",
                request,
                repos.len()
            ),
            other => format!("{:?}", other),
        }
    }
}

/// One-shot notifications; never replayed to late subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    NavigateToDetail { repo_id: u64 },
}
