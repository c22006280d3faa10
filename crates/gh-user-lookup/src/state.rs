//! View state
//!
//! The immutable snapshot the presentation layer renders. It is only ever
//! produced by `reducer::reduce`.

use crate::actions::RequestId;
use crate::domain_models::{LoadingState, Repository, UserProfile};
use crate::STAR_BADGE_THRESHOLD;

/// State of the lookup screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Text currently in the search field
    pub query: String,
    /// Live request, 0 before the first search
    pub request: RequestId,
    /// Trimmed login the live request searches for
    pub login: String,
    pub user: Option<UserProfile>,
    pub user_state: LoadingState,
    /// Latest cumulative snapshot of the repository stream
    pub repositories: Vec<Repository>,
    pub repositories_state: LoadingState,
    /// Repository shown in the detail view
    pub selected_repo: Option<Repository>,
}

impl ViewState {
    pub fn selected_repo_id(&self) -> Option<u64> {
        self.selected_repo.as_ref().map(|repo| repo.id)
    }

    pub fn is_loading_user(&self) -> bool {
        self.user_state.is_loading()
    }

    pub fn user_error(&self) -> Option<&str> {
        self.user_state.error()
    }

    pub fn is_loading_repositories(&self) -> bool {
        self.repositories_state.is_loading()
    }

    pub fn repositories_error(&self) -> Option<&str> {
        self.repositories_state.error()
    }

    /// Sum of forks over the current repository list
    pub fn total_forks(&self) -> u64 {
        self.repositories.iter().map(|repo| repo.forks).sum()
    }

    /// Awarded strictly above `STAR_BADGE_THRESHOLD` total forks
    pub fn has_star_badge(&self) -> bool {
        self.total_forks() > STAR_BADGE_THRESHOLD
    }
}
