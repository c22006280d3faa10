//! Look up a GitHub user's profile and public repositories
//!
//! The crate turns a search query into two concurrent fetch streams (the
//! user profile and the paginated repository list) and folds their events
//! into one [`ViewState`] owned by a [`Store`].
//!
//! ```text
//! Intent ──► SearchCoordinator ──► GitHubClient::fetch_user ─────────┐
//!                 │                                                   ├─► Action ──► reduce ──► ViewState
//!                 └──────────► PagedFetcher (retry, repo_filter) ─────┘
//! ```
//!
//! A new search supersedes the previous one: its tasks are aborted and any
//! action still tagged with the old request id is dropped by the reducer.

pub mod actions;
pub mod coordinator;
pub mod domain_models;
pub mod error;
pub mod logger;
pub mod paged_fetcher;
pub mod reducer;
pub mod repo_filter;
pub mod retry;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

/// Repositories requested per page; a shorter page is the last one
pub const PAGE_SIZE: u8 = 100;

/// Attempts per page before the repository stream fails
pub const MAX_RETRIES: u32 = 3;

/// Delay before the first retry of a page
pub const INITIAL_BACKOFF_MS: u64 = 2_000;

/// Upper bound for any retry delay
pub const MAX_BACKOFF_MS: u64 = 16_000;

/// Total forks above which a user earns the star badge
pub const STAR_BADGE_THRESHOLD: u64 = 5_000;

pub use actions::{Action, Intent, RequestId, SideEffect};
pub use coordinator::SearchCoordinator;
pub use domain_models::{FetchOutcome, LoadingState, Repository, UserProfile};
pub use error::RepoFetchError;
pub use paged_fetcher::PagedFetcher;
pub use retry::RetryPolicy;
pub use state::ViewState;
pub use store::Store;
