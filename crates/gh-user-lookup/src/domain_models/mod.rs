//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from the wire types in `gh_client`.

pub mod fetch_outcome;
pub mod repository;
pub mod user_profile;

pub use fetch_outcome::{FetchOutcome, LoadingState};
pub use repository::Repository;
pub use user_profile::UserProfile;
