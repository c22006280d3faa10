//! Fetch outcomes
//!
//! `FetchOutcome` is what a fetch stream emits; `LoadingState` is what the
//! view keeps per stream once the outcome has been reduced.

/// One event of a fetch stream
///
/// A stream emits `Loading` first, then any number of `Success` values
/// (the repository stream emits one per page) and at most one `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Loading state of one stream in the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// No request issued yet
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Last outcome was a success
    Loaded,
    /// Failed to load
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    /// Error message, if the stream failed
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadingState::Error(message) => Some(message),
            _ => None,
        }
    }
}
