//! Reducer
//!
//! Pure function from `(ViewState, Action)` to the next `ViewState`.
//! Outcomes tagged with anything other than the live request id are
//! dropped, so a superseded search can never touch the state.

use crate::actions::{Action, RequestId};
use crate::domain_models::{FetchOutcome, LoadingState, Repository, UserProfile};
use crate::state::ViewState;

/// Reduce state based on action
pub fn reduce(mut state: ViewState, action: &Action) -> ViewState {
    match action {
        Action::QueryChanged(query) => {
            state.query = query.clone();
        }

        Action::SearchStarted { request, query } => {
            if *request <= state.request {
                log::debug!(
                    "Ignoring SearchStarted {} (live request is {})",
                    request,
                    state.request
                );
                return state;
            }
            state.request = *request;
            state.login = query.clone();
            state.user = None;
            state.user_state = LoadingState::Loading;
            state.repositories = Vec::new();
            state.repositories_state = LoadingState::Loading;
            state.selected_repo = None;
        }

        Action::User { request, outcome } => {
            if is_stale(&state, *request, "user") {
                return state;
            }
            state = reduce_user(state, outcome);
        }

        Action::Repositories { request, outcome } => {
            if is_stale(&state, *request, "repositories") {
                return state;
            }
            state = reduce_repositories(state, outcome);
        }

        Action::RepositorySelected(repo) => {
            state.selected_repo = Some(repo.clone());
        }

        Action::SelectionCleared => {
            state.selected_repo = None;
        }
    }

    state
}

fn is_stale(state: &ViewState, request: RequestId, stream: &str) -> bool {
    if request != state.request {
        log::debug!(
            "Dropping {} outcome of request {} (live request is {})",
            stream,
            request,
            state.request
        );
        return true;
    }
    false
}

fn reduce_user(mut state: ViewState, outcome: &FetchOutcome<UserProfile>) -> ViewState {
    match outcome {
        FetchOutcome::Loading => state.user_state = LoadingState::Loading,
        FetchOutcome::Success(user) => {
            state.user = Some(user.clone());
            state.user_state = LoadingState::Loaded;
        }
        // previous user data stays untouched
        FetchOutcome::Error(message) => state.user_state = LoadingState::Error(message.clone()),
    }
    state
}

fn reduce_repositories(
    mut state: ViewState,
    outcome: &FetchOutcome<Vec<Repository>>,
) -> ViewState {
    match outcome {
        FetchOutcome::Loading => state.repositories_state = LoadingState::Loading,
        FetchOutcome::Success(snapshot) => {
            // each snapshot is cumulative, replace rather than append
            state.repositories = snapshot.clone();
            state.repositories_state = LoadingState::Loaded;
        }
        FetchOutcome::Error(message) => {
            state.repositories_state = LoadingState::Error(message.clone())
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo(id: u64) -> Repository {
        Repository {
            id,
            name: format!("repo-{}", id),
            ..Default::default()
        }
    }

    fn started(request: RequestId, query: &str) -> ViewState {
        reduce(
            ViewState::default(),
            &Action::SearchStarted {
                request,
                query: query.to_string(),
            },
        )
    }

    #[test]
    fn test_query_changed() {
        let state = reduce(
            ViewState::default(),
            &Action::QueryChanged("octo".to_string()),
        );
        assert_eq!(state.query, "octo");
        assert_eq!(state.request, 0);
    }

    #[test]
    fn test_search_started_resets_both_streams() {
        let previous = ViewState {
            query: "octocat".to_string(),
            request: 1,
            login: "someone".to_string(),
            user: Some(UserProfile {
                name: "Someone".to_string(),
                avatar_url: String::new(),
            }),
            user_state: LoadingState::Error("boom".to_string()),
            repositories: vec![repo(1)],
            repositories_state: LoadingState::Loaded,
            selected_repo: Some(repo(1)),
        };

        let state = reduce(
            previous,
            &Action::SearchStarted {
                request: 2,
                query: "octocat".to_string(),
            },
        );

        assert_eq!(
            state,
            ViewState {
                query: "octocat".to_string(),
                request: 2,
                login: "octocat".to_string(),
                user: None,
                user_state: LoadingState::Loading,
                repositories: Vec::new(),
                repositories_state: LoadingState::Loading,
                selected_repo: None,
            }
        );
    }

    #[test]
    fn test_older_search_started_is_ignored() {
        let state = started(5, "fast");
        let after = reduce(
            state.clone(),
            &Action::SearchStarted {
                request: 4,
                query: "slow".to_string(),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_user_success() {
        let user = UserProfile {
            name: "The Octocat".to_string(),
            avatar_url: "https://avatars.example/octocat".to_string(),
        };
        let state = reduce(
            started(1, "octocat"),
            &Action::User {
                request: 1,
                outcome: FetchOutcome::Success(user.clone()),
            },
        );

        assert_eq!(state.user, Some(user));
        assert_eq!(state.user_state, LoadingState::Loaded);
        assert!(state.is_loading_repositories());
    }

    #[test]
    fn test_user_error_keeps_previous_user() {
        let user = UserProfile {
            name: "The Octocat".to_string(),
            avatar_url: String::new(),
        };
        let mut state = started(1, "octocat");
        state.user = Some(user.clone());

        let state = reduce(
            state,
            &Action::User {
                request: 1,
                outcome: FetchOutcome::Error("Not Found".to_string()),
            },
        );

        assert_eq!(state.user, Some(user));
        assert_eq!(state.user_error(), Some("Not Found"));
        assert!(!state.is_loading_user());
    }

    #[test]
    fn test_repository_snapshots_replace_the_list() {
        let state = started(1, "octocat");
        let state = reduce(
            state,
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Success(vec![repo(1), repo(2)]),
            },
        );
        let state = reduce(
            state,
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Success(vec![repo(1), repo(2), repo(3)]),
            },
        );

        let ids: Vec<u64> = state.repositories.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.repositories_state, LoadingState::Loaded);
    }

    #[test]
    fn test_repository_error_keeps_partial_list() {
        let state = reduce(
            started(1, "octocat"),
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Success(vec![repo(1)]),
            },
        );
        let state = reduce(
            state,
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Error(
                    "Failed to fetch page 2 after 3 retries".to_string(),
                ),
            },
        );

        assert_eq!(state.repositories, vec![repo(1)]);
        assert_eq!(
            state.repositories_error(),
            Some("Failed to fetch page 2 after 3 retries")
        );
    }

    #[test]
    fn test_loading_outcome() {
        let mut state = started(1, "octocat");
        state.user_state = LoadingState::Loaded;
        state.repositories_state = LoadingState::Loaded;

        let state = reduce(
            state,
            &Action::User {
                request: 1,
                outcome: FetchOutcome::Loading,
            },
        );
        let state = reduce(
            state,
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Loading,
            },
        );

        assert!(state.is_loading_user());
        assert!(state.is_loading_repositories());
    }

    #[test]
    fn test_stale_outcomes_are_dropped() {
        let state = started(2, "fast");

        let after = reduce(
            state.clone(),
            &Action::User {
                request: 1,
                outcome: FetchOutcome::Error("slow failed".to_string()),
            },
        );
        let after = reduce(
            after,
            &Action::Repositories {
                request: 1,
                outcome: FetchOutcome::Success(vec![repo(9)]),
            },
        );

        assert_eq!(after, state);
    }

    #[test]
    fn test_outcomes_before_any_search_are_dropped() {
        let state = reduce(
            ViewState::default(),
            &Action::User {
                request: 1,
                outcome: FetchOutcome::Loading,
            },
        );
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_selection() {
        let state = reduce(ViewState::default(), &Action::RepositorySelected(repo(7)));
        assert_eq!(state.selected_repo_id(), Some(7));

        let state = reduce(state, &Action::SelectionCleared);
        assert_eq!(state.selected_repo, None);
    }
}
