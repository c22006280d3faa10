//! Search coordination
//!
//! Every search owns two tasks, one for the user profile and one for the
//! repository stream. Starting a new search aborts both tasks of the
//! previous one and moves the store to the new request id, after which the
//! reducer rejects anything the old tasks still manage to dispatch.

use std::fmt::Display;
use std::sync::{Arc, Mutex, PoisonError};

use futures::StreamExt;
use gh_client::GitHubClient;
use tokio::sync::{mpsc, watch};
use tokio::task::AbortHandle;

use crate::actions::{Action, Intent, RequestId, SideEffect};
use crate::domain_models::{FetchOutcome, Repository, UserProfile};
use crate::paged_fetcher::PagedFetcher;
use crate::store::Store;

const USER_FETCH_FAILED: &str = "Failed to fetch user info";
const REPOSITORIES_FETCH_FAILED: &str = "Failed to fetch repositories";

/// Number of tasks spawned per search
const TASKS_PER_REQUEST: usize = 2;

/// Turns intents into fetches and owns the live search request
pub struct SearchCoordinator {
    client: Arc<dyn GitHubClient>,
    fetcher: PagedFetcher,
    store: Store,
    requests: Mutex<Requests>,
    effects_tx: mpsc::UnboundedSender<SideEffect>,
    effects_rx: Mutex<Option<mpsc::UnboundedReceiver<SideEffect>>>,
}

#[derive(Default)]
struct Requests {
    last_id: RequestId,
    live: Option<LiveRequest>,
}

struct LiveRequest {
    id: RequestId,
    tasks: Vec<AbortHandle>,
    finished: watch::Receiver<usize>,
}

impl LiveRequest {
    fn cancel(&self) {
        log::debug!("Cancelling request {}", self.id);
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Binds a task's dispatches to the request it was spawned for
#[derive(Clone)]
struct RequestScope {
    id: RequestId,
    store: Store,
}

impl RequestScope {
    fn is_live(&self) -> bool {
        self.store.live_request() == self.id
    }

    /// Returns false once the request has been superseded
    fn emit(&self, action: Action) -> bool {
        if !self.is_live() {
            log::debug!("Request {} superseded, dropping {}", self.id, action.summary());
            return false;
        }
        self.store.dispatch(action);
        true
    }

    fn user(&self, outcome: FetchOutcome<UserProfile>) -> bool {
        self.emit(Action::User {
            request: self.id,
            outcome,
        })
    }

    fn repositories(&self, outcome: FetchOutcome<Vec<Repository>>) -> bool {
        self.emit(Action::Repositories {
            request: self.id,
            outcome,
        })
    }
}

/// Counts a task as finished when dropped, which also covers aborts
struct Completion(Arc<watch::Sender<usize>>);

impl Drop for Completion {
    fn drop(&mut self) {
        self.0.send_modify(|finished| *finished += 1);
    }
}

impl SearchCoordinator {
    pub fn new(client: Arc<dyn GitHubClient>, store: Store) -> Self {
        let (effects_tx, effects_rx) = mpsc::unbounded_channel();
        Self {
            fetcher: PagedFetcher::new(Arc::clone(&client)),
            client,
            store,
            requests: Mutex::new(Requests::default()),
            effects_tx,
            effects_rx: Mutex::new(Some(effects_rx)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handle an intent from the presentation layer
    pub fn handle(&self, intent: Intent) {
        match intent {
            Intent::QueryChanged(query) => self.store.dispatch(Action::QueryChanged(query)),
            Intent::SearchPressed => {
                let query = self.store.state().query;
                self.start_search(&query);
            }
            Intent::RepoSelected(repo) => self.select_repo(repo),
            Intent::ClearSelection => self.clear_selected_repo(),
        }
    }

    /// Start searching for `query`, superseding any running search
    ///
    /// Returns the new request id, or `None` when the trimmed query is
    /// empty. Must be called from within a Tokio runtime.
    pub fn start_search(&self, query: &str) -> Option<RequestId> {
        let login = query.trim();
        if login.is_empty() {
            log::debug!("Ignoring blank search query");
            return None;
        }

        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = requests.live.take() {
            previous.cancel();
        }

        requests.last_id += 1;
        let id = requests.last_id;
        log::info!("Starting search {} for {}", id, login);

        self.store.dispatch(Action::SearchStarted {
            request: id,
            query: login.to_string(),
        });

        let (finished_tx, finished) = watch::channel(0);
        let finished_tx = Arc::new(finished_tx);
        let scope = RequestScope {
            id,
            store: self.store.clone(),
        };

        let user_task = tokio::spawn(fetch_user(
            Arc::clone(&self.client),
            login.to_string(),
            scope.clone(),
            Completion(Arc::clone(&finished_tx)),
        ));
        let repos_task = tokio::spawn(fetch_repositories(
            self.fetcher.clone(),
            login.to_string(),
            scope,
            Completion(finished_tx),
        ));

        requests.live = Some(LiveRequest {
            id,
            tasks: vec![user_task.abort_handle(), repos_task.abort_handle()],
            finished,
        });

        Some(id)
    }

    /// Select a repository and ask the presentation layer to show it
    pub fn select_repo(&self, repo: Repository) {
        let repo_id = repo.id;
        self.store.dispatch(Action::RepositorySelected(repo));

        if self
            .effects_tx
            .send(SideEffect::NavigateToDetail { repo_id })
            .is_err()
        {
            log::debug!("No side effect receiver, navigation to {} dropped", repo_id);
        }
    }

    pub fn clear_selected_repo(&self) {
        self.store.dispatch(Action::SelectionCleared);
    }

    /// Take the side effect receiver
    ///
    /// Only the first call gets it; later calls return `None`.
    pub fn side_effects(&self) -> Option<mpsc::UnboundedReceiver<SideEffect>> {
        self.effects_rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Id of the live request, if a search was started
    pub fn live_request(&self) -> Option<RequestId> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .as_ref()
            .map(|live| live.id)
    }

    /// Wait until both tasks of the request live at call time are done
    ///
    /// Returns immediately when no search was started.
    pub async fn settled(&self) {
        let finished = self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .as_ref()
            .map(|live| live.finished.clone());

        if let Some(mut finished) = finished {
            let _ = finished.wait_for(|n| *n >= TASKS_PER_REQUEST).await;
        }
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        let requests = self.requests.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(live) = requests.live.take() {
            live.cancel();
        }
    }
}

async fn fetch_user(
    client: Arc<dyn GitHubClient>,
    login: String,
    scope: RequestScope,
    _completion: Completion,
) {
    if !scope.user(FetchOutcome::Loading) {
        return;
    }

    match client.fetch_user(&login).await {
        Ok(user) => {
            log::debug!("Fetched user {}", login);
            scope.user(FetchOutcome::Success(UserProfile::from(user)));
        }
        Err(err) => {
            log::error!("Failed to fetch user {}: {}", login, err);
            scope.user(FetchOutcome::Error(non_empty_or(err.message(), USER_FETCH_FAILED)));
        }
    }
}

async fn fetch_repositories(
    fetcher: PagedFetcher,
    login: String,
    scope: RequestScope,
    _completion: Completion,
) {
    if !scope.repositories(FetchOutcome::Loading) {
        return;
    }

    let stream = fetcher.stream(&login);
    futures::pin_mut!(stream);

    while let Some(item) = stream.next().await {
        let outcome = match item {
            Ok(snapshot) => FetchOutcome::Success(snapshot),
            Err(err) => FetchOutcome::Error(non_empty_or(&err, REPOSITORIES_FETCH_FAILED)),
        };
        if !scope.repositories(outcome) {
            return;
        }
    }

    log::info!(
        "Repository stream of {} finished (request {})",
        login,
        scope.id
    );
}

fn non_empty_or(err: impl Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
