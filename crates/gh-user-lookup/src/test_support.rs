//! Scripted GitHub client for tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gh_client::{GitHubClient, GithubRepo, GithubUser, TransportError};

/// How one page answers
#[derive(Debug, Clone)]
enum PageScript {
    /// Fails `failures` times, then returns `repos`
    Flaky { failures: u32, repos: Vec<GithubRepo> },
    /// Fails on every attempt
    Down,
}

#[derive(Debug, Clone, Default)]
struct LoginScript {
    user: Option<Result<GithubUser, TransportError>>,
    user_delay: Duration,
    pages: Vec<PageScript>,
    page_delay: Duration,
}

/// Mock client answering from per-login scripts
///
/// Unknown users fail with a 404-style error, pages beyond the script come
/// back empty.
#[derive(Debug, Default)]
pub struct MockClient {
    scripts: HashMap<String, LoginScript>,
    user_calls: Mutex<HashMap<String, u32>>,
    page_attempts: Mutex<HashMap<(String, u32), u32>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&mut self, login: &str) -> &mut LoginScript {
        self.scripts.entry(login.to_string()).or_default()
    }

    pub fn with_user(mut self, login: &str, name: &str) -> Self {
        self.script(login).user = Some(Ok(GithubUser {
            name: Some(name.to_string()),
            avatar_url: Some(format!("https://avatars.example/{}", login)),
        }));
        self
    }

    pub fn with_user_error(mut self, login: &str, message: &str) -> Self {
        self.script(login).user = Some(Err(TransportError::new(message)));
        self
    }

    pub fn with_user_delay(mut self, login: &str, delay: Duration) -> Self {
        self.script(login).user_delay = delay;
        self
    }

    /// Append a page that succeeds on the first attempt
    pub fn with_page(self, login: &str, repos: Vec<GithubRepo>) -> Self {
        self.with_flaky_page(login, 0, repos)
    }

    /// Append a page that fails `failures` times before succeeding
    pub fn with_flaky_page(mut self, login: &str, failures: u32, repos: Vec<GithubRepo>) -> Self {
        self.script(login)
            .pages
            .push(PageScript::Flaky { failures, repos });
        self
    }

    /// Append a page that never succeeds
    pub fn with_failing_page(mut self, login: &str) -> Self {
        self.script(login).pages.push(PageScript::Down);
        self
    }

    pub fn with_page_delay(mut self, login: &str, delay: Duration) -> Self {
        self.script(login).page_delay = delay;
        self
    }

    pub fn user_calls(&self, login: &str) -> u32 {
        self.user_calls
            .lock()
            .unwrap()
            .get(login)
            .copied()
            .unwrap_or(0)
    }

    pub fn page_attempts(&self, login: &str, page: u32) -> u32 {
        self.page_attempts
            .lock()
            .unwrap()
            .get(&(login.to_string(), page))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        let users: u32 = self.user_calls.lock().unwrap().values().sum();
        let pages: u32 = self.page_attempts.lock().unwrap().values().sum();
        users + pages
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn fetch_user(&self, login: &str) -> Result<GithubUser, TransportError> {
        *self
            .user_calls
            .lock()
            .unwrap()
            .entry(login.to_string())
            .or_insert(0) += 1;

        let script = self.scripts.get(login).cloned().unwrap_or_default();
        if !script.user_delay.is_zero() {
            tokio::time::sleep(script.user_delay).await;
        }

        script
            .user
            .unwrap_or_else(|| Err(TransportError::new("GitHub API error (404 Not Found): Not Found")))
    }

    async fn fetch_repositories_page(
        &self,
        login: &str,
        page: u32,
        _per_page: u8,
    ) -> Result<Vec<GithubRepo>, TransportError> {
        let attempt = {
            let mut attempts = self.page_attempts.lock().unwrap();
            let count = attempts.entry((login.to_string(), page)).or_insert(0);
            *count += 1;
            *count
        };

        let script = self.scripts.get(login).cloned().unwrap_or_default();
        if !script.page_delay.is_zero() {
            tokio::time::sleep(script.page_delay).await;
        }

        match script.pages.get(page as usize - 1) {
            None => Ok(Vec::new()),
            Some(PageScript::Down) => Err(TransportError::new("HTTP 503 Service Unavailable")),
            Some(PageScript::Flaky { failures, .. }) if attempt <= *failures => {
                Err(TransportError::new("connection reset by peer"))
            }
            Some(PageScript::Flaky { repos, .. }) => Ok(repos.clone()),
        }
    }
}

/// A raw repository with the given fork count and visibility
pub fn raw_repo(id: u64, forks: u64, private: bool) -> GithubRepo {
    GithubRepo {
        id,
        name: Some(format!("repo-{}", id)),
        description: Some(format!("Repository number {}", id)),
        updated_at: Some("2024-06-15T10:30:00Z".to_string()),
        stargazers_count: Some(id),
        forks: Some(forks),
        watchers_count: Some(id),
        open_issues_count: Some(0),
        private: Some(private),
    }
}

/// `count` public repositories with consecutive ids starting at `first_id`
pub fn public_repos(first_id: u64, count: u64) -> Vec<GithubRepo> {
    (first_id..first_id + count)
        .map(|id| raw_repo(id, 1, false))
        .collect()
}
