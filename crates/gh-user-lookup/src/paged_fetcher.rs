//! Paginated repository fetching
//!
//! Pages are requested strictly one after another. After every page the
//! stream yields the cumulative list of public repositories fetched so far,
//! so callers can show partial results while later pages are in flight.
//!
//! Continuation is decided on the raw page length, before private entries
//! are removed: a full page always leads to one more request, a short page
//! (empty included) ends the stream.

use std::sync::Arc;

use futures::stream::{self, Stream};
use gh_client::{GitHubClient, GithubRepo};

use crate::domain_models::Repository;
use crate::error::RepoFetchError;
use crate::repo_filter::retain_public;
use crate::retry::{with_retry, RetryPolicy};
use crate::PAGE_SIZE;

/// Drives the page-by-page loop against a [`GitHubClient`]
#[derive(Clone)]
pub struct PagedFetcher {
    client: Arc<dyn GitHubClient>,
    page_size: u8,
    retry: RetryPolicy,
}

/// Position of the fetch loop between two pages
enum Cursor {
    Next {
        page: u32,
        accumulated: Vec<Repository>,
    },
    Finished,
}

impl PagedFetcher {
    pub fn new(client: Arc<dyn GitHubClient>) -> Self {
        Self {
            client,
            page_size: PAGE_SIZE,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Lazily fetch all repositories of `login`
    ///
    /// Yields one growing snapshot per page. On the first page that cannot
    /// be fetched within the retry policy the stream yields
    /// [`RepoFetchError::PageFetchFailed`] and ends. Nothing is requested
    /// until the stream is polled, and dropping it cancels any in-flight
    /// request or backoff.
    pub fn stream<'a>(
        &'a self,
        login: &'a str,
    ) -> impl Stream<Item = Result<Vec<Repository>, RepoFetchError>> + Send + 'a {
        let start = Cursor::Next {
            page: 1,
            accumulated: Vec::new(),
        };

        stream::try_unfold(start, move |cursor| async move {
            let (page, mut accumulated) = match cursor {
                Cursor::Next { page, accumulated } => (page, accumulated),
                Cursor::Finished => return Ok(None),
            };

            let raw = self.fetch_page(login, page).await?;
            let is_last = raw.len() < usize::from(self.page_size);

            accumulated.extend(retain_public(raw).into_iter().map(Repository::from));
            log::debug!(
                "Page {} of {} done, {} public repositories so far{}",
                page,
                login,
                accumulated.len(),
                if is_last { " (last page)" } else { "" }
            );

            let snapshot = accumulated.clone();
            let next = if is_last {
                Cursor::Finished
            } else {
                Cursor::Next {
                    page: page + 1,
                    accumulated,
                }
            };

            Ok::<_, RepoFetchError>(Some((snapshot, next)))
        })
    }

    async fn fetch_page(&self, login: &str, page: u32) -> Result<Vec<GithubRepo>, RepoFetchError> {
        let label = format!("Fetching page {} of {}", page, login);

        with_retry(
            &self.retry,
            || self.client.fetch_repositories_page(login, page, self.page_size),
            &label,
        )
        .await
        .map_err(|cause| {
            log::error!(
                "Giving up on page {} of {} after {} attempts: {}",
                page,
                login,
                self.retry.max_attempts,
                cause
            );
            RepoFetchError::PageFetchFailed {
                page,
                attempts: self.retry.max_attempts,
                cause,
            }
        })
    }
}
