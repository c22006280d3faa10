//! Repository stream errors

use gh_client::TransportError;
use thiserror::Error;

/// Terminal failure of the repository stream
///
/// Snapshots emitted before the failure stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoFetchError {
    #[error("Failed to fetch page {page} after {attempts} retries")]
    PageFetchFailed {
        page: u32,
        attempts: u32,
        #[source]
        cause: TransportError,
    },
}
