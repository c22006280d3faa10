//! Visibility filter for repository pages

use gh_client::GithubRepo;

/// Drop every private repository from a page, keeping the order of the rest
pub fn retain_public(page: Vec<GithubRepo>) -> Vec<GithubRepo> {
    page.into_iter().filter(|repo| !repo.is_private()).collect()
}
