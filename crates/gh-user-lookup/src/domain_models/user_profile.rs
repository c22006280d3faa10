//! User profile model

use gh_client::GithubUser;

/// Public profile of a GitHub user
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UserProfile {
    /// Display name (empty when the user has none)
    pub name: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl From<GithubUser> for UserProfile {
    fn from(user: GithubUser) -> Self {
        Self {
            name: user.name.unwrap_or_default(),
            avatar_url: user.avatar_url.unwrap_or_default(),
        }
    }
}
