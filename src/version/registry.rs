//! Registry trait for fetching tags from a source-control host

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching the tag list of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches all tag names of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository in `owner/name` form (e.g., "minigamecore/minigamecore")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, ordered from newest to oldest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}
