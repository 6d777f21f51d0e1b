//! Registry test utilities

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use next_build_version::version::error::RegistryError;
use next_build_version::version::registry::TagRegistry;
use next_build_version::version::resolver::VersionResolver;

pub const TEST_REPOSITORY: &str = "minigamecore/minigamecore";

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    tags: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers tags for a repository, newest first
    pub fn with_tags(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl TagRegistry for MockRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        match self.tags.get(repository) {
            Some(tags) => Ok(tags.clone()),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}

/// Create a resolver for [`TEST_REPOSITORY`] backed by the given tags
pub fn create_test_resolver(tags: Vec<&str>) -> VersionResolver {
    let registry = MockRegistry::new().with_tags(TEST_REPOSITORY, tags);
    VersionResolver::new(Arc::new(registry), TEST_REPOSITORY, None)
}
