//! Next build version resolution
//!
//! Combines the latest tag of a repository with the requested target version
//! to decide the version string of the next build.

use std::sync::Arc;

use tracing::{debug, info};

use crate::version::error::ResolveError;
use crate::version::registry::TagRegistry;
use crate::version::tag::ParsedTag;

/// Computes the next version from the latest tag.
///
/// `prefix` is stripped from `target_version` before comparing it with the
/// tag version, which has already had the prefix removed.
///
/// | unstable | latest tag             | result               |
/// |----------|------------------------|----------------------|
/// | false    | any                    | `target`             |
/// | true     | no build counter       | `target-1`           |
/// | true     | same version, build n  | `target-(n+1)`       |
/// | true     | other version          | `target-1`           |
pub fn next_version(
    unstable: bool,
    target_version: &str,
    latest: &ParsedTag,
    prefix: Option<&str>,
) -> Result<String, ResolveError> {
    if !unstable {
        return Ok(target_version.to_string());
    }

    let comparable = prefix
        .and_then(|p| target_version.strip_prefix(p))
        .unwrap_or(target_version);

    let build = match latest.build {
        Some(build) if latest.version == comparable => {
            build.checked_add(1).ok_or_else(|| {
                ResolveError::TagParse(format!("build counter {} cannot be incremented", build))
            })?
        }
        _ => 1,
    };

    Ok(format!("{}-{}", target_version, build))
}

/// Resolves the next build version of a repository from its tag list.
pub struct VersionResolver {
    registry: Arc<dyn TagRegistry>,
    repository: String,
    tag_prefix: Option<String>,
}

impl VersionResolver {
    pub fn new(
        registry: Arc<dyn TagRegistry>,
        repository: impl Into<String>,
        tag_prefix: Option<String>,
    ) -> Self {
        Self {
            registry,
            repository: repository.into(),
            tag_prefix,
        }
    }

    /// Returns the version string for the next build of `target_version`.
    ///
    /// The tag list is always fetched, so an unreachable or failing registry is
    /// an error for stable builds too. Stable builds ignore the tag contents.
    pub async fn resolve(
        &self,
        unstable: bool,
        target_version: &str,
    ) -> Result<String, ResolveError> {
        if target_version.trim().is_empty() {
            return Err(ResolveError::Input(
                "target version must not be empty".to_string(),
            ));
        }

        let tags = self.registry.fetch_tags(&self.repository).await?;

        if !unstable {
            info!("Stable build, using target version {}", target_version);
            return Ok(target_version.to_string());
        }

        let latest = tags.first().ok_or_else(|| {
            ResolveError::TagParse(format!("repository {} has no tags", self.repository))
        })?;
        debug!("Latest tag of {}: {}", self.repository, latest);

        let parsed = ParsedTag::parse(latest, self.tag_prefix.as_deref())?;
        let next = next_version(
            unstable,
            target_version,
            &parsed,
            self.tag_prefix.as_deref(),
        )?;
        info!("Next build version: {} (latest tag {})", next, latest);

        Ok(next)
    }
}
