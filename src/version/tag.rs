//! Parsing of release tags into a version and an optional prerelease build counter

use crate::version::error::ResolveError;

/// A tag name split into its version and optional build counter.
///
/// `"1.2.3-4"` parses to version `"1.2.3"` with build `4`, while `"1.2.3"`
/// has no build counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub version: String,
    pub build: Option<u64>,
}

impl ParsedTag {
    /// Parses a tag name, splitting on the first `-`.
    ///
    /// `prefix` is stripped before splitting when present (e.g. `"v"` for `"v1.2.3-4"`).
    pub fn parse(name: &str, prefix: Option<&str>) -> Result<Self, ResolveError> {
        let unprefixed = prefix.and_then(|p| name.strip_prefix(p)).unwrap_or(name);

        let (version, build) = match unprefixed.split_once('-') {
            Some((version, build)) => {
                let invalid = || {
                    ResolveError::TagParse(format!(
                        "build suffix '{}' of tag '{}' is not a number",
                        build, name
                    ))
                };
                // u64::from_str also accepts a leading '+'
                if build.is_empty() || !build.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let build = build.parse::<u64>().map_err(|_| invalid())?;
                (version, Some(build))
            }
            None => (unprefixed, None),
        };

        Ok(Self {
            version: version.to_string(),
            build,
        })
    }
}
