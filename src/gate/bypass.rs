//! Paths exempt from the bearer check.

/// Substrings that, when contained in the request path, skip authentication.
///
/// Matching is a plain substring test (`/v3/api-docs` also matches
/// `/orders/v3/api-docs/swagger-config`), so keep entries specific.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BypassPaths {
    patterns: Vec<String>,
}

impl BypassPaths {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(Into::into)
            // An empty pattern would match every path.
            .filter(|p: &String| !p.is_empty())
            .collect();

        Self { patterns }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| path.contains(p.as_str()))
    }
}
