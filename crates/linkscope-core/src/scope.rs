//! Hostname scope matching against configured regular expressions.

use regex::Regex;
use url::Url;

use crate::error::Error;

/// Ordered set of compiled scope patterns.
///
/// Patterns are tested against the hostname only and are not anchored: `example\.com`
/// also matches `notexample.com.evil.net`. Anchor them (`^...$`) for exact matches,
/// or build the matcher with [`ScopeMatcher::anchored`].
#[derive(Debug, Clone, Default)]
pub struct ScopeMatcher {
    patterns: Vec<Regex>,
}

impl ScopeMatcher {
    /// Compiles `patterns` in order. The first invalid pattern is reported.
    pub fn new<I, S>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Like [`ScopeMatcher::new`], but wraps every pattern as `^(?:pattern)$`.
    pub fn anchored<I, S>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            patterns
                .into_iter()
                .map(|p| format!("^(?:{})$", p.as_ref())),
        )
    }

    pub fn from_regexes(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the hostname of `url` matches any pattern.
    pub fn in_scope(&self, url: &Url) -> bool {
        in_scope(url, &self.patterns)
    }

    /// True if `host` matches any pattern.
    pub fn host_in_scope(&self, host: &str) -> bool {
        host_matches(host, &self.patterns)
    }
}

fn compile(pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// True if the hostname of `url` (no port, no IPv6 brackets) matches any of
/// `patterns`. An empty pattern list never matches.
pub fn in_scope(url: &Url, patterns: &[Regex]) -> bool {
    host_matches(hostname(url), patterns)
}

fn host_matches(host: &str, patterns: &[Regex]) -> bool {
    match patterns.iter().find(|re| re.is_match(host)) {
        Some(re) => {
            tracing::debug!(host, pattern = re.as_str(), "host in scope");
            true
        }
        None => false,
    }
}

fn hostname(url: &Url) -> &str {
    let host = url.host_str().unwrap_or("");
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
