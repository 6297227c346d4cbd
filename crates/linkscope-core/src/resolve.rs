//! Resolution of scraped link strings against the page they were found on.
//!
//! Resolution is syntactic: the link is glued onto the base page's scheme and
//! authority by prefix rules, never run through RFC 3986 reference resolution.
//! A link starting with `..` loses exactly its first two characters and keeps
//! the `/` after them, so `../b.php` on `a.com/dir/` becomes `a.com/dir//b.php`.

use url::Url;

use crate::error::Error;

/// Scheme and authority of the page a link was scraped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBase {
    scheme: String,
    host: String,
}

impl PageBase {
    /// Builds a base from raw parts. `host` may carry a `:port` suffix.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Reads scheme and `host[:port]` from a parsed page URL.
    ///
    /// Fails for URLs without a host, where there is nothing to resolve against.
    pub fn from_url(url: &Url) -> Result<Self, Error> {
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self::new(url.scheme(), host))
    }

    /// Parses `base` and builds a `PageBase` from it.
    pub fn parse(base: &str) -> Result<Self, Error> {
        let url = Url::parse(base).map_err(|e| Error::url_parse(base, e))?;
        Self::from_url(&url)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

impl TryFrom<&Url> for PageBase {
    type Error = Error;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        Self::from_url(url)
    }
}

/// Turns `link` into an absolute URL string relative to `base`.
///
/// Rules, first match wins:
/// - `//host/x` takes the base scheme.
/// - anything starting with `http` is returned unchanged.
/// - `/x` is appended to the base origin.
/// - `..x` drops two characters, `.x` drops one, then is appended to the origin.
/// - anything else (including `?q`, `#frag` and `""`) is joined with a `/`.
pub fn resolve(link: &str, base: &PageBase) -> String {
    let resolved = if link.starts_with("//") {
        format!("{}:{}", base.scheme, link)
    } else if link.starts_with("http") {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{}{}", base.origin(), link)
    } else if let Some(rest) = link.strip_prefix("..") {
        format!("{}{}", base.origin(), rest)
    } else if let Some(rest) = link.strip_prefix('.') {
        format!("{}{}", base.origin(), rest)
    } else {
        format!("{}/{}", base.origin(), link)
    };
    tracing::trace!(link, %resolved, "resolved link");
    resolved
}

/// Resolves `link` against a parsed page URL.
pub fn resolve_link(link: &str, base: &Url) -> Result<String, Error> {
    let base = PageBase::from_url(base)?;
    Ok(resolve(link, &base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn https_a() -> PageBase {
        PageBase::new("https", "a.com")
    }

    #[test]
    fn protocol_relative_takes_base_scheme() {
        assert_eq!(
            resolve("//cdn.example.com/app.js", &https_a()),
            "https://cdn.example.com/app.js"
        );
        let http = PageBase::new("http", "a.com");
        assert_eq!(resolve("//b.com", &http), "http://b.com");
    }

    #[test]
    fn absolute_links_are_untouched() {
        assert_eq!(
            resolve("http://other.org/x", &https_a()),
            "http://other.org/x"
        );
        assert_eq!(resolve("https://other.org", &https_a()), "https://other.org");
        // Only the prefix is checked.
        assert_eq!(resolve("httpfoo/bar", &https_a()), "httpfoo/bar");
    }

    #[test]
    fn root_relative() {
        assert_eq!(
            resolve("/login?x=1", &https_a()),
            "https://a.com/login?x=1"
        );
        assert_eq!(resolve("/?thread=10", &https_a()), "https://a.com/?thread=10");
    }

    #[test]
    fn parent_relative_strips_two_chars() {
        let base = PageBase::new("http", "a.com/dir/");
        assert_eq!(resolve("../b.php", &base), "http://a.com/dir//b.php");
        assert_eq!(resolve("../b.php", &https_a()), "https://a.com/b.php");
        assert_eq!(resolve("..b.php", &https_a()), "https://a.comb.php");
        assert_eq!(resolve("../", &https_a()), "https://a.com/");
    }

    #[test]
    fn dot_relative_strips_one_char() {
        assert_eq!(resolve("./page.html", &https_a()), "https://a.com/page.html");
        assert_eq!(resolve(".hidden", &https_a()), "https://a.comhidden");
    }

    #[test]
    fn bare_path_gets_slash() {
        assert_eq!(
            resolve("console/test.php", &https_a()),
            "https://a.com/console/test.php"
        );
    }

    #[test]
    fn query_fragment_and_empty_fall_through() {
        assert_eq!(resolve("?x=1", &https_a()), "https://a.com/?x=1");
        assert_eq!(resolve("#top", &https_a()), "https://a.com/#top");
        assert_eq!(resolve("", &https_a()), "https://a.com/");
    }

    #[test]
    fn base_from_url_keeps_port() {
        let url = Url::parse("http://localhost:8080/deep/page.html").unwrap();
        let base = PageBase::from_url(&url).unwrap();
        assert_eq!(base.scheme(), "http");
        assert_eq!(base.host(), "localhost:8080");
        assert_eq!(
            resolve_link("/api", &url).unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn base_from_url_drops_default_port() {
        let url = Url::parse("https://a.com:443/x").unwrap();
        assert_eq!(PageBase::from_url(&url).unwrap().host(), "a.com");
    }

    #[test]
    fn base_without_host_is_an_error() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            resolve_link("/x", &url),
            Err(Error::MissingHost(_))
        ));
    }

    #[test]
    fn parse_base_rejects_garbage() {
        assert!(matches!(
            PageBase::parse("not a url"),
            Err(Error::UrlParse { .. })
        ));
        assert_eq!(
            PageBase::parse("https://a.com/x").unwrap(),
            PageBase::new("https", "a.com")
        );
    }
}
