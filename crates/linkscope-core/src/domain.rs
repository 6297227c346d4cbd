//! Registrable domain (eTLD+1) lookup against the public suffix list.

use psl::{List, Psl};
use url::Url;

use crate::error::Error;

/// Returns the registrable domain of `host`, e.g. `example.co.uk` for
/// `sub.example.co.uk`.
///
/// The host is trimmed, lowercased and stripped of one trailing root dot
/// before lookup. Hosts whose suffix is not on the list, and hosts that are
/// themselves a public suffix, are errors rather than empty answers.
pub fn effective_domain(host: &str) -> Result<String, Error> {
    let host = host.trim().to_ascii_lowercase();
    let host = host.strip_suffix('.').unwrap_or(&host);
    if host.is_empty() {
        return Err(Error::EmptyHost);
    }
    if host.split('.').any(str::is_empty) {
        return Err(Error::EmptyLabel(host.to_string()));
    }

    let suffix = List
        .suffix(host.as_bytes())
        .ok_or_else(|| Error::UnknownSuffix(host.to_string()))?;
    if !suffix.is_known() {
        return Err(Error::UnknownSuffix(host.to_string()));
    }

    let domain = List
        .domain(host.as_bytes())
        .ok_or_else(|| Error::NotRegistrable(host.to_string()))?;
    std::str::from_utf8(domain.as_bytes())
        .map(str::to_string)
        .map_err(|_| Error::InvalidUtf8)
}

/// Registrable domain of a parsed URL's host.
pub fn domain_of(url: &Url) -> Result<String, Error> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::MissingHost(url.to_string()))?;
    effective_domain(host)
}
