//! Raw `Cookie` header join/split.

use serde::{Deserialize, Serialize};

/// One `name=value` pair of a `Cookie` request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Joins cookies into a header value: `a=1; b=2`. Order is preserved;
/// no cookies gives an empty string.
pub fn join_cookies(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Splits a raw header value into cookies.
///
/// Each `;`-separated segment is split on its first `=`; name and value are
/// trimmed, and any further `=` stays in the value. Segments without `=`
/// (including blank ones from a trailing `;`) are skipped.
pub fn parse_cookies(raw: &str) -> Vec<Cookie> {
    let mut cookies = Vec::new();
    for segment in raw.split(';') {
        match segment.split_once('=') {
            Some((name, value)) => cookies.push(Cookie::new(name.trim(), value.trim())),
            None => {
                if !segment.trim().is_empty() {
                    tracing::debug!(segment, "skipping cookie segment without '='");
                }
            }
        }
    }
    cookies
}
