//! Small text helpers applied to scraped values before they are used as
//! URLs or hostnames.

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

use crate::error::Error;

static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\r\n]+").expect("valid regex"));

/// JSON-escaped `/` and `&` (`\u002f`, `\u0026`) as they show up in inline scripts.
static JSON_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\\u00(2f|26)").expect("valid regex"));

/// Base for parsing relative references in [`ext_type`]; never appears in output.
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("valid base URL"));

/// Trims `s` and folds every run of tabs, CRs and LFs into a single space.
pub fn filter_newlines(s: &str) -> String {
    NEWLINES_RE.replace_all(s.trim(), " ").into_owned()
}

/// Query-string style percent decoding: `+` is a space, and every `%` must
/// be followed by two hex digits.
pub fn percent_decode(s: &str) -> Result<String, Error> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(Error::InvalidEscape(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = s.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Error::InvalidUtf8)
}

/// Best-effort decoding of scraped text: percent-decodes when the input is
/// well formed (otherwise keeps it as is), then turns `\u002f` and
/// `\u0026` escapes (any case) into `/` and `&`.
pub fn decode_chars(s: &str) -> String {
    let decoded = match percent_decode(s) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::trace!(%err, "keeping undecoded text");
            s.to_string()
        }
    };
    JSON_ESCAPE_RE
        .replace_all(&decoded, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case("2f") {
                "/"
            } else {
                "&"
            }
        })
        .into_owned()
}

/// File extension of the decoded path of `raw_url`, dot included (`".php"`),
/// or an empty string when the last path segment has none. Relative
/// references such as `js/app.js?v=2` are accepted; opaque URLs like
/// `mailto:a@b.com` have no path and give `""`.
pub fn ext_type(raw_url: &str) -> Result<String, Error> {
    let url = Url::options()
        .base_url(Some(&RELATIVE_BASE))
        .parse(raw_url)
        .map_err(|e| Error::url_parse(raw_url, e))?;
    if url.cannot_be_a_base() {
        return Ok(String::new());
    }
    let path = urlencoding::decode(url.path()).unwrap_or(Cow::Borrowed(url.path()));
    Ok(path_ext(&path).to_string())
}

fn path_ext(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    match last.rfind('.') {
        Some(i) => &last[i..],
        None => "",
    }
}

/// Removes duplicates, keeping the first occurrence of each item in order.
pub fn unique<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
