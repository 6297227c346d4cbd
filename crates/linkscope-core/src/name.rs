//! Cleanup of hostnames and subdomains scraped from pages, certificates and
//! search results.

use std::sync::LazyLock;

use regex::Regex;

/// Percent-encoding leftovers (`%20`, `%25`, `%2b`, ... minus the `%`) that
/// scraping tends to leave glued to the front of a name.
static NAME_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((20)|(25)|(2b)|(2f)|(3d)|(3a)|(40))+").expect("valid regex")
});

/// Normalizes a scraped subdomain: trims, lowercases, drops a leading `*.`
/// wildcard, then applies [`clean_name`].
///
/// The result is a fixed point: `clean_subdomain(clean_subdomain(x)) ==
/// clean_subdomain(x)`. Dash trimming can uncover a new marker (`-25a`), so
/// the steps repeat until nothing changes.
pub fn clean_subdomain(raw: &str) -> String {
    let mut current = clean_subdomain_once(raw);
    loop {
        let next = clean_subdomain_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_subdomain_once(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let unwildcarded = lowered.strip_prefix("*.").unwrap_or(&lowered);
    clean_name(unwildcarded)
}

/// Strips leading encoded markers until none remain, trims `-` from both
/// ends, and removes one leading `.` unless the name is just `"."`.
pub fn clean_name(name: &str) -> String {
    let mut name = name;
    while let Some(m) = NAME_STRIP_RE.find(name) {
        name = &name[m.end()..];
    }

    let name = name.trim_matches('-');
    match name.strip_prefix('.') {
        Some(rest) if name.len() > 1 => rest.to_string(),
        _ => name.to_string(),
    }
}
