//! `linkscope scope [-p regex]... [--anchored] [urls...]`

use anyhow::{Context, Result};
use linkscope_core::config::LinkscopeConfig;
use linkscope_core::ScopeMatcher;
use url::Url;

use super::items_or_stdin;

pub fn run_scope(
    cfg: &LinkscopeConfig,
    patterns: Vec<String>,
    anchored: bool,
    urls: Vec<String>,
) -> Result<()> {
    let matcher = build_matcher(cfg, patterns, anchored)?;
    if matcher.is_empty() {
        tracing::warn!("no scope patterns given or configured; nothing will match");
    }
    for url in filter_in_scope(&matcher, items_or_stdin(urls)?) {
        println!("{url}");
    }
    Ok(())
}

/// Command-line patterns replace the configured ones.
pub(crate) fn build_matcher(
    cfg: &LinkscopeConfig,
    patterns: Vec<String>,
    anchored: bool,
) -> Result<ScopeMatcher> {
    if patterns.is_empty() {
        let cfg = LinkscopeConfig {
            anchor_scope_patterns: cfg.anchor_scope_patterns || anchored,
            ..cfg.clone()
        };
        return cfg.scope_matcher();
    }
    let matcher = if anchored {
        ScopeMatcher::anchored(&patterns)
    } else {
        ScopeMatcher::new(&patterns)
    };
    matcher.context("compile scope patterns")
}

pub(crate) fn filter_in_scope(matcher: &ScopeMatcher, urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .filter(|raw| match Url::parse(raw.trim()) {
            Ok(url) => matcher.in_scope(&url),
            Err(err) => {
                tracing::warn!("skipping {raw}: {err}");
                false
            }
        })
        .collect()
}
