//! `linkscope cookies parse|join`

use anyhow::{bail, Result};
use linkscope_core::config::LinkscopeConfig;
use linkscope_core::{join_cookies, parse_cookies, Cookie};

use super::{items_or_stdin, stdin_lines};

/// Print one `name<TAB>value` line per cookie.
pub fn run_cookies_parse(cfg: &LinkscopeConfig, raw: Option<String>) -> Result<()> {
    let raw = match raw.or_else(|| cfg.cookie.clone()) {
        Some(raw) => raw,
        None => stdin_lines()?.join("; "),
    };
    for cookie in parse_cookies(&raw) {
        println!("{}\t{}", cookie.name, cookie.value);
    }
    Ok(())
}

pub fn run_cookies_join(pairs: Vec<String>) -> Result<()> {
    let cookies = pairs_to_cookies(&items_or_stdin(pairs)?)?;
    println!("{}", join_cookies(&cookies));
    Ok(())
}

pub(crate) fn pairs_to_cookies(pairs: &[String]) -> Result<Vec<Cookie>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => Ok(Cookie::new(name.trim(), value.trim())),
            None => bail!("expected NAME=VALUE, got {pair:?}"),
        })
        .collect()
}
