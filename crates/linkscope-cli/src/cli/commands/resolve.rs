//! `linkscope resolve --base <url> [links...]`

use anyhow::{Context, Result};
use linkscope_core::{resolve, PageBase};

use super::items_or_stdin;

pub fn run_resolve(base: &str, links: Vec<String>) -> Result<()> {
    let base = PageBase::parse(base).with_context(|| format!("base URL {base}"))?;
    for link in items_or_stdin(links)? {
        println!("{}", resolve(link.trim(), &base));
    }
    Ok(())
}
