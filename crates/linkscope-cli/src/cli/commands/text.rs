//! `linkscope decode|ext|unique`

use anyhow::Result;
use linkscope_core::{decode_chars, ext_type, filter_newlines, unique};

use super::{items_or_stdin, stdin_lines};

pub fn run_decode(values: Vec<String>) -> Result<()> {
    for value in items_or_stdin(values)? {
        println!("{}", decode_chars(&filter_newlines(&value)));
    }
    Ok(())
}

/// Print `<ext>\t<url>` for each URL; unparsable URLs are logged and skipped.
pub fn run_ext(urls: Vec<String>) -> Result<()> {
    for url in items_or_stdin(urls)? {
        match ext_type(url.trim()) {
            Ok(ext) => println!("{ext}\t{url}"),
            Err(err) => tracing::warn!("skipping {url}: {err}"),
        }
    }
    Ok(())
}

pub fn run_unique() -> Result<()> {
    for line in unique(stdin_lines()?) {
        println!("{line}");
    }
    Ok(())
}
