//! CLI command handlers, one file per command family.

mod clean;
mod cookies;
mod domain;
mod resolve;
mod scope;
mod text;

pub use clean::run_clean;
pub use cookies::{run_cookies_join, run_cookies_parse};
pub use domain::run_domain;
pub use resolve::run_resolve;
pub use scope::run_scope;
pub use text::{run_decode, run_ext, run_unique};

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Items given on the command line, or non-blank stdin lines when there are none.
fn items_or_stdin(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    stdin_lines()
}

fn stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
