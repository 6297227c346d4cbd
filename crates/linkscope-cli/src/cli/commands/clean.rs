//! `linkscope clean [names...]`

use anyhow::Result;
use linkscope_core::clean_subdomain;

use super::items_or_stdin;

pub fn run_clean(names: Vec<String>) -> Result<()> {
    for name in items_or_stdin(names)? {
        let cleaned = clean_subdomain(&name);
        if !cleaned.is_empty() {
            println!("{cleaned}");
        }
    }
    Ok(())
}
