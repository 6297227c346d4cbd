//! `linkscope domain [hosts...]`

use anyhow::Result;
use linkscope_core::effective_domain;

use super::items_or_stdin;

/// Print the registrable domain of each host; hosts without one are logged and skipped.
pub fn run_domain(hosts: Vec<String>) -> Result<()> {
    for host in items_or_stdin(hosts)? {
        match effective_domain(&host) {
            Ok(domain) => println!("{domain}"),
            Err(err) => tracing::warn!("skipping {host}: {err}"),
        }
    }
    Ok(())
}
