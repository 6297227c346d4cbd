//! CLI for the linkscope toolkit.
//!
//! Every command takes its items as arguments, or one per line on stdin when
//! none are given, so it can sit in a shell pipeline next to a crawler.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkscope_core::config;

use commands::{
    run_clean, run_cookies_join, run_cookies_parse, run_decode, run_domain, run_ext,
    run_resolve, run_scope, run_unique,
};

/// Top-level CLI for linkscope.
#[derive(Debug, Parser)]
#[command(name = "linkscope")]
#[command(about = "URL resolution, scope matching and cookie helpers for crawlers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve scraped links against the page they came from.
    Resolve {
        /// URL of the page the links were found on.
        #[arg(long, short)]
        base: String,
        /// Raw links (stdin lines if omitted).
        links: Vec<String>,
    },

    /// Print the registrable domain (eTLD+1) of each host.
    Domain {
        /// Hostnames (stdin lines if omitted).
        hosts: Vec<String>,
    },

    /// Clean scraped subdomains (case, wildcards, encoding leftovers).
    Clean {
        /// Raw names (stdin lines if omitted).
        names: Vec<String>,
    },

    /// Print only the URLs whose host matches a scope pattern.
    Scope {
        /// Scope regex; repeatable. Defaults to `scope_patterns` from the config.
        #[arg(long = "pattern", short = 'p', value_name = "REGEX")]
        patterns: Vec<String>,
        /// Require each pattern to match the whole hostname.
        #[arg(long)]
        anchored: bool,
        /// URLs (stdin lines if omitted).
        urls: Vec<String>,
    },

    /// Split or build raw `Cookie` header values.
    Cookies {
        #[command(subcommand)]
        action: CookiesAction,
    },

    /// Percent-decode text and unescape JSON `\u002f` / `\u0026`.
    Decode {
        /// Text values (stdin lines if omitted).
        values: Vec<String>,
    },

    /// Print the file extension of each URL's path.
    Ext {
        /// URLs (stdin lines if omitted).
        urls: Vec<String>,
    },

    /// Drop repeated stdin lines, keeping first occurrences in order.
    Unique,
}

#[derive(Debug, Subcommand)]
pub enum CookiesAction {
    /// Print `name<TAB>value` for each cookie in a raw header.
    Parse {
        /// Raw header value. Defaults to `cookie` from the config.
        raw: Option<String>,
    },
    /// Join `NAME=VALUE` pairs into one header value.
    Join {
        /// Pairs (stdin lines if omitted).
        pairs: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { base, links } => run_resolve(&base, links)?,
            CliCommand::Domain { hosts } => run_domain(hosts)?,
            CliCommand::Clean { names } => run_clean(names)?,
            CliCommand::Scope {
                patterns,
                anchored,
                urls,
            } => run_scope(&cfg, patterns, anchored, urls)?,
            CliCommand::Cookies { action } => match action {
                CookiesAction::Parse { raw } => run_cookies_parse(&cfg, raw)?,
                CookiesAction::Join { pairs } => run_cookies_join(pairs)?,
            },
            CliCommand::Decode { values } => run_decode(values)?,
            CliCommand::Ext { urls } => run_ext(urls)?,
            CliCommand::Unique => run_unique()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
