//! Stateless URL and text normalization for crawler pipelines.
//!
//! Every operation is a pure function over its inputs; the only shared data
//! are precompiled regexes and the compiled-in public suffix list.

pub mod config;
pub mod cookie;
pub mod domain;
pub mod error;
pub mod logging;
pub mod name;
pub mod resolve;
pub mod scope;
pub mod text;

pub use cookie::{join_cookies, parse_cookies, Cookie};
pub use domain::{domain_of, effective_domain};
pub use error::Error;
pub use name::{clean_name, clean_subdomain};
pub use resolve::{resolve, resolve_link, PageBase};
pub use scope::{in_scope, ScopeMatcher};
pub use text::{decode_chars, ext_type, filter_newlines, percent_decode, unique};
