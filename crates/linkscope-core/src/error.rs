//! Error type shared by the normalization primitives.

use thiserror::Error;

/// Failures surfaced by the fallible operations of this crate.
///
/// Each variant separates "the input was malformed" from "there is no answer
/// for this input", which an empty string cannot express.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string could not be parsed as a URL.
    #[error("invalid URL {input:?}: {reason}")]
    UrlParse { input: String, reason: String },

    /// The URL parsed but carries no host (e.g. `mailto:` or `data:`).
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// Hostname was empty after trimming.
    #[error("empty hostname")]
    EmptyHost,

    /// Hostname contains an empty label (leading dot or `..`).
    #[error("hostname {0:?} contains an empty label")]
    EmptyLabel(String),

    /// The public suffix of the hostname is not on the list.
    #[error("hostname {0:?} has no known public suffix")]
    UnknownSuffix(String),

    /// The hostname is itself a public suffix, so there is no registrable domain.
    #[error("hostname {0:?} is a public suffix")]
    NotRegistrable(String),

    /// A scope pattern failed to compile.
    #[error("invalid scope pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A `%` was not followed by two hex digits.
    #[error("invalid percent escape at byte {0}")]
    InvalidEscape(usize),

    /// Percent-decoded bytes are not valid UTF-8.
    #[error("decoded text is not valid UTF-8")]
    InvalidUtf8,
}

impl Error {
    pub(crate) fn url_parse(input: &str, err: url::ParseError) -> Self {
        Error::UrlParse {
            input: input.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Error::EmptyHost.to_string(), "empty hostname");
        assert_eq!(
            Error::UnknownSuffix("a.zzzz".into()).to_string(),
            "hostname \"a.zzzz\" has no known public suffix"
        );
    }

    #[test]
    fn url_parse_error_keeps_input() {
        let err = Error::url_parse("::nope", url::ParseError::RelativeUrlWithoutBase);
        match err {
            Error::UrlParse { input, reason } => {
                assert_eq!(input, "::nope");
                assert!(reason.contains("relative URL without a base"));
            }
            other => panic!("expected UrlParse, got {other:?}"),
        }
    }
}
