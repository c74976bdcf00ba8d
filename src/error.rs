//! Error types for URL, domain and cookie parsing.
//!
//! The lossy helpers exported at the crate root never surface these; they
//! degrade to an empty string or a skipped element instead. The fallible
//! building blocks (`parse_url`, `registrable_domain`, `Cookie::from_str`)
//! return them so callers that care can tell the cases apart.

use thiserror::Error;

/// Errors that can occur while taking apart URLs, hosts or cookie headers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlUtilError {
    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The URL parsed but carries no host (e.g. `mailto:` or `data:` URLs).
    #[error("URL has no host component")]
    MissingHost,

    /// The host is an IP address, which has no registrable domain.
    #[error("Host must be a DNS name, not an IP address")]
    HostIsIp,

    /// The host is a public suffix itself, empty, or otherwise has no
    /// registrable domain under the Public Suffix List.
    #[error("No registrable domain for host: {0}")]
    NoRegistrableDomain(String),

    /// A cookie segment has no `=` separating name and value.
    #[error("Malformed cookie segment: {0:?}")]
    MalformedCookie(String),
}

impl From<url::ParseError> for UrlUtilError {
    fn from(err: url::ParseError) -> Self {
        UrlUtilError::UrlParse(err.to_string())
    }
}
