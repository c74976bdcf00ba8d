//! reconurl - URL, cookie and hostname helpers for scraping and recon
//!
//! A set of small, stateless functions for cleaning up what a crawler pulls
//! out of web pages: resolving scraped links, taking hostnames and
//! registrable domains out of URLs, reading file extensions, round-tripping
//! `Cookie` headers, deduplicating result lists and normalizing subdomains.
//!
//! # Quick Start
//!
//! ```
//! use reconurl::{fix_url, get_domain, get_hostname, clean_subdomain, unique};
//!
//! let link = fix_url("/login", "https://sub.example.co.uk");
//! assert_eq!(get_hostname(&link), "sub.example.co.uk");
//! assert_eq!(get_domain(&link), "example.co.uk");
//!
//! let names: Vec<String> = ["*.API.example.com", "2fapi.example.com", "cdn.example.com"]
//!     .iter()
//!     .map(|n| clean_subdomain(n))
//!     .collect();
//! assert_eq!(unique(&names), vec!["api.example.com", "cdn.example.com"]);
//! ```
//!
//! # Error Handling
//!
//! The top-level helpers are lossy on purpose: a URL that does not parse, a
//! host without a registrable domain or a malformed cookie segment produce
//! an empty string or are skipped, and the reason is logged through
//! `tracing` at debug level. The underlying fallible pieces
//! ([`parse_url`], [`registrable_domain`], `Cookie::from_str`) return
//! `Result<T, UrlUtilError>` for callers that need the reason.

// Re-export URL helpers
pub use crate::url::{
    fix_url, get_domain, get_ext_type, get_hostname, host_of, parse_reference, parse_url, path_ext,
    registrable_domain,
};

// Re-export cookie, collection and name helpers
pub use cookie::{get_raw_cookie, load_cookies, Cookie};
pub use names::{clean_name, clean_subdomain, NAME_STRIP_RE};
pub use utils::unique;

// Re-export public types
pub use error::UrlUtilError;

// Module declarations
pub mod cookie;
pub mod error;
pub mod logging;
pub mod names;
pub mod url;
pub mod utils;
