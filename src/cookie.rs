//! Converting between raw `Cookie` header values and name/value pairs.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::UrlUtilError;

/// A single cookie as sent in a `Cookie` request header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value, verbatim (not unquoted or decoded)
    pub value: String,
}

impl Cookie {
    /// Create a new cookie.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl FromStr for Cookie {
    type Err = UrlUtilError;

    /// Parse one `name=value` segment. Only the first `=` splits, so values
    /// may contain `=` (base64 padding, nested pairs).
    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let (name, value) = segment
            .split_once('=')
            .ok_or_else(|| UrlUtilError::MalformedCookie(segment.to_string()))?;

        Ok(Cookie::new(name.trim(), value.trim()))
    }
}

/// Join cookies into a raw `Cookie` header value, keeping their order.
///
/// # Examples
///
/// ```
/// use reconurl::{get_raw_cookie, Cookie};
///
/// let cookies = vec![Cookie::new("a", "1"), Cookie::new("b", "2")];
/// assert_eq!(get_raw_cookie(&cookies), "a=1; b=2");
/// assert_eq!(get_raw_cookie(&[]), "");
/// ```
pub fn get_raw_cookie(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(Cookie::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a raw `Cookie` header value into cookies.
///
/// Segments without an `=` (including the empty segment left by a trailing
/// `;`) are skipped.
///
/// # Examples
///
/// ```
/// use reconurl::{load_cookies, Cookie};
///
/// let cookies = load_cookies("session=abc; theme=dark; garbage;");
/// assert_eq!(cookies, vec![Cookie::new("session", "abc"), Cookie::new("theme", "dark")]);
/// ```
pub fn load_cookies(raw_cookie: &str) -> Vec<Cookie> {
    raw_cookie
        .split(';')
        .filter_map(|segment| match segment.parse::<Cookie>() {
            Ok(cookie) => Some(cookie),
            Err(e) => {
                trace!(error = %e, "skipping cookie segment");
                None
            }
        })
        .collect()
}
