//! Turning scraped `href`/`src` values into absolute URLs.

/// Resolve a link scraped from `site` into an absolute URL.
///
/// This is plain string concatenation, not RFC 3986 resolution: `site` is
/// expected to be a scheme plus host without a trailing slash, and the
/// result is not validated or percent-decoded.
///
/// - links already starting with `http` are returned unchanged
/// - protocol-relative links (`//host/path`) get `https:`
/// - root-relative links (`/path`) are appended to `site`
/// - anything else is appended to `site` after a `/`
/// - an empty link yields an empty string
///
/// # Examples
///
/// ```
/// use reconurl::fix_url;
///
/// assert_eq!(fix_url("//cdn.example.com/app.js", "https://example.com"), "https://cdn.example.com/app.js");
/// assert_eq!(fix_url("/login", "https://example.com"), "https://example.com/login");
/// assert_eq!(fix_url("?thread=10", "https://example.com"), "https://example.com/?thread=10");
/// ```
pub fn fix_url(url: &str, site: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("http") {
        url.to_string()
    } else if url.starts_with("//") {
        format!("https:{}", url)
    } else if url.starts_with('/') {
        format!("{}{}", site, url)
    } else {
        format!("{}/{}", site, url)
    }
}
