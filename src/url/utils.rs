//! Hostname and file-extension extraction.

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::{Host, ParseError, Url};

use crate::error::UrlUtilError;

/// Parse an absolute URL.
pub fn parse_url(url: &str) -> Result<Url, UrlUtilError> {
    Ok(Url::parse(url)?)
}

/// Parse an absolute URL or a protocol-relative reference (`//host/path`).
///
/// Scraped `src`/`href` values often omit the scheme; those are read as
/// `https`.
pub fn parse_reference(url: &str) -> Result<Url, UrlUtilError> {
    match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) if url.starts_with("//") => {
            Ok(Url::parse(&format!("https:{}", url))?)
        }
        parsed => Ok(parsed?),
    }
}

/// Host component of a parsed URL, without port or brackets.
pub fn host_of(url: &Url) -> Result<String, UrlUtilError> {
    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(UrlUtilError::MissingHost),
    }
}

/// Get the hostname of a URL, or an empty string if it does not parse or
/// has no host. Protocol-relative references are accepted.
///
/// # Examples
///
/// ```
/// use reconurl::get_hostname;
///
/// assert_eq!(get_hostname("https://sub.example.co.uk:8443/path"), "sub.example.co.uk");
/// assert_eq!(get_hostname("http://[::1]:8080/"), "::1");
/// assert_eq!(get_hostname("//cdn.example.com/x.js"), "cdn.example.com");
/// assert_eq!(get_hostname("/relative/path"), "");
/// ```
pub fn get_hostname(url: &str) -> String {
    match parse_reference(url).and_then(|parsed| host_of(&parsed)) {
        Ok(host) => host,
        Err(e) => {
            debug!(url, error = %e, "no hostname");
            String::new()
        }
    }
}

/// Get the extension of a URL's path, leading dot included.
///
/// Only the final path element is considered, and only its last dot counts.
/// The path is percent-decoded first. Protocol-relative references are
/// parsed like absolute URLs; other references without a scheme are
/// treated as a bare path. Returns `""` when there is no extension or the
/// input cannot be parsed.
///
/// # Examples
///
/// ```
/// use reconurl::get_ext_type;
///
/// assert_eq!(get_ext_type("https://a.com/f.tar.gz"), ".gz");
/// assert_eq!(get_ext_type("https://a.com/static/app.js?v=3"), ".js");
/// assert_eq!(get_ext_type("assets/site.css#top"), ".css");
/// assert_eq!(get_ext_type("//cdn.example.com"), "");
/// assert_eq!(get_ext_type("https://a.com/dir.d/file"), "");
/// ```
pub fn get_ext_type(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) if !url.starts_with("//") => {
            let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
            return decoded_path_ext(&url[..end]);
        }
        Err(ParseError::RelativeUrlWithoutBase) => parse_reference(url),
        parsed => parsed.map_err(UrlUtilError::from),
    };

    match parsed {
        Ok(parsed) if parsed.cannot_be_a_base() => String::new(),
        Ok(parsed) => decoded_path_ext(parsed.path()),
        Err(e) => {
            debug!(url, error = %e, "no extension");
            String::new()
        }
    }
}

fn decoded_path_ext(path: &str) -> String {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    path_ext(&decoded).to_string()
}

/// Extension of the last element of a `/`-separated path.
pub fn path_ext(path: &str) -> &str {
    let name = path.rsplit_once('/').map_or(path, |(_, name)| name);
    name.rfind('.').map_or("", |i| &name[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_hostname() {
        assert_eq!(get_hostname("https://sub.example.co.uk/path"), "sub.example.co.uk");
        assert_eq!(get_hostname("http://Example.COM:8080"), "example.com");
        assert_eq!(get_hostname("ftp://files.example.com/pub/"), "files.example.com");
    }

    #[test]
    fn test_get_hostname_ip() {
        assert_eq!(get_hostname("http://192.168.0.1:3000/admin"), "192.168.0.1");
        assert_eq!(get_hostname("http://[2001:db8::1]/"), "2001:db8::1");
    }

    #[test]
    fn test_get_hostname_failures() {
        assert_eq!(get_hostname(""), "");
        assert_eq!(get_hostname("example.com"), "");
        assert_eq!(get_hostname("http://"), "");
        assert_eq!(get_hostname("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_host_of() {
        let url = Url::parse("https://api.example.com:8443/search").unwrap();
        assert_eq!(host_of(&url).unwrap(), "api.example.com");

        let url = Url::parse("data:text/plain,hello").unwrap();
        assert_eq!(host_of(&url), Err(UrlUtilError::MissingHost));
    }

    #[test]
    fn test_parse_url_error() {
        match parse_url("no scheme here") {
            Err(UrlUtilError::UrlParse(_)) => (),
            other => panic!("Expected UrlParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_ext_type() {
        assert_eq!(get_ext_type("https://a.com/f.tar.gz"), ".gz");
        assert_eq!(get_ext_type("https://a.com/docs/report.pdf"), ".pdf");
        assert_eq!(get_ext_type("https://a.com/img/logo.png#frag"), ".png");
    }

    #[test]
    fn test_get_ext_type_none() {
        assert_eq!(get_ext_type("https://a.com"), "");
        assert_eq!(get_ext_type("https://a.com/api/users/"), "");
        assert_eq!(get_ext_type("https://a.com/v1.2/users"), "");
        assert_eq!(get_ext_type("mailto:someone@example.com"), "");
        assert_eq!(get_ext_type("http://[bad"), "");
    }

    #[test]
    fn test_get_ext_type_relative() {
        assert_eq!(get_ext_type("/js/main.min.js?v=2"), ".js");
        assert_eq!(get_ext_type("index.php"), ".php");
        assert_eq!(get_ext_type("README"), "");
    }

    #[test]
    fn test_protocol_relative_references() {
        assert_eq!(get_hostname("//cdn.example.com/x.js"), "cdn.example.com");
        assert_eq!(get_hostname("//CDN.example.com:8080"), "cdn.example.com");
        assert_eq!(get_hostname("//"), "");

        assert_eq!(get_ext_type("//cdn.example.com"), "");
        assert_eq!(get_ext_type("//cdn.example.com?x=1"), "");
        assert_eq!(get_ext_type("//cdn.example.com/a.js"), ".js");
    }

    #[test]
    fn test_parse_reference() {
        let url = parse_reference("//static.example.com/img/a.png").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/img/a.png");

        assert!(parse_reference("relative/path").is_err());
        assert!(parse_reference("//").is_err());
    }

    #[test]
    fn test_get_ext_type_decodes_path() {
        assert_eq!(get_ext_type("https://a.com/f.t%78t"), ".txt");
        assert_eq!(get_ext_type("https://a.com/a.b%2Fc"), "");
        assert_eq!(get_ext_type("docs/report%2Epdf"), ".pdf");
    }

    #[test]
    fn test_path_ext() {
        assert_eq!(path_ext("/a/b.c"), ".c");
        assert_eq!(path_ext("/a/.bashrc"), ".bashrc");
        assert_eq!(path_ext("/a/file."), ".");
        assert_eq!(path_ext("file.txt"), ".txt");
        assert_eq!(path_ext(""), "");
    }
}
