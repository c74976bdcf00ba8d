//! Public Suffix List integration for registrable-domain lookup.

use std::net::IpAddr;

use psl::{List, Psl};
use tracing::debug;

use crate::error::UrlUtilError;
use crate::url::utils::{host_of, parse_reference};

/// Return the registrable domain (eTLD+1) of a bare hostname.
///
/// Hosts that are IP addresses, public suffixes themselves, empty, or that
/// start or end with a dot or contain an empty label have no registrable
/// domain. TLDs missing from the list fall under the implicit `*` rule, so
/// `example.zzz` still yields `example.zzz`.
///
/// # Examples
///
/// ```
/// use reconurl::registrable_domain;
///
/// assert_eq!(registrable_domain("api.example.co.uk").unwrap(), "example.co.uk");
/// assert!(registrable_domain("co.uk").is_err());
/// assert!(registrable_domain("10.0.0.1").is_err());
/// ```
pub fn registrable_domain(host: &str) -> Result<String, UrlUtilError> {
    if host.is_empty() || host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return Err(UrlUtilError::NoRegistrableDomain(host.to_string()));
    }

    // Bracketed IPv6 literals as well as bare addresses
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if bare.parse::<IpAddr>().is_ok() {
        return Err(UrlUtilError::HostIsIp);
    }

    let host = host.to_ascii_lowercase();
    let domain = List
        .domain(host.as_bytes())
        .ok_or_else(|| UrlUtilError::NoRegistrableDomain(host.clone()))?;

    std::str::from_utf8(domain.as_bytes())
        .map(str::to_string)
        .map_err(|_| UrlUtilError::NoRegistrableDomain(host.clone()))
}

/// Get the registrable domain of a URL, or an empty string.
///
/// Protocol-relative references (`//host/path`) are accepted. Parse
/// failures, hostless URLs and hosts without a registrable domain all
/// yield `""`.
///
/// # Examples
///
/// ```
/// use reconurl::get_domain;
///
/// assert_eq!(get_domain("https://sub.example.co.uk/path"), "example.co.uk");
/// assert_eq!(get_domain("http://127.0.0.1:8080/"), "");
/// assert_eq!(get_domain("not a url"), "");
/// ```
pub fn get_domain(url: &str) -> String {
    let lookup = parse_reference(url)
        .and_then(|parsed| host_of(&parsed))
        .and_then(|host| registrable_domain(&host));

    match lookup {
        Ok(domain) => domain,
        Err(e) => {
            debug!(url, error = %e, "no registrable domain");
            String::new()
        }
    }
}
