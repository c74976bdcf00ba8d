//! Cleaning hostnames and subdomains scraped from web content.
//!
//! Names pulled out of HTML, JavaScript or certificate transparency dumps
//! often carry leftovers of percent-encoding with the `%` already gone
//! (`2fapi.example.com` from `%2Fapi.example.com`), wildcard markers,
//! stray dashes or a leading dot. These helpers normalize them into a form
//! that can be compared and deduplicated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading run of percent-encoding remnants: space, `%`, `+`, `/`, `=`, `:`
/// and `@` without their `%` prefix.
pub static NAME_STRIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((20)|(25)|(2b)|(2f)|(3d)|(3a)|(40))+").expect("valid name strip regex")
});

/// Normalize a scraped hostname.
///
/// Lowercases and trims, strips leading encoding remnants until none are
/// left, trims `-` from both ends and drops one leading `.`.
///
/// # Examples
///
/// ```
/// use reconurl::clean_name;
///
/// assert_eq!(clean_name("  2F3Aapi.Example.com "), "api.example.com");
/// assert_eq!(clean_name("-.cdn.example.com-"), "cdn.example.com");
/// ```
pub fn clean_name(name: &str) -> String {
    let mut name = name.trim().to_lowercase();

    while let Some(m) = NAME_STRIP_RE.find(&name) {
        let end = m.end();
        name.drain(..end);
    }

    let name = name.trim_matches('-');
    match name.strip_prefix('.') {
        Some(rest) if name.len() > 1 => rest.to_string(),
        _ => name.to_string(),
    }
}

/// Normalize a scraped subdomain.
///
/// Applies [`clean_name`], then removes a leading `*.` wildcard and a
/// leading `u002f` (a JSON-escaped `/` with the backslash lost). When a
/// marker was removed the remainder is cleaned again, since the marker may
/// have been hiding encoding remnants.
///
/// # Examples
///
/// ```
/// use reconurl::clean_subdomain;
///
/// assert_eq!(clean_subdomain("*.25EXAMPLE.com-"), "example.com");
/// assert_eq!(clean_subdomain("u002fstatic.example.com"), "static.example.com");
/// ```
pub fn clean_subdomain(name: &str) -> String {
    let cleaned = clean_name(name);

    let rest = cleaned.strip_prefix("*.").unwrap_or(&cleaned);
    let rest = rest.strip_prefix("u002f").unwrap_or(rest);

    if rest.len() == cleaned.len() {
        cleaned
    } else {
        clean_name(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_case_and_whitespace() {
        assert_eq!(clean_name("  WWW.Example.COM\n"), "www.example.com");
    }

    #[test]
    fn test_clean_name_strips_encoding_remnants() {
        assert_eq!(clean_name("2fapi.example.com"), "api.example.com");
        assert_eq!(clean_name("252f40mail.example.com"), "mail.example.com");
        assert_eq!(clean_name("3D3d2B2bx.example.com"), "x.example.com");
    }

    #[test]
    fn test_clean_name_only_strips_prefix() {
        assert_eq!(clean_name("a20b.example.com"), "a20b.example.com");
        assert_eq!(clean_name("2a.example.com"), "2a.example.com");
    }

    #[test]
    fn test_clean_name_dashes_and_dot() {
        assert_eq!(clean_name("--host.example.com--"), "host.example.com");
        assert_eq!(clean_name(".example.com"), "example.com");
        assert_eq!(clean_name("..example.com"), ".example.com");
        assert_eq!(clean_name("."), ".");
    }

    #[test]
    fn test_clean_name_empty() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("   "), "");
        assert_eq!(clean_name("2020"), "");
    }

    #[test]
    fn test_clean_subdomain_wildcard() {
        assert_eq!(clean_subdomain("*.25EXAMPLE.com-"), "example.com");
        assert_eq!(clean_subdomain("*.api.example.com"), "api.example.com");
    }

    #[test]
    fn test_clean_subdomain_escaped_slash() {
        assert_eq!(clean_subdomain("U002Fdocs.example.com"), "docs.example.com");
        assert_eq!(clean_subdomain("*.u002fdocs.example.com"), "docs.example.com");
    }

    #[test]
    fn test_clean_subdomain_plain() {
        assert_eq!(clean_subdomain("Mail.Example.com"), "mail.example.com");
        assert_eq!(clean_subdomain("*"), "*");
    }
}
