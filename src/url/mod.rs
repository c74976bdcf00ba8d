//! URL processing utilities.
//!
//! This module contains URL-related functionality:
//! - Relative link normalization against a site root
//! - Public Suffix List (PSL) registrable-domain lookup
//! - Hostname and path extension extraction

pub mod fix;
pub mod psl;
pub mod utils;

// Re-export main functionality
pub use self::fix::fix_url;
pub use self::psl::{get_domain, registrable_domain};
pub use self::utils::{
    get_ext_type, get_hostname, host_of, parse_reference, parse_url, path_ext,
};
