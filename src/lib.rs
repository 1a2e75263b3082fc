//! Domain utilities for arbitrary, often malformed, URLs.
//!
//! This crate extracts the pieces needed to group URLs by site without a
//! full URL validation stack:
//!
//! - the eTLD+1 (registrable domain, "public suffix + 1")
//! - the hierarchy of hostname subparts above the public suffix
//! - the scheme and the port
//! - a stemmed `(scheme://)?(host[:port])(path)?` form for comparison
//!
//! # Quick Start
//!
//! ```
//! use domain_utils::{get_etld1, hostname_subparts, stem_url, PslOracle, StemOptions};
//!
//! let oracle = PslOracle::new();
//! let options = StemOptions::for_extraction();
//!
//! // Registrable domain, private suffixes included
//! assert_eq!(get_etld1("https://my.domain.cloudfront.net", &oracle, &options), "domain.cloudfront.net");
//!
//! // Hostname hierarchy
//! let parts = hostname_subparts("http://a.b.example.co.uk/x", false, &oracle, &options);
//! assert_eq!(parts, vec!["a.b.example.co.uk", "b.example.co.uk", "example.co.uk"]);
//!
//! // Stemming drops query and fragment
//! assert_eq!(
//!     stem_url("my.example.com:8080/path/to/webapp.htm?aced=1", &StemOptions::default()),
//!     "my.example.com:8080/path/to/webapp.htm"
//! );
//! ```
//!
//! # Suffix Oracles
//!
//! Suffix lookups go through the [`SuffixOracle`] trait. The caller builds
//! an oracle once and passes it to every call:
//!
//! - [`PslOracle`] uses the Public Suffix List compiled into the `psl` crate
//! - [`SuffixList`] parses a list supplied as text or read from a file
//!
//! [`DomainExtractor`] bundles a shared oracle with default options.
//!
//! # Error Handling
//!
//! Malformed input never fails: unparsable URLs produce an empty string,
//! an empty list or `None`. [`DomainError`] is only returned when building
//! an extractor or loading a suffix list.

// Re-export main extraction functions
pub use self::core::{extract_host, get_etld1, get_ps_plus_1, hostname_subparts};
pub use self::core::{DomainExtractor, DomainExtractorBuilder};

// Re-export essential URL utilities
pub use self::url::{
    adapt_url_for_port_and_scheme, get_port, get_scheme, get_scheme_or, get_stripped_url,
    is_ip_literal, normalize_host, parse_url, stem_components, stem_url, StemmedUrl,
    UrlComponents,
};
pub use self::url::{PslOracle, SuffixList, SuffixOracle};

// Re-export public types
pub use config::{IneligibleScheme, StemOptions};
pub use error::DomainError;
pub use types::{ExtractedHost, SuffixParts, NO_SCHEME};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;
