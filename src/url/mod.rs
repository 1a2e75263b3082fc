//! URL processing utilities.
//!
//! This module contains URL-related functionality:
//! - Lenient splitting of URL strings into components
//! - Scheme and port recovery for ambiguous `host:port` strings
//! - Host normalization and URL stemming
//! - Public Suffix List oracles

pub mod normalizer;
pub mod parser;
pub mod psl;
pub mod resolver;

// Re-export main functionality
pub use normalizer::{
    get_stripped_url, is_ip_literal, normalize_host, stem_components, stem_url, StemmedUrl,
};
pub use parser::{parse_url, UrlComponents};
pub use psl::{PslOracle, SuffixList, SuffixOracle};
pub use resolver::{adapt_url_for_port_and_scheme, get_port, get_scheme, get_scheme_or};
