//! Stemming configuration.
//!
//! A single [`StemOptions`] value drives URL stemming and, through
//! [`StemOptions::for_extraction`], the eTLD+1 and subparts extractors.
//! Options can be deserialized from any serde format; missing fields take
//! their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Schemes that are always stemmed unless removed from `eligible_schemes`.
pub const DEFAULT_SCHEMES: [&str; 2] = ["http", "https"];

/// WebSocket schemes added when `parse_websockets` is enabled.
pub const WEBSOCKET_SCHEMES: [&str; 2] = ["ws", "wss"];

/// Scheme assumed for URLs that carry none.
pub const DEFAULT_IMPLICIT_SCHEME: &str = "http";

/// What to return for a URL whose scheme is not eligible for parsing
/// (`about:`, `data:`, `javascript:`, `file:`, relative paths...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleScheme {
    /// Hand the input back untouched.
    #[default]
    ReturnOriginal,
    /// Return an empty string.
    ReturnEmpty,
}

/// Options controlling how a URL is reduced to
/// `(scheme://)?(authority|hostname)(path)?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemOptions {
    /// Prepend `scheme://` to the stemmed URL.
    pub include_scheme: bool,
    /// Schemes that are stemmed; anything else follows `on_ineligible_scheme`.
    pub eligible_schemes: BTreeSet<String>,
    /// Also stem `ws` and `wss` URLs.
    pub parse_websockets: bool,
    /// Scheme assumed when the URL has none. `None` makes scheme-less URLs
    /// ineligible.
    pub implicit_scheme: Option<String>,
    /// Emit `host[:port]` rather than the bare hostname.
    pub use_authority: bool,
    /// Emit the path.
    pub include_path: bool,
    /// Policy for URLs whose scheme is not eligible.
    pub on_ineligible_scheme: IneligibleScheme,
}

impl Default for StemOptions {
    fn default() -> Self {
        Self {
            include_scheme: false,
            eligible_schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
            parse_websockets: true,
            implicit_scheme: Some(DEFAULT_IMPLICIT_SCHEME.to_string()),
            use_authority: true,
            include_path: true,
            on_ineligible_scheme: IneligibleScheme::ReturnOriginal,
        }
    }
}

impl StemOptions {
    /// Options used when extracting a host for eTLD+1 or subparts:
    /// hostname only, no path, no scheme, empty result for ineligible URLs.
    pub fn for_extraction() -> Self {
        Self {
            include_scheme: false,
            use_authority: false,
            include_path: false,
            on_ineligible_scheme: IneligibleScheme::ReturnEmpty,
            ..Self::default()
        }
    }

    /// Check whether a lower-cased scheme is stemmed under these options.
    pub fn is_eligible(&self, scheme: &str) -> bool {
        self.eligible_schemes.contains(scheme)
            || (self.parse_websockets && WEBSOCKET_SCHEMES.contains(&scheme))
    }

    pub fn with_scheme(mut self, include_scheme: bool) -> Self {
        self.include_scheme = include_scheme;
        self
    }

    pub fn with_websockets(mut self, parse_websockets: bool) -> Self {
        self.parse_websockets = parse_websockets;
        self
    }

    pub fn with_implicit_scheme(mut self, scheme: Option<&str>) -> Self {
        self.implicit_scheme = scheme.map(|s| s.to_ascii_lowercase());
        self
    }

    pub fn with_authority(mut self, use_authority: bool) -> Self {
        self.use_authority = use_authority;
        self
    }

    pub fn with_path(mut self, include_path: bool) -> Self {
        self.include_path = include_path;
        self
    }

    pub fn with_ineligible(mut self, policy: IneligibleScheme) -> Self {
        self.on_ineligible_scheme = policy;
        self
    }
}
