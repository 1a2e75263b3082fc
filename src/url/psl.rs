//! Public Suffix List integration.
//!
//! The extraction pipeline only needs one question answered: "what is the
//! longest public suffix of this hostname?". [`SuffixOracle`] is that
//! seam. Two providers are included:
//!
//! - [`PslOracle`]: the Mozilla list compiled into the `psl` crate
//! - [`SuffixList`]: a caller-supplied list in the PSL text format
//!
//! Fetching and refreshing lists is left to the caller; oracles are
//! immutable once built and safe to share across threads.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::DomainError;

const ICANN_SECTION_MARKER: &str = "// ===BEGIN ICANN DOMAINS===";
const PRIVATE_SECTION_MARKER: &str = "// ===BEGIN PRIVATE DOMAINS===";

/// Answers longest-public-suffix queries for hostnames.
pub trait SuffixOracle {
    /// Return the longest public suffix of `hostname`, or an empty string
    /// if no rule of the dataset matches it.
    ///
    /// `hostname` should be lower case, without port or brackets.
    fn longest_public_suffix(&self, hostname: &str) -> String;
}

impl<T: SuffixOracle + ?Sized> SuffixOracle for &T {
    fn longest_public_suffix(&self, hostname: &str) -> String {
        (**self).longest_public_suffix(hostname)
    }
}

impl<T: SuffixOracle + ?Sized> SuffixOracle for Box<T> {
    fn longest_public_suffix(&self, hostname: &str) -> String {
        (**self).longest_public_suffix(hostname)
    }
}

impl<T: SuffixOracle + ?Sized> SuffixOracle for Arc<T> {
    fn longest_public_suffix(&self, hostname: &str) -> String {
        (**self).longest_public_suffix(hostname)
    }
}

/// Section of the list a matched rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Icann,
    Private,
}

/// Walk a lookup until it yields an acceptable known suffix.
///
/// `lookup` returns the byte length of the matched suffix and its section,
/// or `None` for the section when only the implicit `*` rule matched.
/// When private rules are excluded, a private match is retried on its own
/// parent so the longest ICANN suffix wins.
fn longest_suffix<F>(hostname: &str, include_private: bool, lookup: F) -> String
where
    F: Fn(&[u8]) -> Option<(usize, Option<Section>)>,
{
    let host = hostname.strip_suffix('.').unwrap_or(hostname);
    let host = host.to_ascii_lowercase();
    let mut candidate = host.as_str();

    loop {
        if candidate.is_empty() {
            return String::new();
        }

        let Some((len, section)) = lookup(candidate.as_bytes()) else {
            return String::new();
        };
        if len == 0 || len > candidate.len() {
            return String::new();
        }
        let suffix = &candidate[candidate.len() - len..];

        match section {
            None => {
                trace!("No known suffix for {:?}", hostname);
                return String::new();
            }
            Some(Section::Private) if !include_private => {
                debug!("Skipping private suffix {:?} of {:?}", suffix, hostname);
                match suffix.split_once('.') {
                    Some((_, parent)) => candidate = parent,
                    None => return String::new(),
                }
            }
            Some(_) => {
                trace!("Suffix of {:?} is {:?}", hostname, suffix);
                return suffix.to_string();
            }
        }
    }
}

/// Suffix oracle backed by the Public Suffix List compiled into `psl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PslOracle {
    include_private_domains: bool,
}

impl PslOracle {
    /// Oracle over the full list, private domains included
    /// (`cloudfront.net`, `apps.fbsbx.com`, ...).
    pub fn new() -> Self {
        Self {
            include_private_domains: true,
        }
    }

    /// Oracle over the ICANN section only.
    pub fn icann_only() -> Self {
        Self {
            include_private_domains: false,
        }
    }

    pub fn includes_private_domains(&self) -> bool {
        self.include_private_domains
    }
}

impl Default for PslOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixOracle for PslOracle {
    fn longest_public_suffix(&self, hostname: &str) -> String {
        use psl::{List, Psl, Type};

        longest_suffix(hostname, self.include_private_domains, |host| {
            List.suffix(host).map(|suffix| {
                let section = match suffix.typ() {
                    Some(Type::Private) => Some(Section::Private),
                    Some(_) => Some(Section::Icann),
                    None => None,
                };
                (suffix.as_bytes().len(), section)
            })
        })
    }
}

/// Suffix oracle backed by a caller-supplied public suffix list.
///
/// The text uses the PSL format: one rule per line, `//` comments,
/// `*.` wildcards and `!` exceptions. Rules before any
/// `===BEGIN ... DOMAINS===` marker are treated as ICANN rules, so a
/// plain list of suffixes works as-is.
///
/// # Examples
///
/// ```
/// use domain_utils::{SuffixList, SuffixOracle};
///
/// let list: SuffixList = "moz.illa".parse()?;
/// assert_eq!(list.longest_public_suffix("foo.bar.moz.illa"), "moz.illa");
/// assert_eq!(list.longest_public_suffix("example.com"), "");
/// # Ok::<(), domain_utils::DomainError>(())
/// ```
pub struct SuffixList {
    list: publicsuffix::List,
    include_private_domains: bool,
}

impl SuffixList {
    /// Parse a list from PSL-formatted text.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .count();
        if rules == 0 {
            return Err(DomainError::EmptySuffixList);
        }

        let list = if text.contains(ICANN_SECTION_MARKER) || text.contains(PRIVATE_SECTION_MARKER) {
            text.parse::<publicsuffix::List>()
        } else {
            format!("{}\n{}", ICANN_SECTION_MARKER, text).parse::<publicsuffix::List>()
        }
        .map_err(|e| DomainError::InvalidSuffixList(e.to_string()))?;

        debug!("Loaded public suffix list with {} rules", rules);

        Ok(Self {
            list,
            include_private_domains: true,
        })
    }

    /// Read and parse a list from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Ignore rules from the private-domains section.
    pub fn icann_only(mut self) -> Self {
        self.include_private_domains = false;
        self
    }

    pub fn includes_private_domains(&self) -> bool {
        self.include_private_domains
    }
}

impl FromStr for SuffixList {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Debug for SuffixList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixList")
            .field("include_private_domains", &self.include_private_domains)
            .finish_non_exhaustive()
    }
}

impl SuffixOracle for SuffixList {
    fn longest_public_suffix(&self, hostname: &str) -> String {
        use publicsuffix::{Psl, Type};

        longest_suffix(hostname, self.include_private_domains, |host| {
            self.list.suffix(host).map(|suffix| {
                let section = match suffix.typ() {
                    Some(Type::Private) => Some(Section::Private),
                    Some(_) => Some(Section::Icann),
                    None => None,
                };
                (suffix.as_bytes().len(), section)
            })
        })
    }
}
