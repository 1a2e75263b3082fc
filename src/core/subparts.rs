//! Hostname subpart hierarchies.

use crate::config::StemOptions;
use crate::core::etld1::extract_host;
use crate::types::{ExtractedHost, SuffixParts};
use crate::url::psl::SuffixOracle;

/// List the hostname suffixes of a URL from most to least specific,
/// down to the eTLD+1.
///
/// For `http://a.b.c.d.com/path?query#frag` this yields
/// `["a.b.c.d.com", "b.c.d.com", "c.d.com", "d.com"]`, with `"com"`
/// appended when `include_public_suffix` is set.
///
/// IP hosts yield a single-element list. URLs with no host, or whose host
/// has no known public suffix, yield an empty list.
///
/// # Examples
///
/// ```
/// use domain_utils::{hostname_subparts, PslOracle, StemOptions};
///
/// let oracle = PslOracle::new();
/// let options = StemOptions::for_extraction();
///
/// assert_eq!(
///     hostname_subparts("http://www.google.com", true, &oracle, &options),
///     vec!["www.google.com", "google.com", "com"]
/// );
/// assert_eq!(
///     hostname_subparts("http://127.0.0.1/foo.html", false, &oracle, &options),
///     vec!["127.0.0.1"]
/// );
/// ```
pub fn hostname_subparts<O>(
    url: &str,
    include_public_suffix: bool,
    oracle: &O,
    options: &StemOptions,
) -> Vec<String>
where
    O: SuffixOracle + ?Sized,
{
    match extract_host(url, oracle, options) {
        Some(ExtractedHost::Ip(ip)) => vec![ip],
        Some(ExtractedHost::Domain(parts)) => subparts_of(&parts, include_public_suffix),
        None => Vec::new(),
    }
}

/// Build the subpart list for a host already split around its suffix.
pub(crate) fn subparts_of(parts: &SuffixParts, include_public_suffix: bool) -> Vec<String> {
    // Without a suffix the eTLD+1 is a single label: treat as malformed
    if parts.suffix.is_empty() {
        return Vec::new();
    }

    let labels: Vec<&str> = parts
        .subdomain
        .split('.')
        .chain(std::iter::once(parts.domain.as_str()))
        .filter(|label| !label.is_empty())
        .collect();

    let mut subparts: Vec<String> = (0..labels.len())
        .map(|start| format!("{}.{}", labels[start..].join("."), parts.suffix))
        .collect();

    if include_public_suffix {
        subparts.push(parts.suffix.clone());
    }

    subparts
}
