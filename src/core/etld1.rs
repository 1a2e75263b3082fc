//! eTLD+1 extraction.

use log::trace;

use crate::config::StemOptions;
use crate::types::{ExtractedHost, SuffixParts};
use crate::url::normalizer::{is_ip_literal, stem_components};
use crate::url::psl::SuffixOracle;

/// Stem a URL down to its host and classify it.
///
/// Only the scheme-eligibility fields of `options` matter here; the host
/// is always taken without port, path or scheme. Returns `None` when the
/// URL has an ineligible scheme or no host. IP hosts are returned without
/// consulting the oracle; otherwise the oracle is queried exactly once.
pub fn extract_host<O>(url: &str, oracle: &O, options: &StemOptions) -> Option<ExtractedHost>
where
    O: SuffixOracle + ?Sized,
{
    let stemmed = stem_components(url, options)?;
    let host = stemmed.hostname;

    if is_ip_literal(&host) {
        return Some(ExtractedHost::Ip(host));
    }

    let suffix = oracle.longest_public_suffix(&host);
    trace!("Host {:?} has public suffix {:?}", host, suffix);

    Some(ExtractedHost::Domain(SuffixParts::from_host(&host, &suffix)))
}

/// Get the eTLD+1 (registrable domain) of a URL.
///
/// Returns an empty string when no eTLD+1 can be found (pseudo-schemes,
/// relative URLs, hosts that are themselves public suffixes), and the IP
/// itself when the host is an IP literal.
///
/// # Examples
///
/// ```
/// use domain_utils::{get_etld1, PslOracle, StemOptions};
///
/// let oracle = PslOracle::new();
/// let options = StemOptions::for_extraction();
///
/// assert_eq!(get_etld1("https://my.domain.cloudfront.net", &oracle, &options), "domain.cloudfront.net");
/// assert_eq!(get_etld1("http://www.google.com#anchor", &oracle, &options), "google.com");
/// assert_eq!(get_etld1("http://127.0.0.1/foo.html", &oracle, &options), "127.0.0.1");
/// assert_eq!(get_etld1("about:blank", &oracle, &options), "");
/// ```
pub fn get_etld1<O>(url: &str, oracle: &O, options: &StemOptions) -> String
where
    O: SuffixOracle + ?Sized,
{
    extract_host(url, oracle, options)
        .map(|host| host.registrable_domain())
        .unwrap_or_default()
}

/// Alias of [`get_etld1`].
pub fn get_ps_plus_1<O>(url: &str, oracle: &O, options: &StemOptions) -> String
where
    O: SuffixOracle + ?Sized,
{
    get_etld1(url, oracle, options)
}
