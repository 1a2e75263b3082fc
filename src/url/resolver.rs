//! Scheme and port recovery for ambiguous URL strings.
//!
//! Without a `//` introducer, `host:port` is lexically identical to
//! `scheme:opaque`. A single decision table, evaluated once per URL,
//! decides which reading applies and rewrites the string so the generic
//! parser sees an authority:
//!
//! | Shape                                   | Rewrite           |
//! |-----------------------------------------|-------------------|
//! | `x://...` (explicit authority)          | unchanged         |
//! | scheme slot has a `.` or is an IP       | `//` + url        |
//! | `label:digits[/?#...]` (stemming only)  | `//` + url        |
//! | bare `host:digits` (port recovery only) | `//` + url + `/`  |
//! | scheme-less host (stemming only)        | `//` + url        |
//! | anything else                           | unchanged         |

use std::borrow::Cow;

use log::debug;

use crate::url::normalizer::is_ip_literal;
use crate::url::parser::{parse_port, parse_url};

/// How far the resolver goes in reading a scheme-less URL as a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inference {
    /// Only fix the `host:port` ambiguity.
    AsWritten,
    /// Also read any scheme-less, non-path URL as `host[/path]`.
    ImplicitHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    Keep,
    Authority,
    AuthorityWithRoot,
}

fn decide(url: &str, inference: Inference) -> Adjustment {
    let parts = parse_url(url);

    if !parts.scheme.is_empty() {
        let after_scheme = &url[parts.scheme.len() + 1..];
        if after_scheme.starts_with("//") {
            return Adjustment::Keep;
        }
        if parts.scheme.contains('.') || is_ip_literal(parts.scheme) {
            return Adjustment::Authority;
        }
        if inference == Inference::ImplicitHost && starts_with_port(after_scheme) {
            return Adjustment::Authority;
        }
        return Adjustment::Keep;
    }

    if !parts.netloc.is_empty() || parts.path.is_empty() || url.starts_with('/') {
        return Adjustment::Keep;
    }

    if inference == Inference::AsWritten && parts.path == url && is_bare_host_port(url) {
        return Adjustment::AuthorityWithRoot;
    }

    match inference {
        Inference::ImplicitHost => Adjustment::Authority,
        Inference::AsWritten => Adjustment::Keep,
    }
}

/// Digits ending at a path, query or fragment delimiter.
fn starts_with_port(rest: &str) -> bool {
    let end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    end > 0 && rest[..end].bytes().all(|b| b.is_ascii_digit())
}

fn is_bare_host_port(url: &str) -> bool {
    match url.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty()
                && !host.contains('/')
                && !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

pub(crate) fn resolve(url: &str, inference: Inference) -> Cow<'_, str> {
    let url = url.trim();

    match decide(url, inference) {
        Adjustment::Keep => Cow::Borrowed(url),
        Adjustment::Authority => {
            debug!("Reading {:?} as an authority", url);
            Cow::Owned(format!("//{}", url))
        }
        Adjustment::AuthorityWithRoot => {
            debug!("Reading {:?} as a bare host and port", url);
            Cow::Owned(format!("//{}/", url))
        }
    }
}

/// Rewrite a URL whose `host:port` would otherwise be parsed as a scheme.
///
/// # Examples
///
/// ```
/// use domain_utils::adapt_url_for_port_and_scheme;
///
/// assert_eq!(
///     adapt_url_for_port_and_scheme("domain.com:8080/path?a=1"),
///     "//domain.com:8080/path?a=1"
/// );
/// assert_eq!(adapt_url_for_port_and_scheme("domain.com:8080"), "//domain.com:8080/");
/// assert_eq!(adapt_url_for_port_and_scheme("http://domain.com/"), "http://domain.com/");
/// ```
pub fn adapt_url_for_port_and_scheme(url: &str) -> Cow<'_, str> {
    resolve(url, Inference::AsWritten)
}

/// Get the scheme of a URL, lower-cased.
///
/// A `host:port` prefix is not mistaken for a scheme.
///
/// # Examples
///
/// ```
/// use domain_utils::get_scheme;
///
/// assert_eq!(get_scheme("https://domain.net"), Some("https".to_string()));
/// assert_eq!(get_scheme("about:config"), Some("about".to_string()));
/// assert_eq!(get_scheme("domain.net"), None);
/// assert_eq!(get_scheme("domain.net:8080/index.html"), None);
/// ```
pub fn get_scheme(url: &str) -> Option<String> {
    let adjusted = adapt_url_for_port_and_scheme(url);
    parse_url(&adjusted).scheme()
}

/// Get the scheme of a URL, or `default` if it has none.
pub fn get_scheme_or(url: &str, default: &str) -> String {
    get_scheme(url).unwrap_or_else(|| default.to_string())
}

/// Get the explicit port of a URL.
///
/// In non-strict mode only a port inside a `//`-introduced authority
/// counts, so a scheme-less `example.com:80/path` has none. Strict mode
/// first resolves the `host:port` ambiguity and then accepts trailing
/// digits after the last `:` of the authority-like prefix.
///
/// # Examples
///
/// ```
/// use domain_utils::get_port;
///
/// assert_eq!(get_port("ws://example.com:5000", false), Some(5000));
/// assert_eq!(get_port("example.com:5000", false), None);
/// assert_eq!(get_port("example.com:5000", true), Some(5000));
/// assert_eq!(get_port("https://domain.net", true), None);
/// ```
pub fn get_port(url: &str, strict: bool) -> Option<u16> {
    if !strict {
        return parse_url(url.trim()).port();
    }

    let adjusted = adapt_url_for_port_and_scheme(url);
    let parts = parse_url(&adjusted);
    if !parts.netloc.is_empty() {
        return parts.port();
    }

    let end = adjusted
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(adjusted.len());
    let (_, port) = adjusted[..end].rsplit_once(':')?;
    parse_port(port)
}
