//! Lenient splitting of URL strings into their components.
//!
//! Unlike [`url::Url::parse`], this never fails: relative references,
//! scheme-less hosts and pseudo-schemes all split into whatever slots they
//! lexically fill. The rules are the classic `urlsplit` ones:
//!
//! - the scheme is the prefix before the first `:` when it only contains
//!   `[A-Za-z0-9+.-]`, unless everything after the colon is digits
//!   (`host:5000` is a path, not a scheme)
//! - a netloc is only recognized after `//`
//! - the fragment starts at the first `#`, the query at the first `?`

use crate::url::normalizer::normalize_host;

/// Raw components of a URL string. All slices borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlComponents<'a> {
    /// Scheme as written, without `:` (empty if none)
    pub scheme: &'a str,
    /// `userinfo@host:port` without the leading `//` (empty if none)
    pub netloc: &'a str,
    /// Path, possibly empty
    pub path: &'a str,
    /// Query without the leading `?`
    pub query: Option<&'a str>,
    /// Fragment without the leading `#`
    pub fragment: Option<&'a str>,
}

impl<'a> UrlComponents<'a> {
    /// The scheme in lower case, or `None` if the URL has no scheme.
    pub fn scheme(&self) -> Option<String> {
        if self.scheme.is_empty() {
            None
        } else {
            Some(self.scheme.to_ascii_lowercase())
        }
    }

    /// The netloc without userinfo: `host[:port]`.
    pub fn host_port(&self) -> &'a str {
        match self.netloc.rsplit_once('@') {
            Some((_, host_port)) => host_port,
            None => self.netloc,
        }
    }

    /// The host as written, without brackets, userinfo or port.
    pub fn raw_hostname(&self) -> &'a str {
        split_host_port(self.host_port()).0
    }

    /// The port text as written (digits not checked).
    pub fn raw_port(&self) -> Option<&'a str> {
        split_host_port(self.host_port()).1
    }

    /// The normalized host, or `None` if the netloc carries no host.
    pub fn hostname(&self) -> Option<String> {
        let raw = self.raw_hostname();
        if raw.is_empty() {
            return None;
        }
        let host = normalize_host(raw);
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// The port, if the netloc carries a valid one.
    pub fn port(&self) -> Option<u16> {
        self.raw_port().and_then(parse_port)
    }
}

/// Split a URL string into its components.
///
/// # Examples
///
/// ```
/// use domain_utils::parse_url;
///
/// let parts = parse_url("https://user@Example.com:8080/a/b?q=1#top");
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.netloc, "user@Example.com:8080");
/// assert_eq!(parts.path, "/a/b");
/// assert_eq!(parts.query, Some("q=1"));
/// assert_eq!(parts.fragment, Some("top"));
/// assert_eq!(parts.hostname(), Some("example.com".to_string()));
/// assert_eq!(parts.port(), Some(8080));
///
/// // Without `//` there is no netloc
/// let bare = parse_url("example.com:5000");
/// assert_eq!(bare.scheme, "");
/// assert_eq!(bare.path, "example.com:5000");
/// ```
pub fn parse_url(url: &str) -> UrlComponents<'_> {
    let (scheme, rest) = split_scheme(url);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    let (rest, fragment) = match rest.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (rest, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    UrlComponents {
        scheme,
        netloc,
        path,
        query,
        fragment,
    }
}

/// Check whether a character may appear in a scheme.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Parse port text, accepting only plain ASCII digits in `u16` range.
pub(crate) fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

fn split_scheme(url: &str) -> (&str, &str) {
    let Some(idx) = url.find(':') else {
        return ("", url);
    };

    let candidate = &url[..idx];
    if candidate.is_empty() || !candidate.chars().all(is_scheme_char) {
        return ("", url);
    }

    let rest = &url[idx + 1..];
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        return ("", url);
    }

    (candidate, rest)
}

fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return match bracketed.split_once(']') {
            Some((host, rest)) => (host, rest.strip_prefix(':')),
            None => (bracketed, None),
        };
    }

    match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    }
}
