//! Host normalization and URL stemming.
//!
//! Stemming reduces a URL to `(scheme://)?(authority|hostname)(path)?`,
//! always dropping userinfo, query and fragment, so URLs can be grouped
//! and compared.

use std::net::{IpAddr, Ipv4Addr};

use log::debug;
use url::Host;

use crate::config::{IneligibleScheme, StemOptions};
use crate::url::parser::parse_url;
use crate::url::resolver::{resolve, Inference};

/// Check whether `host` is a bare IPv4 or IPv6 literal.
///
/// Brackets, ports and zone ids must be stripped by the caller.
///
/// # Examples
///
/// ```
/// use domain_utils::is_ip_literal;
///
/// assert!(is_ip_literal("192.168.1.1"));
/// assert!(is_ip_literal("2001:db8::1"));
/// assert!(!is_ip_literal("[::1]"));
/// assert!(!is_ip_literal("example.com"));
/// ```
pub fn is_ip_literal(host: &str) -> bool {
    host.parse::<IpAddr>().is_ok()
}

/// Normalize a hostname for suffix lookup.
///
/// This function:
/// 1. Drops one trailing dot
/// 2. Lower-cases and applies IDNA mapping to domain names
/// 3. Canonicalizes IPv6 literals
///
/// Hosts the URL host parser rejects are only ASCII lower-cased, and so are
/// numeric hosts that are not dotted-quad IPv4 literals (`1`, `192.168.1`,
/// `0x7f.1`): they are never expanded into an address.
pub fn normalize_host(host: &str) -> String {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() {
        return String::new();
    }

    // IPv6 literals arrive without brackets
    let parsed = if host.contains(':') {
        Host::parse(&format!("[{}]", host))
    } else {
        Host::parse(host)
    };

    match parsed {
        Ok(Host::Domain(domain)) => domain,
        Ok(Host::Ipv4(addr)) if host.parse::<Ipv4Addr>().is_ok() => addr.to_string(),
        Ok(Host::Ipv4(_)) => {
            debug!("Keeping numeric host {:?} as written", host);
            host.to_ascii_lowercase()
        }
        Ok(Host::Ipv6(addr)) => addr.to_string(),
        Err(err) => {
            debug!("Keeping unparsable host {:?} as written: {}", host, err);
            host.to_ascii_lowercase()
        }
    }
}

/// A URL reduced to the parts stemming keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmedUrl {
    /// Resolved scheme, lower case (the implicit one if the URL had none)
    pub scheme: String,
    /// Normalized hostname, never empty; IPv6 without brackets
    pub hostname: String,
    /// Explicit port, if any
    pub port: Option<u16>,
    /// Path as written, possibly empty
    pub path: String,
}

impl StemmedUrl {
    /// `host[:port]`, with IPv6 hosts bracketed.
    pub fn authority(&self) -> String {
        let host = if self.hostname.contains(':') {
            format!("[{}]", self.hostname)
        } else {
            self.hostname.clone()
        };

        match self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        }
    }

    /// Assemble the stemmed string according to `options`.
    pub fn render(&self, options: &StemOptions) -> String {
        let mut stemmed = String::new();

        if options.include_scheme {
            stemmed.push_str(&self.scheme);
            stemmed.push_str("://");
        }

        if options.use_authority {
            stemmed.push_str(&self.authority());
        } else {
            stemmed.push_str(&self.hostname);
        }

        if options.include_path {
            stemmed.push_str(&self.path);
        }

        stemmed
    }
}

/// Resolve and parse a URL, keeping only what stemming needs.
///
/// Returns `None` when the URL's scheme is not eligible under `options`
/// or when no host can be found in it.
pub fn stem_components(url: &str, options: &StemOptions) -> Option<StemmedUrl> {
    let adjusted = resolve(url, Inference::ImplicitHost);
    let parts = parse_url(&adjusted);

    let scheme = match (parts.scheme(), options.implicit_scheme.as_deref()) {
        (Some(scheme), _) => scheme,
        (None, Some(implicit)) => implicit.to_ascii_lowercase(),
        (None, None) => {
            debug!("No scheme and no implicit scheme for {:?}", url);
            return None;
        }
    };

    if !options.is_eligible(&scheme) {
        debug!("Scheme {:?} is not eligible for stemming: {:?}", scheme, url);
        return None;
    }

    let Some(hostname) = parts.hostname() else {
        debug!("No host found in {:?}", url);
        return None;
    };

    Some(StemmedUrl {
        scheme,
        hostname,
        port: parts.port(),
        path: parts.path.to_string(),
    })
}

/// Reduce a URL to `(scheme://)?(authority|hostname)(path)?`.
///
/// Query strings and fragments are always dropped. URLs without a scheme
/// are treated as having `options.implicit_scheme`, and a bare
/// `host:port[/path]` is read as an authority rather than a scheme.
/// URLs with an ineligible scheme, or no host at all, are returned as-is
/// or as an empty string per `options.on_ineligible_scheme`.
///
/// # Examples
///
/// ```
/// use domain_utils::{stem_url, StemOptions};
///
/// let options = StemOptions::default();
/// assert_eq!(
///     stem_url("https://my.domain.cloudfront.net/a/file.html?a=1", &options),
///     "my.domain.cloudfront.net/a/file.html"
/// );
/// assert_eq!(
///     stem_url("my.example.com:8080/path/to/webapp.htm?aced=1", &options),
///     "my.example.com:8080/path/to/webapp.htm"
/// );
/// assert_eq!(stem_url("about:blank", &options), "about:blank");
/// ```
pub fn stem_url(url: &str, options: &StemOptions) -> String {
    match stem_components(url, options) {
        Some(stemmed) => stemmed.render(options),
        None => match options.on_ineligible_scheme {
            IneligibleScheme::ReturnOriginal => url.to_string(),
            IneligibleScheme::ReturnEmpty => String::new(),
        },
    }
}

/// Alias of [`stem_url`].
pub fn get_stripped_url(url: &str, options: &StemOptions) -> String {
    stem_url(url, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_literals() {
        assert!(is_ip_literal("127.0.0.1"));
        assert!(is_ip_literal("8.8.8.8"));
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("fe80::1"));
        assert!(!is_ip_literal(""));
        assert!(!is_ip_literal("256.1.1.1"));
        assert!(!is_ip_literal("127.0.0.1:80"));
        assert!(!is_ip_literal("my.domain.net"));
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("WWW.Example.COM"), "www.example.com");
        assert_eq!(normalize_host("example.com."), "example.com");
        assert_eq!(normalize_host("2001:DB8::1"), "2001:db8::1");
        assert_eq!(normalize_host("café.com"), "xn--caf-dma.com");
        assert_eq!(normalize_host(""), "");
    }

    #[test]
    fn test_numeric_hosts_are_not_expanded() {
        assert_eq!(normalize_host("1"), "1");
        assert_eq!(normalize_host("192.168.1"), "192.168.1");
        assert_eq!(normalize_host("0x7F.1"), "0x7f.1");
        assert_eq!(normalize_host("123456789"), "123456789");
        assert_eq!(normalize_host("192.168.1.1"), "192.168.1.1");
    }

    #[test]
    fn test_authority_brackets_ipv6() {
        let stemmed = StemmedUrl {
            scheme: "http".to_string(),
            hostname: "::1".to_string(),
            port: Some(8080),
            path: "/".to_string(),
        };
        assert_eq!(stemmed.authority(), "[::1]:8080");
        assert_eq!(
            stemmed.render(&StemOptions::default().with_authority(false)),
            "::1/"
        );
    }

    #[test]
    fn test_render_all_parts() {
        let stemmed = StemmedUrl {
            scheme: "wss".to_string(),
            hostname: "domain.com".to_string(),
            port: Some(8080),
            path: "/path/to/test.html".to_string(),
        };
        let options = StemOptions::default().with_scheme(true);
        assert_eq!(
            stemmed.render(&options),
            "wss://domain.com:8080/path/to/test.html"
        );
        assert_eq!(
            stemmed.render(&options.with_path(false)),
            "wss://domain.com:8080"
        );
    }

    #[test]
    fn test_stem_components_ineligible() {
        let options = StemOptions::default();
        assert_eq!(stem_components("about:blank", &options), None);
        assert_eq!(stem_components("/my/path/is.html", &options), None);
        assert_eq!(stem_components("", &options), None);
    }

    #[test]
    fn test_stem_components_implicit_scheme() {
        let stemmed = stem_components("Domain.com/path?a=1", &StemOptions::default()).unwrap();
        assert_eq!(stemmed.scheme, "http");
        assert_eq!(stemmed.hostname, "domain.com");
        assert_eq!(stemmed.port, None);
        assert_eq!(stemmed.path, "/path");
    }

    #[test]
    fn test_userinfo_is_dropped() {
        let options = StemOptions::default();
        assert_eq!(
            stem_url("https://user:pw@example.com/x", &options),
            "example.com/x"
        );
    }
}
