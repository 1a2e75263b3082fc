//! Core data structures produced by domain extraction.

/// Default label returned by [`get_scheme_or`](crate::get_scheme_or) callers
/// that want a sentinel instead of `None`.
pub const NO_SCHEME: &str = "no_scheme";

/// A hostname split around its public suffix.
///
/// - `suffix`: the longest matching public (or private) suffix, possibly
///   multi-label like "co.uk" or "apps.fbsbx.com", or empty when nothing
///   matched
/// - `domain`: the label immediately left of the suffix
/// - `subdomain`: everything left of the domain, joined with dots
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixParts {
    /// Labels left of the registrable domain (e.g., "www" or "a.b")
    pub subdomain: String,
    /// Label immediately left of the suffix (e.g., "google")
    pub domain: String,
    /// Public suffix (e.g., "com", "co.uk")
    pub suffix: String,
}

impl SuffixParts {
    /// Create new suffix parts.
    pub fn new(subdomain: String, domain: String, suffix: String) -> Self {
        Self {
            subdomain,
            domain,
            suffix,
        }
    }

    /// Split `host` using the suffix an oracle returned for it.
    ///
    /// An empty suffix, or one that is not a dot-aligned tail of `host`,
    /// leaves the rightmost label as the domain.
    pub fn from_host(host: &str, suffix: &str) -> Self {
        if suffix.is_empty() {
            return Self::split_unknown(host);
        }
        if host == suffix {
            return Self::new(String::new(), String::new(), suffix.to_string());
        }

        match host
            .strip_suffix(suffix)
            .and_then(|rest| rest.strip_suffix('.'))
        {
            Some(rest) => {
                let (subdomain, domain) = match rest.rsplit_once('.') {
                    Some((subdomain, domain)) => (subdomain, domain),
                    None => ("", rest),
                };
                Self::new(subdomain.to_string(), domain.to_string(), suffix.to_string())
            }
            None => Self::split_unknown(host),
        }
    }

    fn split_unknown(host: &str) -> Self {
        let (subdomain, domain) = match host.rsplit_once('.') {
            Some((subdomain, domain)) => (subdomain, domain),
            None => ("", host),
        };
        Self::new(subdomain.to_string(), domain.to_string(), String::new())
    }

    /// The eTLD+1: `domain.suffix`, or `domain` alone when no suffix matched.
    ///
    /// A host that is itself a public suffix has no registrable domain and
    /// yields an empty string.
    pub fn registrable_domain(&self) -> String {
        if self.suffix.is_empty() {
            self.domain.clone()
        } else if self.domain.is_empty() {
            String::new()
        } else {
            format!("{}.{}", self.domain, self.suffix)
        }
    }
}

/// What a URL's host turned out to be after stemming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedHost {
    /// The host is an IPv4 or IPv6 literal; no suffix lookup was made.
    Ip(String),
    /// The host is a domain name, split around its public suffix.
    Domain(SuffixParts),
}

impl ExtractedHost {
    /// The eTLD+1 of this host, or the literal itself for IP hosts.
    pub fn registrable_domain(&self) -> String {
        match self {
            ExtractedHost::Ip(ip) => ip.clone(),
            ExtractedHost::Domain(parts) => parts.registrable_domain(),
        }
    }
}
