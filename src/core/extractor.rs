//! Reusable extraction pipeline with an injected suffix oracle.

use std::sync::Arc;

use crate::config::StemOptions;
use crate::core::etld1::{extract_host, get_etld1};
use crate::core::subparts::hostname_subparts;
use crate::error::DomainError;
use crate::types::ExtractedHost;
use crate::url::normalizer::stem_url;
use crate::url::psl::{PslOracle, SuffixOracle};

type SharedOracle = Arc<dyn SuffixOracle + Send + Sync>;

/// Domain extractor holding one shared suffix oracle and default options.
///
/// The oracle is built once by the caller and shared read-only; cloning
/// an extractor is cheap and every call is independent, so extractors can
/// be used from many threads at once.
///
/// # Examples
///
/// ```
/// use domain_utils::{DomainExtractor, PslOracle};
///
/// let extractor = DomainExtractor::builder()
///     .oracle(PslOracle::new())
///     .build()?;
///
/// assert_eq!(extractor.etld1("http://foo.blah.apps.fbsbx.com"), "blah.apps.fbsbx.com");
/// assert_eq!(extractor.hostname_subparts("http://www.google.com", false), vec!["www.google.com", "google.com"]);
/// # Ok::<(), domain_utils::DomainError>(())
/// ```
#[derive(Clone)]
pub struct DomainExtractor {
    oracle: SharedOracle,
    stem_options: StemOptions,
    extraction_options: StemOptions,
}

impl DomainExtractor {
    /// Start configuring an extractor.
    pub fn builder() -> DomainExtractorBuilder {
        DomainExtractorBuilder::default()
    }

    /// Extractor over the compiled-in Public Suffix List, private domains
    /// included, with default options.
    pub fn with_builtin_list() -> Self {
        Self {
            oracle: Arc::new(PslOracle::new()),
            stem_options: StemOptions::default(),
            extraction_options: StemOptions::for_extraction(),
        }
    }

    pub fn stem_options(&self) -> &StemOptions {
        &self.stem_options
    }

    pub fn extraction_options(&self) -> &StemOptions {
        &self.extraction_options
    }

    /// Stem a URL with this extractor's stemming options.
    pub fn stem(&self, url: &str) -> String {
        stem_url(url, &self.stem_options)
    }

    /// Classify a URL's host. See [`extract_host`].
    pub fn extract_host(&self, url: &str) -> Option<ExtractedHost> {
        extract_host(url, self.oracle.as_ref(), &self.extraction_options)
    }

    /// eTLD+1 of a URL. See [`get_etld1`].
    pub fn etld1(&self, url: &str) -> String {
        get_etld1(url, self.oracle.as_ref(), &self.extraction_options)
    }

    /// Alias of [`DomainExtractor::etld1`].
    pub fn ps_plus_1(&self, url: &str) -> String {
        self.etld1(url)
    }

    /// Hostname subparts of a URL. See [`hostname_subparts`].
    pub fn hostname_subparts(&self, url: &str, include_public_suffix: bool) -> Vec<String> {
        hostname_subparts(
            url,
            include_public_suffix,
            self.oracle.as_ref(),
            &self.extraction_options,
        )
    }
}

impl std::fmt::Debug for DomainExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainExtractor")
            .field("stem_options", &self.stem_options)
            .field("extraction_options", &self.extraction_options)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DomainExtractor`].
///
/// An oracle must be supplied; `build` never falls back to a default one.
#[derive(Default)]
pub struct DomainExtractorBuilder {
    oracle: Option<SharedOracle>,
    stem_options: Option<StemOptions>,
    extraction_options: Option<StemOptions>,
}

impl DomainExtractorBuilder {
    /// Use `oracle` for suffix lookups.
    pub fn oracle<O>(mut self, oracle: O) -> Self
    where
        O: SuffixOracle + Send + Sync + 'static,
    {
        self.oracle = Some(Arc::new(oracle));
        self
    }

    /// Use an oracle already shared elsewhere.
    pub fn shared_oracle(mut self, oracle: SharedOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Options for [`DomainExtractor::stem`]. Defaults to `StemOptions::default()`.
    pub fn stem_options(mut self, options: StemOptions) -> Self {
        self.stem_options = Some(options);
        self
    }

    /// Options for eTLD+1 and subparts extraction.
    /// Defaults to `StemOptions::for_extraction()`.
    pub fn extraction_options(mut self, options: StemOptions) -> Self {
        self.extraction_options = Some(options);
        self
    }

    pub fn build(self) -> Result<DomainExtractor, DomainError> {
        let oracle = self.oracle.ok_or(DomainError::MissingSuffixProvider)?;

        Ok(DomainExtractor {
            oracle,
            stem_options: self.stem_options.unwrap_or_default(),
            extraction_options: self
                .extraction_options
                .unwrap_or_else(StemOptions::for_extraction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::psl::SuffixList;

    #[test]
    fn test_build_without_oracle_fails() {
        let result = DomainExtractor::builder().build();
        assert!(matches!(result, Err(DomainError::MissingSuffixProvider)));
    }

    #[test]
    fn test_build_with_custom_list() {
        let list: SuffixList = "moz.illa".parse().unwrap();
        let extractor = DomainExtractor::builder().oracle(list).build().unwrap();

        assert_eq!(
            extractor.etld1("http://foo.bar.moz.illa/path/to/webapp.htm?aced=1"),
            "bar.moz.illa"
        );
        assert_eq!(
            extractor.hostname_subparts("http://foo.bar.moz.illa/", true),
            vec!["foo.bar.moz.illa", "bar.moz.illa", "moz.illa"]
        );
    }

    #[test]
    fn test_shared_oracle() {
        let oracle: SharedOracle = Arc::new(PslOracle::new());
        let first = DomainExtractor::builder()
            .shared_oracle(Arc::clone(&oracle))
            .build()
            .unwrap();
        let second = DomainExtractor::builder()
            .shared_oracle(oracle)
            .stem_options(StemOptions::default().with_scheme(true))
            .build()
            .unwrap();

        assert_eq!(first.etld1("https://www.google.com"), "google.com");
        assert_eq!(first.stem("www.google.com/x?y"), "www.google.com/x");
        assert_eq!(second.stem("www.google.com/x?y"), "http://www.google.com/x");
    }

    #[test]
    fn test_builtin_list() {
        let extractor = DomainExtractor::with_builtin_list();
        assert_eq!(extractor.ps_plus_1("my.domain.cloudfront.net"), "domain.cloudfront.net");
        assert_eq!(extractor.extraction_options(), &StemOptions::for_extraction());
        assert_eq!(extractor.stem_options(), &StemOptions::default());
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = DomainExtractor::with_builtin_list();
        let handles: Vec<_> = ["http://a.example.com", "http://b.example.co.uk"]
            .into_iter()
            .map(|url| {
                let extractor = extractor.clone();
                std::thread::spawn(move || extractor.etld1(url))
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["example.com", "example.co.uk"]);
    }
}
