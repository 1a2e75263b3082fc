//! Domain extraction pipeline.
//!
//! This module builds on URL stemming and a suffix oracle:
//! - eTLD+1 (registrable domain) extraction
//! - Hostname subpart hierarchies
//! - A reusable extractor holding a shared oracle and default options

pub mod etld1;
pub mod extractor;
pub mod subparts;

// Re-export main functionality
pub use etld1::{extract_host, get_etld1, get_ps_plus_1};
pub use extractor::{DomainExtractor, DomainExtractorBuilder};
pub use subparts::hostname_subparts;
