//! Shared test utilities for the simple-folio test suite.
//!
//! JSON-literal constructors for the two data shapes unit tests need most:
//! a content DTO, and the resolved display values it projects to.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = resolved_from(r#"{"site": {"brand": "Ari Vale"}}"#);
//! assert_eq!(site.title, "Ari Vale — Portfolio");
//! ```

use crate::content::SiteContent;
use crate::resolve;
use crate::types::ResolvedSite;

/// Parse a content document from a JSON literal. Panics on bad JSON;
/// fixture literals are test code.
pub fn content_from(json: &str) -> SiteContent {
    serde_json::from_str(json)
        .unwrap_or_else(|err| panic!("test content literal failed to parse: {err}"))
}

/// Parse and resolve in one step.
pub fn resolved_from(json: &str) -> ResolvedSite {
    resolve::resolve(&content_from(json))
}
