//! URL resolution for discovered references
//!
//! Pages reference images and links with anything from absolute URLs to
//! bare relative paths; everything is resolved against the page URL before
//! it is fetched or followed.

use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a string that must already be an absolute URL (the crawl seed)
pub fn parse_absolute(raw: &str) -> UrlResult<Url> {
    Url::parse(raw).map_err(|source| UrlError::Parse {
        url: raw.to_string(),
        source,
    })
}

/// Resolves a possibly-relative reference against a base URL
///
/// Resolution follows RFC 3986 semantics (scheme, authority, path and query
/// merging, dot-segment removal) via [`Url::join`]. Absolute references pass
/// through untouched.
pub fn resolve_reference(reference: &str, base: &Url) -> UrlResult<Url> {
    base.join(reference).map_err(|source| UrlError::Resolve {
        reference: reference.to_string(),
        base: base.to_string(),
        source,
    })
}

/// Returns true if the URL should be followed as a page link
///
/// Only http(s) pages are crawled. Image references are not filtered this
/// way: any resolvable image URL gets a download attempt.
pub fn is_followable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
