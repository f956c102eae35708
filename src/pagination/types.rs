//! Pagination types
//!
//! Listing model, page references and the end-of-collection rule.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

/// Lightweight record returned by a collection listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStub {
    /// Item name, unique within the collection
    pub name: String,
    /// Locator of the item's detail record
    pub url: String,
}

impl ItemStub {
    /// Create a new stub
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Resolve the detail locator against the listing it came from
    pub fn locator(&self, listing_url: &Url) -> Result<Url> {
        listing_url.join(&self.url).map_err(|e| {
            Error::decode(
                listing_url.as_str(),
                format!("item '{}' has an invalid url '{}': {e}", self.name, self.url),
            )
        })
    }
}

/// One page of a collection listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionListing {
    /// Total number of items in the collection, when reported
    #[serde(default)]
    pub count: Option<u64>,
    /// Locator of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// Locator of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Item stubs, in listing order
    pub results: Vec<ItemStub>,
}

impl CollectionListing {
    /// Decode a listing body fetched from `url`
    pub fn from_value(value: Value, url: &Url) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::decode(url.as_str(), format!("not a collection listing: {e}")))
    }
}

/// Opaque cursor identifying the next page of a collection
///
/// Produced by the loader from a listing's `next` field. Callers that persist a
/// cursor between runs get it back through [`PageReference::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PageReference(Url);

impl PageReference {
    /// Parse a cursor previously rendered with `to_string`
    pub fn parse(reference: &str) -> Result<Self> {
        let url = Url::parse(reference.trim())
            .map_err(|e| Error::invalid_reference(reference, e.to_string()))?;
        Self::from_url(url)
    }

    pub(crate) fn from_url(url: Url) -> Result<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_reference(
                url.as_str(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if url.host_str().is_none() {
            return Err(Error::invalid_reference(url.as_str(), "missing host"));
        }
        Ok(Self(url))
    }

    /// The locator this cursor points at
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// String form of the cursor
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<PageReference> for String {
    fn from(reference: PageReference) -> Self {
        reference.0.into()
    }
}

impl TryFrom<String> for PageReference {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

/// Compute the cursor for the page after `listing`
///
/// A listing with zero results ends the collection even when its `next`
/// field is set: no further items can follow an empty page. Otherwise a null
/// or blank `next` ends it, and anything else is resolved against the
/// listing's own URL.
pub fn next_page_for(listing: &CollectionListing, listing_url: &Url) -> Result<Option<PageReference>> {
    if listing.results.is_empty() {
        return Ok(None);
    }

    match listing.next.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(next) => {
            let url = listing_url
                .join(next)
                .map_err(|e| Error::invalid_reference(next, e.to_string()))?;
            PageReference::from_url(url).map(Some)
        }
    }
}

/// Set the page-size query parameter on a collection endpoint
///
/// An existing value for `param` is replaced; other query pairs are kept in
/// their original order.
pub fn apply_page_size(endpoint: &Url, param: &str, page_size: u32) -> Url {
    let kept: Vec<(String, String)> = endpoint
        .query_pairs()
        .filter(|(key, _)| key.as_ref() != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(param, &page_size.to_string());
    url
}
