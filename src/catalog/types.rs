//! Catalog record types

use super::profile::PokemonProfile;
use crate::pagination::{ItemStub, PageReference};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SPRITE_POINTER: &str = "/sprites/front_default";
const ARTWORK_POINTER: &str = "/sprites/other/official-artwork/front_default";

/// Enriched record for a single collection item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    /// Name from the listing stub
    pub name: String,
    /// Locator the detail record was fetched from
    pub url: String,
    /// Detail record exactly as returned upstream
    pub record: Value,
}

impl ItemDetail {
    /// Pair a stub with the record fetched from its locator
    pub fn new(stub: ItemStub, record: Value) -> Self {
        Self {
            name: stub.name,
            url: stub.url,
            record,
        }
    }

    /// Front-facing sprite URL
    pub fn sprite(&self) -> Option<&str> {
        self.record.pointer(SPRITE_POINTER).and_then(Value::as_str)
    }

    /// Official artwork URL
    pub fn artwork(&self) -> Option<&str> {
        self.record.pointer(ARTWORK_POINTER).and_then(Value::as_str)
    }

    /// Typed display view of the record
    pub fn profile(&self) -> PokemonProfile {
        PokemonProfile::from_record(&self.name, &self.record)
    }
}

/// One enriched page of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Items in listing order
    pub items: Vec<ItemDetail>,
    /// Cursor for the following page, absent at the end of the collection
    pub next_page: Option<PageReference>,
}

impl LoadResult {
    /// Result for a page past the end of the collection
    pub fn end() -> Self {
        Self::default()
    }

    /// Whether no further pages can be requested
    pub fn is_end(&self) -> bool {
        self.next_page.is_none()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick one item at random to feature
    pub fn pick_featured<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&ItemDetail> {
        self.items.choose(rng)
    }
}
