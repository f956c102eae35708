//! Pagination module
//!
//! Collection listings and the opaque cursor used to continue them.
//!
//! # Overview
//!
//! A collection listing is one page of lightweight item stubs plus an
//! optional `next` locator. This module decodes listings, turns the `next`
//! field into a [`PageReference`], and decides when a collection has ended.

mod types;

pub use types::{apply_page_size, next_page_for, CollectionListing, ItemStub, PageReference};

#[cfg(test)]
mod tests;
