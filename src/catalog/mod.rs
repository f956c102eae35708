//! Catalog module
//!
//! Enriched item records and the page-shaped result the loader returns.
//!
//! # Overview
//!
//! - `ItemDetail` - a stub's name and locator plus its full detail record
//! - `LoadResult` - one enriched page and the cursor for the next one
//! - `PokemonProfile` - a typed, lenient view of a detail record for display

mod profile;
mod types;

pub use profile::{BaseStat, PokemonProfile};
pub use types::{ItemDetail, LoadResult};
