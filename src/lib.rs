// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Pokedex Loader
//!
//! Paginated fetch-and-enrich loading for the PokeAPI collection endpoints.
//!
//! A collection listing returns lightweight stubs (name + locator) and a cursor
//! to the next page. The loader fetches a listing, fetches every stub's detail
//! record concurrently, and returns the enriched items in listing order along
//! with the next cursor.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex_loader::{CollectionLoader, LoaderConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let loader = CollectionLoader::new(LoaderConfig::default())?;
//!
//!     let mut page = loader.load_default_first_page().await?;
//!     loop {
//!         for item in &page.items {
//!             println!("{} {:?}", item.name, item.sprite());
//!         }
//!         let Some(next) = page.next_page.clone() else {
//!             break;
//!         };
//!         page = loader.load_next_page(&next).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  load_first_page(endpoint)        load_next_page(cursor)
//!            │                               │
//!            └──────────────┬────────────────┘
//!                           ▼
//!                 GET listing ── results: [stub…], next
//!                           │
//!          ┌────────────────┼────────────────┐
//!          ▼                ▼                ▼
//!    GET stub[0].url  GET stub[1].url …  GET stub[n].url   (all in flight)
//!          └────────────────┼────────────────┘
//!                           ▼
//!          LoadResult { items (listing order), next_page }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the loader
pub mod error;

/// Common types and type aliases
pub mod types;

/// JSON transport over HTTP
pub mod http;

/// Collection listings and page cursors
pub mod pagination;

/// Enriched items and load results
pub mod catalog;

/// Loader configuration
pub mod config;

/// Paginated fetch-and-enrich loader
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{ItemDetail, LoadResult, PokemonProfile};
pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use loader::CollectionLoader;
pub use pagination::{ItemStub, PageReference};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
