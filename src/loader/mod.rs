//! Collection loader module
//!
//! Fetch one page of a collection and enrich every stub on it with its detail
//! record.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokedex_loader::{CollectionLoader, LoaderConfig};
//!
//! let loader = CollectionLoader::new(LoaderConfig::default())?;
//! let first = loader.load_default_first_page().await?;
//! if let Some(next) = &first.next_page {
//!     let second = loader.load_next_page(next).await?;
//! }
//! ```

mod collection;

pub use collection::CollectionLoader;
