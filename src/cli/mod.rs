//! CLI module
//!
//! Command-line interface for browsing a collection.
//!
//! # Commands
//!
//! - `list` - Load the first page
//! - `more` - Load the page a previous cursor points at
//! - `show` - Show one item by name
//! - `crawl` - Follow cursors until the end (or a page limit)
//! - `featured` - Pick a random item from the first page

mod commands;
mod render;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use render::{render_featured, render_item, render_page};
pub use runner::Runner;
