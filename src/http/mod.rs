//! HTTP client module
//!
//! Provides the JSON transport used by the loader.
//!
//! # Features
//!
//! - **JsonSource seam**: the loader only needs "GET this URL as JSON"
//! - **Optional retries**: off by default, with constant/linear/exponential backoff
//! - **Status mapping**: any non-2xx response becomes an `HttpStatus` error

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, JsonSource};
