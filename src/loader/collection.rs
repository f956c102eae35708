//! Paginated fetch-and-enrich loader

use crate::catalog::{ItemDetail, LoadResult};
use crate::config::LoaderConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, JsonSource};
use crate::pagination::{apply_page_size, next_page_for, CollectionListing, ItemStub, PageReference};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Loads enriched pages of a collection
///
/// Holds no state between calls: every load issues its listing request and
/// one detail request per listed item, and nothing is cached. Concurrent
/// loads are independent of each other.
pub struct CollectionLoader {
    source: Arc<dyn JsonSource>,
    config: LoaderConfig,
    api_base: Url,
}

impl CollectionLoader {
    /// Create a loader backed by the HTTP client
    pub fn new(config: LoaderConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http.client_config())?;
        Self::with_source(config, Arc::new(client))
    }

    /// Create a loader backed by any JSON source
    pub fn with_source(config: LoaderConfig, source: Arc<dyn JsonSource>) -> Result<Self> {
        config.validate()?;
        let api_base = config.api_base()?;
        Ok(Self {
            source,
            config,
            api_base,
        })
    }

    /// Get the loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the first page of the collection at `endpoint`
    ///
    /// `endpoint` may be absolute or relative to the configured API root. A
    /// leading `/` is ignored, so `"/berry"` and `"berry"` name the same
    /// collection. The configured page size is added as a query parameter.
    pub async fn load_first_page(&self, endpoint: &str) -> Result<LoadResult> {
        let endpoint = self.api_base.join(endpoint.trim_start_matches('/'))?;
        let url = apply_page_size(
            &endpoint,
            &self.config.page_size_param,
            self.config.page_size,
        );
        self.load_page(url).await
    }

    /// Load the first page of the configured collection
    pub async fn load_default_first_page(&self) -> Result<LoadResult> {
        let endpoint = self.config.collection_url()?;
        self.load_first_page(endpoint.as_str()).await
    }

    /// Load the page a previous result pointed at
    ///
    /// The cursor is fetched verbatim, whatever host the listing pointed at.
    pub async fn load_next_page(&self, page: &PageReference) -> Result<LoadResult> {
        self.load_page(page.url().clone()).await
    }

    /// Fetch a single item's detail record by name
    pub async fn load_item(&self, name: &str) -> Result<ItemDetail> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(Error::not_found(name));
        }

        let url = self.config.item_url(&name)?;
        debug!("Fetching item {} from {}", name, url);
        match self.source.get_json(&url).await {
            Ok(record) => Ok(ItemDetail::new(ItemStub::new(name, url.as_str()), record)),
            Err(Error::HttpStatus { status: 404, .. }) => Err(Error::not_found(name)),
            Err(e) => Err(e),
        }
    }

    /// Follow `next_page` cursors from the first page, accumulating items
    ///
    /// Stops at the end of the collection or after `max_pages` pages (at least
    /// one page is always loaded). The returned cursor is where a later crawl
    /// would resume, or absent if the collection was exhausted. Any failing
    /// page fails the whole crawl.
    pub async fn crawl(&self, max_pages: Option<usize>) -> Result<LoadResult> {
        let first = self.load_default_first_page().await?;
        let mut items = first.items;
        let mut next_page = first.next_page;
        let mut pages = 1;

        while max_pages.is_none_or(|max| pages < max) {
            let Some(reference) = next_page.as_ref() else {
                break;
            };
            let page = self.load_next_page(reference).await?;
            items.extend(page.items);
            next_page = page.next_page;
            pages += 1;
        }

        info!("Crawled {} pages, {} items", pages, items.len());
        Ok(LoadResult { items, next_page })
    }

    /// Shared algorithm for first and continuation pages
    async fn load_page(&self, url: Url) -> Result<LoadResult> {
        debug!("Fetching listing {}", url);
        let body = self.source.get_json(&url).await?;
        let listing = CollectionListing::from_value(body, &url)?;

        if listing.results.is_empty() {
            info!("Listing {} is empty, end of collection", url);
            return Ok(LoadResult::end());
        }

        let next_page = next_page_for(&listing, &url)?;
        let items = self.enrich(listing.results, &url).await?;

        info!(
            "Loaded {} items from {} ({})",
            items.len(),
            url,
            if next_page.is_some() { "more available" } else { "last page" }
        );
        Ok(LoadResult { items, next_page })
    }

    /// Fetch every stub's detail record concurrently
    ///
    /// All requests are in flight at once. Each completion carries its listing
    /// index and is stored in that slot, so the output follows listing order
    /// whatever order the responses arrive in. The first failure returns
    /// immediately; dropping `pending` cancels the requests still running.
    async fn enrich(&self, stubs: Vec<ItemStub>, listing_url: &Url) -> Result<Vec<ItemDetail>> {
        let located = stubs
            .into_iter()
            .map(|stub| {
                let url = stub.locator(listing_url)?;
                Ok((stub, url))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut slots: Vec<Option<ItemDetail>> = (0..located.len()).map(|_| None).collect();
        let source = &self.source;

        let mut pending: FuturesUnordered<_> = located
            .into_iter()
            .enumerate()
            .map(|(index, (stub, url))| async move {
                debug!("Fetching detail {} from {}", stub.name, url);
                let record = source.get_json(&url).await;
                (index, stub, record)
            })
            .collect();

        while let Some((index, stub, record)) = pending.next().await {
            slots[index] = Some(ItemDetail::new(stub, record?));
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

impl std::fmt::Debug for CollectionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
