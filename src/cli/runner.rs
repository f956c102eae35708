//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::render::{render_featured, render_item, render_page};
use crate::config::{LoaderConfig, BASE_URL_ENV};
use crate::error::{Result, ResultExt};
use crate::loader::CollectionLoader;
use crate::pagination::PageReference;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::List { endpoint, limit } => {
                self.list(endpoint.as_deref(), *limit).await?
            }
            Commands::More { page } => self.more(page).await?,
            Commands::Show { name } => self.show(name).await?,
            Commands::Crawl { max_pages } => self.crawl(*max_pages).await?,
            Commands::Featured => self.featured().await?,
        };
        println!("{output}");
        Ok(())
    }

    /// Resolve configuration: file, then environment, then flags
    fn load_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.cli.config {
            Some(path) => LoaderConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => LoaderConfig::default(),
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            debug!("Using {} from {}", base_url, BASE_URL_ENV);
            config.base_url = base_url;
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        Ok(config)
    }

    fn format(&self) -> OutputFormat {
        self.cli.format
    }

    async fn list(&self, endpoint: Option<&str>, limit: Option<u32>) -> Result<String> {
        let mut config = self.load_config()?;
        if let Some(limit) = limit {
            config = config.with_page_size(limit);
        }
        let loader = CollectionLoader::new(config)?;

        let result = match endpoint {
            Some(endpoint) => loader.load_first_page(endpoint).await?,
            None => loader.load_default_first_page().await?,
        };
        render_page(&result, self.format())
    }

    async fn more(&self, page: &str) -> Result<String> {
        let reference = PageReference::parse(page)?;
        let loader = CollectionLoader::new(self.load_config()?)?;
        let result = loader.load_next_page(&reference).await?;
        render_page(&result, self.format())
    }

    async fn show(&self, name: &str) -> Result<String> {
        let loader = CollectionLoader::new(self.load_config()?)?;
        let item = loader.load_item(name).await?;
        render_item(&item, self.format())
    }

    async fn crawl(&self, max_pages: Option<usize>) -> Result<String> {
        let loader = CollectionLoader::new(self.load_config()?)?;
        let result = loader.crawl(max_pages).await?;
        render_page(&result, self.format())
    }

    async fn featured(&self) -> Result<String> {
        let loader = CollectionLoader::new(self.load_config()?)?;
        let result = loader.load_default_first_page().await?;
        let featured = result.pick_featured(&mut rand::rng());
        render_featured(featured, self.format())
    }
}
