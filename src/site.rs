//! Everything needed to render a page, loaded once.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, ContentError, ContentStore};
use crate::routes::Router;
use chrono::Locale;
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("content: {0}")]
    Content(#[from] ContentError),
}

/// Validated content, config, and the route table.
#[derive(Debug, Clone)]
pub struct Site {
    pub content: ContentStore,
    pub config: SiteConfig,
    pub router: Router,
    locale: Locale,
}

impl Site {
    pub fn new(content: ContentStore, config: SiteConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let router = Router::new();
        content.validate(&router)?;
        let locale = config.date_locale()?;
        Ok(Self {
            content,
            config,
            router,
            locale,
        })
    }

    /// Load `config.toml` and `site.toml` from the content directory.
    pub fn load(source: &Path) -> Result<Self, SiteError> {
        let config = config::load_config(source)?;
        let router = Router::new();
        let content = content::load_content(source, &router)?;
        info!(
            "loaded {} nav entries, {} work entries, {} timeline entries",
            content.nav().len(),
            content.work().len(),
            content.timeline().len()
        );
        Self::new(content, config)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
