//! Application state shared across handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use renderer::{FontSet, Rasterizer};
use todo_parser::{FsTodoStore, TodoSource};

use crate::config::ServiceConfig;
use crate::quotes::QuoteProvider;

/// Read-only after startup apart from the quote cache.
pub struct AppState {
    pub config: ServiceConfig,
    pub todos: Arc<dyn TodoSource>,
    pub rasterizer: Rasterizer,
    pub quotes: QuoteProvider,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let fonts = FontSet::load(&config.fonts.dir, &config.fonts.family)
            .context("Failed to load fonts")?;
        info!(
            faces = fonts.face_count(),
            family = fonts.family(),
            "Fonts loaded"
        );

        let todos: Arc<dyn TodoSource> = Arc::new(FsTodoStore::new(config.todos_dir.clone()));
        let quotes =
            QuoteProvider::from_config(&config.quotes).context("Failed to build quote client")?;

        Ok(Self::with_parts(config, todos, Rasterizer::new(fonts), quotes))
    }

    pub fn with_parts(
        config: ServiceConfig,
        todos: Arc<dyn TodoSource>,
        rasterizer: Rasterizer,
        quotes: QuoteProvider,
    ) -> Self {
        Self {
            config,
            todos,
            rasterizer,
            quotes,
        }
    }
}
