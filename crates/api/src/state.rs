use std::sync::Arc;

use studio_core::tools::ToolCatalog;
use studio_db::SharedJobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Job record store.
    pub jobs: SharedJobStore,
    /// Supported tools and their availability.
    pub tools: Arc<ToolCatalog>,
}

impl AppState {
    /// Build state from configuration with a fresh in-memory job store.
    pub fn new(config: ServerConfig) -> Self {
        let tools = Arc::new(config.tool_catalog());
        Self {
            config: Arc::new(config),
            jobs: studio_db::in_memory_store(),
            tools,
        }
    }
}
