use studio_core::tools::{Tool, ToolCatalog};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Tools that are recognized but switched off (default: `figmaAI`).
    pub unavailable_tools: Vec<Tool>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `UNAVAILABLE_TOOLS`    | `figmaAI`                  |
    ///
    /// Panics on malformed values; misconfiguration should stop startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let unavailable_tools = match std::env::var("UNAVAILABLE_TOOLS") {
            Ok(raw) => parse_tool_list(&raw).unwrap_or_else(|e| panic!("UNAVAILABLE_TOOLS: {e}")),
            Err(_) => default_unavailable_tools(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            unavailable_tools,
        }
    }

    /// Tool catalog reflecting the configured availability.
    pub fn tool_catalog(&self) -> ToolCatalog {
        ToolCatalog::with_unavailable(self.unavailable_tools.iter().copied())
    }
}

/// Tools switched off when `UNAVAILABLE_TOOLS` is unset.
pub fn default_unavailable_tools() -> Vec<Tool> {
    Tool::ALL
        .into_iter()
        .filter(|t| !t.available_by_default())
        .collect()
}

/// Parse a comma-separated list of tool wire names. An empty string
/// yields an empty list (every tool available).
pub fn parse_tool_list(raw: &str) -> Result<Vec<Tool>, String> {
    split_list(raw)
        .iter()
        .map(|name| Tool::from_name(name).ok_or_else(|| format!("unknown tool '{name}'")))
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
