//! Generation backends ("tools") and their fixed attributes.
//!
//! The tool set is closed. Every tool is always *recognized*, even when it
//! is switched off, so callers can tell an unknown tool (bad request) apart
//! from a known one that is currently unavailable.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Tool enum
// ---------------------------------------------------------------------------

/// A supported generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "midjourney")]
    Midjourney,
    #[serde(rename = "stableDiffusion")]
    StableDiffusion,
    #[serde(rename = "runway")]
    Runway,
    #[serde(rename = "figmaAI")]
    FigmaAi,
}

impl Tool {
    /// Every tool, in catalog order.
    pub const ALL: [Tool; 4] = [
        Tool::Midjourney,
        Tool::StableDiffusion,
        Tool::Runway,
        Tool::FigmaAi,
    ];

    /// Wire name as accepted in requests and echoed in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Midjourney => "midjourney",
            Self::StableDiffusion => "stableDiffusion",
            Self::Runway => "runway",
            Self::FigmaAi => "figmaAI",
        }
    }

    /// Look up a tool by its exact wire name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Upstream endpoint the backend would be called at.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Midjourney => "https://api.midjourney.com/v1/imagine",
            Self::StableDiffusion => "https://api.stability.ai/v1/generation",
            Self::Runway => "https://api.runway.com/v1/generate",
            Self::FigmaAi => "https://api.figma.com/v1/ai/generate",
        }
    }

    /// Fixed cost charged per submitted job.
    pub fn cost(self) -> f64 {
        match self {
            Self::Midjourney => 0.04,
            Self::StableDiffusion => 0.02,
            Self::Runway => 0.10,
            Self::FigmaAi => 0.03,
        }
    }

    /// Model name recorded in the generation parameters.
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Midjourney => "v6",
            Self::StableDiffusion => "sdxl",
            Self::Runway | Self::FigmaAi => "default",
        }
    }

    /// Whether the tool is enabled when no override is configured.
    pub fn available_by_default(self) -> bool {
        !matches!(self, Self::FigmaAi)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Public description of one tool, as listed by the catalog endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: Tool,
    pub endpoint: &'static str,
    pub available: bool,
    pub cost: f64,
}

/// The closed tool set together with each tool's availability.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    unavailable: Vec<Tool>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self {
            unavailable: Tool::ALL
                .into_iter()
                .filter(|t| !t.available_by_default())
                .collect(),
        }
    }
}

impl ToolCatalog {
    /// Build a catalog where exactly the given tools are unavailable.
    pub fn with_unavailable(unavailable: impl IntoIterator<Item = Tool>) -> Self {
        Self {
            unavailable: unavailable.into_iter().collect(),
        }
    }

    pub fn is_available(&self, tool: Tool) -> bool {
        !self.unavailable.contains(&tool)
    }

    pub fn spec(&self, tool: Tool) -> ToolSpec {
        ToolSpec {
            name: tool,
            endpoint: tool.endpoint(),
            available: self.is_available(tool),
            cost: tool.cost(),
        }
    }

    /// All tools in catalog order.
    pub fn list(&self) -> Vec<ToolSpec> {
        Tool::ALL.into_iter().map(|t| self.spec(t)).collect()
    }

    /// Fail with [`CoreError::Unavailable`] naming the tool if it is switched off.
    pub fn ensure_available(&self, tool: Tool) -> Result<ToolSpec, CoreError> {
        if !self.is_available(tool) {
            return Err(CoreError::Unavailable(format!(
                "{tool} service is currently unavailable"
            )));
        }
        Ok(self.spec(tool))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
