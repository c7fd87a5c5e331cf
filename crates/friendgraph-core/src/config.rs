use crate::error::{GraphError, Result};
use crate::recommend::{ScoringMode, DEFAULT_RECOMMENDATIONS};
use std::path::PathBuf;

pub const ENV_LIMIT: &str = "FRIENDGRAPH_LIMIT";
pub const ENV_SCORING: &str = "FRIENDGRAPH_SCORING";
pub const ENV_MAX_DEPTH: &str = "FRIENDGRAPH_MAX_DEPTH";
pub const ENV_NETWORK: &str = "FRIENDGRAPH_NETWORK";

/// Engine settings shared by the adapters. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub limit: usize,
    pub scoring: ScoringMode,
    pub max_depth: Option<u32>,
    /// Network description file; `None` means the built-in sample network
    pub network: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATIONS,
            scoring: ScoringMode::default(),
            max_depth: None,
            network: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `FRIENDGRAPH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(ENV_LIMIT)) {
            config.limit = raw.trim().parse().map_err(|_| {
                GraphError::InvalidConfig(format!("{} must be a non-negative integer, got '{}'", ENV_LIMIT, raw))
            })?;
        }
        if let Some(raw) = non_empty(lookup(ENV_SCORING)) {
            config.scoring = raw.parse()?;
        }
        if let Some(raw) = non_empty(lookup(ENV_MAX_DEPTH)) {
            let depth = raw.trim().parse().map_err(|_| {
                GraphError::InvalidConfig(format!("{} must be a non-negative integer, got '{}'", ENV_MAX_DEPTH, raw))
            })?;
            config.max_depth = Some(depth);
        }
        if let Some(raw) = non_empty(lookup(ENV_NETWORK)) {
            config.network = Some(PathBuf::from(raw));
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
