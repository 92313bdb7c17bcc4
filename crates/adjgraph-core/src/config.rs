use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::GraphError;

/// Environment variable overriding [`SccConfig::self_loop_is_cycle`].
pub const SELF_LOOP_ENV: &str = "ADJGRAPH_SELF_LOOP_IS_CYCLE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub traversal: TraversalConfig,
    #[serde(default)]
    pub scc: SccConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Initial capacity reserved for explicit DFS stacks.
    #[serde(default = "default_stack_capacity")]
    pub stack_capacity: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            stack_capacity: default_stack_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccConfig {
    /// Report a vertex with a self-loop as a one-element cycle instead of a
    /// bare vertex.
    #[serde(default = "default_true")]
    pub self_loop_is_cycle: bool,
}

impl Default for SccConfig {
    fn default() -> Self {
        Self {
            self_loop_is_cycle: default_true(),
        }
    }
}

/// Parse a config from TOML text. Missing sections and keys take defaults.
///
/// # Errors
///
/// Returns an error if `content` is not valid TOML for [`GraphConfig`]. The
/// underlying cause downcasts to [`GraphError::ConfigParse`].
pub fn parse_config(content: &str) -> Result<GraphConfig> {
    from_toml(content).context("Failed to parse adjgraph config")
}

fn from_toml(content: &str) -> Result<GraphConfig, GraphError> {
    toml::from_str::<GraphConfig>(content).map_err(|err| GraphError::ConfigParse(err.to_string()))
}

/// Load a config file. A missing file yields [`GraphConfig::default`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    if !path.exists() {
        return Ok(GraphConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `path` and apply environment overrides on top.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the override value is
/// not a recognised boolean.
pub fn resolve_config(path: &Path) -> Result<GraphConfig> {
    let mut config = load_config(path)?;
    apply_env_overrides(&mut config, env::var(SELF_LOOP_ENV).ok().as_deref())?;
    Ok(config)
}

fn apply_env_overrides(config: &mut GraphConfig, self_loop: Option<&str>) -> Result<()> {
    if let Some(raw) = self_loop {
        config.scc.self_loop_is_cycle = parse_flag(raw)
            .with_context(|| format!("{SELF_LOOP_ENV} must be a boolean, got {raw:?}"))?;
    }
    Ok(())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

const fn default_true() -> bool {
    true
}

const fn default_stack_capacity() -> usize {
    64
}
