use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::NodeCatalog;
use crate::errors::{HclExprError, Result};

/// Conventional name of the configuration file.
pub const CONFIG_FILENAME: &str = "hclexpr.json";

/// What to do with text surrounding a lone reference inside the markers.
///
/// `${upper(var.name)}` resolves to the single reference `var.name`; the
/// `upper(` and `)` around it cannot be represented by a member chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardPolicy {
    /// Drop the text silently.
    Ignore,
    /// Drop the text and emit a warning event.
    #[default]
    Warn,
    /// Fail with `HclExprError::DiscardedText`.
    Error,
}

#[allow(clippy::should_implement_trait)]
impl DiscardPolicy {
    /// Returns the string representation of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscardPolicy::Ignore => "ignore",
            DiscardPolicy::Warn => "warn",
            DiscardPolicy::Error => "error",
        }
    }

    /// Parses a string into a `DiscardPolicy`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<DiscardPolicy> {
        match s {
            "ignore" => Some(DiscardPolicy::Ignore),
            "warn" => Some(DiscardPolicy::Warn),
            "error" => Some(DiscardPolicy::Error),
            _ => None,
        }
    }
}

/// Configuration for expression conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HclExprConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Handling of text lost around a single reference.
    pub discard_policy: DiscardPolicy,
}

impl Default for HclExprConfig {
    fn default() -> Self {
        Self {
            version: 1,
            discard_policy: DiscardPolicy::Warn,
        }
    }
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config(path: &Path) -> Result<HclExprConfig> {
    if !path.exists() {
        return Ok(HclExprConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| HclExprError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: HclExprConfig =
        serde_json::from_str(&contents).map_err(|e| HclExprError::Config {
            message: format!("failed to parse config file '{}': {}", path.display(), e),
        })?;

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it into place.
pub fn save_config(path: &Path, config: &HclExprConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HclExprError::Config {
            message: format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| HclExprError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| HclExprError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| HclExprError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}

/// Loads a node catalog from a JSON array of identifier strings.
pub fn load_catalog(path: &Path) -> Result<NodeCatalog> {
    let contents = fs::read_to_string(path).map_err(|e| HclExprError::Config {
        message: format!("failed to read catalog file '{}': {}", path.display(), e),
    })?;

    let ids: Vec<String> = serde_json::from_str(&contents).map_err(|e| HclExprError::Config {
        message: format!("failed to parse catalog file '{}': {}", path.display(), e),
    })?;

    Ok(NodeCatalog::new(ids))
}
