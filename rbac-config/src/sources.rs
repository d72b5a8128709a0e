use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_PATH_VAR: &str = "RBAC_CONFIG";
pub const LATENCY_VAR: &str = "RBAC_API_LATENCY";
pub const ID_STRATEGY_VAR: &str = "RBAC_ID_STRATEGY";
pub const SEED_VAR: &str = "RBAC_SEED";
pub const LOG_FILTER_VAR: &str = "RBAC_LOG";

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub store: FileStoreConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    /// Humantime duration such as `500ms` or `2s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileStoreConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub latency: Option<String>,
    pub id_strategy: Option<String>,
    pub seed: Option<bool>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            config_path: var(CONFIG_PATH_VAR).map(PathBuf::from),
            latency: var(LATENCY_VAR),
            id_strategy: var(ID_STRATEGY_VAR),
            seed: var(SEED_VAR).and_then(|raw| parse_bool(&raw)),
            log_filter: var(LOG_FILTER_VAR),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
