use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::config::{deserialize_account_id, deserialize_non_empty_string};
use crate::error::{CommonError, CommonResult};

const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// The environment variable prefix for configuration overrides.
/// Nested keys are separated by `__`, e.g. `GLUE_HELPER__CATALOG__REGION`.
pub const CONFIG_ENV_PREFIX: &str = "GLUE_HELPER__";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub partition: PartitionConfig,
}

impl AppConfig {
    pub fn load() -> CommonResult<Self> {
        Figment::from(Toml::string(DEFAULT_CONFIG))
            .admerge(Env::prefixed(CONFIG_ENV_PREFIX).map(|p| p.as_str().replace("__", ".").into()))
            .extract()
            .map_err(|e| CommonError::InvalidArgument(e.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub endpoint_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_account_id")]
    pub catalog_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// The number of partitions per bulk request, at most 100.
    pub batch_size: usize,
}
