use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::seed::SeedCatalog;

/// Error type for config and seed loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not parse seed catalog {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration from `config.toml` in the data directory. Every field is
/// optional; an absent file means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Replacement seed document, path relative to the data directory.
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// Read `config.toml` from the data directory; defaults when the file is
/// absent. A present but unparsable config is an error, not a fallback: the
/// user wrote it and should hear about the typo.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Resolve the seed catalog: the configured override, or the built-in one.
/// Unlike persisted state, a configured seed that fails to read or parse is
/// a hard error.
pub fn load_seed(dir: &Path, config: &AppConfig) -> Result<SeedCatalog, ConfigError> {
    match &config.catalog.seed_file {
        None => Ok(SeedCatalog::builtin()),
        Some(rel) => {
            let path = dir.join(rel);
            let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            SeedCatalog::from_json(&text).map_err(|source| ConfigError::SeedParse { path, source })
        }
    }
}
