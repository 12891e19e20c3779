use super::agent::{AgentRoles, RawAgents};
use super::defaults;
use super::error::ConfigError;
use super::provider::{ModelProviderConfig, RawProviderConfig};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use crate::game;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub default_provider: Option<String>,
    #[serde(default)]
    pub providers: Vec<RawProviderConfig>,
    #[serde(default)]
    pub agents: RawAgents,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. With no path, the default location is
/// tried and built-in defaults apply when the file is absent, so the
/// game runs with nothing configured beyond the provider API key.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(explicit) => read_config(explicit),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!(path = CONFIG_PATH, "No configuration file; using defaults");
                validate_and_build(RawConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let model = parsed
        .model
        .unwrap_or_else(|| defaults::DEFAULT_MODEL.to_string());
    let default_provider = parsed
        .default_provider
        .unwrap_or_else(|| defaults::DEFAULT_PROVIDER_ID.to_string());

    let mut providers: Vec<ModelProviderConfig> = if parsed.providers.is_empty() {
        vec![ModelProviderConfig::builtin_gemini()]
    } else {
        let mut built = Vec::new();
        for raw_provider in parsed.providers {
            if raw_provider.endpoint.is_none() {
                return Err(ConfigError::MissingEndpoint {
                    provider: raw_provider.id.clone(),
                });
            }
            built.push(ModelProviderConfig::from(raw_provider));
        }
        built
    };

    if !providers.iter().any(|p| p.id == default_provider) {
        return Err(ConfigError::ProviderNotFound {
            provider: default_provider,
        });
    }
    if let Some(provider) = providers.iter_mut().find(|p| p.id == default_provider) {
        provider.ensure_model(&model);
    }

    let agents = AgentRoles::from_raw(parsed.agents);
    for role in [&agents.narrator, &agents.encounter, &agents.reward] {
        for tool in &role.tools {
            if !game::is_known_tool(tool) {
                return Err(ConfigError::UnknownAgentTool {
                    agent: role.name.clone(),
                    tool: tool.clone(),
                });
            }
        }
    }

    Ok(super::AppConfig {
        default_provider,
        model,
        providers,
        agents,
    })
}
