use super::agent::AgentRoles;
use super::error::ConfigError;
use super::provider::ModelProviderConfig;
use std::path::Path;

/// Application configuration loaded from client.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_provider: String,
    pub model: String,
    pub providers: Vec<ModelProviderConfig>,
    pub agents: AgentRoles,
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}
