use serde::Serialize;
use serde_json::Value;

use crate::config::AgentConfig;

const DEFAULT_MAX_STEPS: usize = 6;

/// One executed tool interaction
#[derive(Debug, Clone, Serialize)]
pub struct AgentStep {
    pub tool: String,
    pub input: Value,
    pub success: bool,
    pub output: Value,
    pub message: Option<String>,
}

/// The finished run of one role
#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub session_id: String,
    pub response: String,
    pub steps: Vec<AgentStep>,
}

/// A role the runner can play: persona, allowed tools, step budget
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub name: String,
    pub instructions: String,
    pub tools: Vec<String>,
    pub max_steps: usize,
}

impl RoleProfile {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }
}

impl From<&AgentConfig> for RoleProfile {
    fn from(config: &AgentConfig) -> Self {
        RoleProfile::new(config.name.clone(), config.instructions.clone())
            .with_tools(config.tools.clone())
    }
}
