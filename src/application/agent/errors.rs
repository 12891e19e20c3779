use crate::application::client::ChatError;
use crate::application::tooling::ToolInvokeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("invalid agent response: {0}")]
    InvalidResponse(String),
    #[error("agent exceeded the maximum of {limit} tool interactions")]
    StepBudgetExhausted { limit: usize },
}

impl AgentError {
    pub fn user_message(&self) -> String {
        match self {
            AgentError::Chat(err) => err.user_message(),
            AgentError::Tool(err) => err.user_message(),
            AgentError::InvalidResponse(_) => {
                "The storyteller gave a response that could not be understood.".to_string()
            }
            AgentError::StepBudgetExhausted { .. } => {
                "The storyteller got lost rolling dice and never finished the scene.".to_string()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool '{0}' is not available to this agent")]
    UnknownTool(String),
    #[error("failed to execute tool '{tool}': {source}")]
    Execution {
        tool: String,
        #[source]
        source: ToolInvokeError,
    },
}

impl ToolError {
    pub fn user_message(&self) -> String {
        match self {
            ToolError::UnknownTool(name) => {
                format!("The storyteller asked for an unknown ability \"{name}\".")
            }
            ToolError::Execution { tool, source } => {
                format!("The \"{tool}\" ability failed: {source}")
            }
        }
    }
}
