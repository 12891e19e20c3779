mod execution;
mod instructions;
mod parser;

use std::sync::Arc;

pub(super) use super::directive::AgentDirective;
pub(super) use super::errors::{AgentError, ToolError};
pub(super) use serde_json::Value;

use crate::application::tooling::{ToolDescriptor, ToolDispatcher};

/// Executes directives for one role: only the role's allowed tools are
/// advertised and dispatchable.
pub struct ToolRuntime {
    allowed: Vec<String>,
    dispatcher: Arc<dyn ToolDispatcher>,
}

impl ToolRuntime {
    pub fn new(allowed: Vec<String>, dispatcher: Arc<dyn ToolDispatcher>) -> Self {
        Self {
            allowed,
            dispatcher,
        }
    }

    pub(super) fn is_allowed(&self, tool: &str) -> bool {
        self.allowed.iter().any(|name| name.eq_ignore_ascii_case(tool))
    }

    /// Capabilities visible to this role
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.dispatcher
            .descriptors()
            .into_iter()
            .filter(|descriptor| self.is_allowed(&descriptor.name))
            .collect()
    }
}
