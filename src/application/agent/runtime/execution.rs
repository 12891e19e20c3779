use super::{ToolError, ToolRuntime, Value};
use tracing::{info, warn};

pub(crate) struct ToolExecution {
    pub tool: String,
    pub success: bool,
    pub input: Value,
    pub output: Value,
    pub message: Option<String>,
}

impl ToolRuntime {
    pub(crate) async fn execute(
        &self,
        tool_name: &str,
        input: Value,
    ) -> Result<ToolExecution, ToolError> {
        if !self.is_allowed(tool_name) {
            warn!(requested_tool = %tool_name, "Agent requested a tool outside its role");
            return Err(ToolError::UnknownTool(tool_name.to_string()));
        }

        let arguments = match input.clone() {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        match self.dispatcher.invoke(tool_name, arguments).await {
            Ok(output) => {
                let execution = ToolExecution {
                    tool: tool_name.to_lowercase(),
                    success: true,
                    input,
                    output: output.value,
                    message: output.message,
                };
                info!(tool = %execution.tool, success = execution.success, "Tool executed");
                Ok(execution)
            }
            Err(source) => {
                warn!(tool = %tool_name, %source, "Tool execution failed");
                Err(ToolError::Execution {
                    tool: tool_name.to_string(),
                    source,
                })
            }
        }
    }
}
