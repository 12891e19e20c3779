use serde_json::Value;

/// One parsed model turn
#[derive(Debug)]
pub enum AgentDirective {
    Final { response: String },
    CallTool { tool: String, input: Value },
}
