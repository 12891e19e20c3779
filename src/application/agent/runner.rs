use super::errors::AgentError;
use super::models::{AgentOutcome, AgentStep, RoleProfile};
use super::runtime::ToolRuntime;
use crate::application::client::{ChatClient, ChatRequest, preview};
use crate::application::tooling::ToolDispatcher;
use crate::infrastructure::model::ModelProvider;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum correction attempts for malformed JSON directives
const MAX_JSON_RETRIES: u8 = 3;

const JSON_RETRY_MESSAGE: &str = "Your previous reply was not a valid JSON directive. Reply again \
     with exactly one JSON object using the documented actions.";
const TOOL_RESULT_INSTRUCTION: &str = "Use this tool result to continue. Call another tool or give \
     the final narration.";

/// Drives one role through the directive protocol until it produces a
/// final response.
pub struct AgentRunner<P: ModelProvider> {
    client: Arc<ChatClient<P>>,
    dispatcher: Arc<dyn ToolDispatcher>,
}

impl<P: ModelProvider> AgentRunner<P> {
    pub fn new(client: Arc<ChatClient<P>>, dispatcher: Arc<dyn ToolDispatcher>) -> Self {
        Self { client, dispatcher }
    }

    pub async fn run(
        &self,
        profile: &RoleProfile,
        prompt: impl Into<String>,
    ) -> Result<AgentOutcome, AgentError> {
        let prompt = prompt.into();
        info!(role = profile.name.as_str(), "Agent run started");

        let runtime = ToolRuntime::new(profile.tools.clone(), self.dispatcher.clone());
        let system_prompt = runtime.compose_system_instructions(&profile.instructions);
        debug!(
            role = profile.name.as_str(),
            provider = self.client.default_provider(),
            model = self.client.default_model(),
            prompt = preview(&prompt).as_str(),
            "Initial agent request"
        );

        let mut session_id: Option<String> = None;
        let mut steps = Vec::new();
        let mut remaining_steps = profile.max_steps;
        let mut system_prompt_to_send = Some(system_prompt);
        let mut next_prompt = prompt;

        loop {
            debug!(
                session = session_id.as_deref(),
                remaining_steps, "Submitting agent turn to model provider"
            );
            let request = ChatRequest {
                prompt: next_prompt.clone(),
                provider: None,
                model: None,
                system_prompt: system_prompt_to_send.take(),
                session_id: session_id.clone(),
            };

            let result = self.client.chat(request).await?;
            session_id = Some(result.session_id.clone());

            let directive = self
                .parse_with_retry(&runtime, &result.content, &session_id)
                .await?;

            match directive {
                super::AgentDirective::Final { response } => {
                    info!(
                        role = profile.name.as_str(),
                        session_id = result.session_id.as_str(),
                        "Agent returned final response"
                    );
                    return Ok(AgentOutcome {
                        session_id: result.session_id,
                        response,
                        steps,
                    });
                }
                super::AgentDirective::CallTool { tool, input } => {
                    if remaining_steps == 0 {
                        warn!(role = profile.name.as_str(), "Agent exceeded step budget");
                        return Err(AgentError::StepBudgetExhausted {
                            limit: profile.max_steps,
                        });
                    }
                    remaining_steps -= 1;
                    info!(tool = %tool, "Agent requested tool execution");
                    let execution = runtime.execute(&tool, input).await?;

                    steps.push(AgentStep {
                        tool: execution.tool.clone(),
                        input: execution.input.clone(),
                        success: execution.success,
                        output: execution.output.clone(),
                        message: execution.message.clone(),
                    });

                    next_prompt = json!({
                        "tool_result": {
                            "tool": execution.tool,
                            "input": execution.input,
                            "success": execution.success,
                            "output": execution.output,
                            "message": execution.message,
                        },
                        "instruction": TOOL_RESULT_INSTRUCTION,
                    })
                    .to_string();
                }
            }
        }
    }

    /// Parse a directive, asking the model to correct malformed JSON a
    /// bounded number of times. Transport errors still propagate at once.
    async fn parse_with_retry(
        &self,
        runtime: &ToolRuntime,
        content: &str,
        session_id: &Option<String>,
    ) -> Result<super::AgentDirective, AgentError> {
        let mut retry_count = 0u8;
        let mut current_content = content.to_string();

        loop {
            match runtime.parse_agent_action(&current_content) {
                Ok(directive) => return Ok(directive),
                Err(e) if retry_count < MAX_JSON_RETRIES => {
                    retry_count += 1;
                    warn!(
                        attempt = retry_count,
                        max_attempts = MAX_JSON_RETRIES,
                        error = %e,
                        "JSON parse failed, requesting correction from model"
                    );

                    let retry_request = ChatRequest {
                        prompt: format!("{JSON_RETRY_MESSAGE}\n\nError details: {e}"),
                        provider: None,
                        model: None,
                        system_prompt: None,
                        session_id: session_id.clone(),
                    };

                    let retry_result = self.client.chat(retry_request).await?;
                    current_content = retry_result.content;
                }
                Err(e) => {
                    warn!(attempts = retry_count, "JSON parse failed after max retries");
                    return Err(AgentError::InvalidResponse(format!(
                        "invalid JSON after {MAX_JSON_RETRIES} retry attempts: {e}"
                    )));
                }
            }
        }
    }
}
