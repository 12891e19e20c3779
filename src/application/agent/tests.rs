use super::*;
use crate::application::client::{ChatClient, ClientConfig};
use crate::domain::types::ChatMessage;
use crate::game::GameToolkit;
use crate::infrastructure::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
struct ScriptedProvider {
    responses: Arc<Mutex<Vec<String>>>,
    recordings: Arc<Mutex<Vec<ModelRequest>>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.into_iter().map(String::from).collect(),
            )),
            recordings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn requests(&self) -> Vec<ModelRequest> {
        self.recordings.lock().await.clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let mut responses = self.responses.lock().await;
        let response = responses.remove(0);
        let mut recordings = self.recordings.lock().await;
        recordings.push(request.clone());
        Ok(ModelResponse {
            message: ChatMessage::assistant(response),
            session_id: request.session_id,
        })
    }
}

fn runner_for(provider: &ScriptedProvider) -> AgentRunner<ScriptedProvider> {
    let client = ChatClient::new(provider.clone(), ClientConfig::new("gemini", "test-model"));
    AgentRunner::new(Arc::new(client), Arc::new(GameToolkit::new()))
}

fn encounter_profile() -> RoleProfile {
    RoleProfile::new("encounter", "You handle monster encounters.").with_tools(vec![
        "roll_dice".to_string(),
        "generate_event".to_string(),
    ])
}

#[tokio::test]
async fn agent_returns_final_response_without_tools() {
    let provider = ScriptedProvider::new(vec![r#"{"action":"final","response":"done"}"#]);
    let runner = runner_for(&provider);

    let outcome = runner
        .run(&RoleProfile::new("narrator", "Narrate."), "hello world")
        .await
        .expect("agent succeeds");

    assert_eq!(outcome.response, "done");
    assert!(outcome.steps.is_empty());

    let records = provider.requests().await;
    assert_eq!(records.len(), 1);
    assert!(
        records[0]
            .messages
            .iter()
            .any(|msg| msg.content.contains("hello world"))
    );
}

#[tokio::test]
async fn agent_executes_requested_tool_and_feeds_back_result() {
    let provider = ScriptedProvider::new(vec![
        r#"{"action":"call_tool","tool":"roll_dice","input":{"sides":6}}"#,
        r#"{"action":"final","response":"the goblin misses"}"#,
    ]);
    let runner = runner_for(&provider);

    let outcome = runner
        .run(&encounter_profile(), "Start encounter")
        .await
        .expect("agent succeeds");

    assert_eq!(outcome.response, "the goblin misses");
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].tool, "roll_dice");
    assert!(outcome.steps[0].success);
    assert!(
        outcome.steps[0]
            .output
            .get("total")
            .and_then(Value::as_u64)
            .is_some()
    );

    let records = provider.requests().await;
    assert_eq!(records.len(), 2);
    // First turn advertises the tools in the system prompt.
    assert!(
        records[0]
            .messages
            .iter()
            .any(|msg| msg.content.contains("roll_dice"))
    );
    // Second turn carries the tool result back to the model.
    assert!(
        records[1]
            .messages
            .iter()
            .any(|msg| msg.content.contains("tool_result"))
    );
}

#[tokio::test]
async fn agent_cannot_call_tools_outside_its_role() {
    let provider = ScriptedProvider::new(vec![
        r#"{"action":"call_tool","tool":"generate_event"}"#,
    ]);
    let runner = runner_for(&provider);
    let profile =
        RoleProfile::new("encounter", "Narrate.").with_tools(vec!["roll_dice".to_string()]);

    let err = runner
        .run(&profile, "Start encounter")
        .await
        .expect_err("tool is rejected");
    assert!(matches!(err, AgentError::Tool(ToolError::UnknownTool(_))));
}

#[tokio::test]
async fn agent_step_budget_is_enforced() {
    let provider = ScriptedProvider::new(vec![
        r#"{"action":"call_tool","tool":"roll_dice"}"#,
        r#"{"action":"call_tool","tool":"roll_dice"}"#,
    ]);
    let runner = runner_for(&provider);
    let mut profile = encounter_profile();
    profile.max_steps = 1;

    let err = runner
        .run(&profile, "Start encounter")
        .await
        .expect_err("budget exhausted");
    assert!(matches!(err, AgentError::StepBudgetExhausted { limit: 1 }));
}

#[tokio::test]
async fn malformed_json_is_corrected_within_the_retry_budget() {
    let provider = ScriptedProvider::new(vec![
        "the goblin snarls at you",
        r#"{"action":"final","response":"recovered"}"#,
    ]);
    let runner = runner_for(&provider);

    let outcome = runner
        .run(&encounter_profile(), "Start encounter")
        .await
        .expect("agent recovers");

    assert_eq!(outcome.response, "recovered");
    let records = provider.requests().await;
    assert_eq!(records.len(), 2);
    assert!(
        records[1]
            .messages
            .iter()
            .any(|msg| msg.content.contains("not a valid JSON directive"))
    );
}

#[tokio::test]
async fn persistent_malformed_json_fails_after_retries() {
    let provider = ScriptedProvider::new(vec![
        "nonsense one",
        "nonsense two",
        "nonsense three",
        "nonsense four",
    ]);
    let runner = runner_for(&provider);

    let err = runner
        .run(&encounter_profile(), "Start encounter")
        .await
        .expect_err("gives up");
    assert!(matches!(err, AgentError::InvalidResponse(_)));

    let records = provider.requests().await;
    assert_eq!(records.len(), 4);
}
