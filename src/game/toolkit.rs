//! Built-in tool dispatcher backed by the local game mechanics.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use super::{TOOL_GENERATE_EVENT, TOOL_ROLL_DICE, dice, events};
use crate::application::tooling::{ToolDescriptor, ToolDispatcher, ToolInvokeError, ToolOutput};

/// Dispatches `roll_dice` and `generate_event` locally
#[derive(Debug, Default, Clone)]
pub struct GameToolkit;

impl GameToolkit {
    pub fn new() -> Self {
        Self
    }

    fn roll_dice(&self, arguments: Value) -> Result<ToolOutput, ToolInvokeError> {
        let sides = read_u32(&arguments, "sides", dice::DEFAULT_SIDES)?;
        let count = read_u32(&arguments, "count", dice::DEFAULT_COUNT)?;
        dice::validate(sides, count).map_err(|reason| ToolInvokeError::InvalidArguments {
            tool: TOOL_ROLL_DICE.to_string(),
            reason,
        })?;

        let roll = dice::roll(sides, count);
        debug!(sides, count, total = roll.total, "Rolled dice");
        let message = roll.describe();
        Ok(ToolOutput {
            value: serde_json::to_value(&roll).unwrap_or(Value::Null),
            message: Some(message),
        })
    }

    fn generate_event(&self) -> ToolOutput {
        let event = events::generate();
        debug!(creature = event.creature, "Generated encounter event");
        let message = event.describe();
        ToolOutput {
            value: serde_json::to_value(&event).unwrap_or(Value::Null),
            message: Some(message),
        }
    }
}

fn read_u32(arguments: &Value, field: &str, default: u32) -> Result<u32, ToolInvokeError> {
    match arguments.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ToolInvokeError::InvalidArguments {
                tool: TOOL_ROLL_DICE.to_string(),
                reason: format!("'{field}' must be a positive integer"),
            }),
    }
}

#[async_trait]
impl ToolDispatcher for GameToolkit {
    fn descriptors(&self) -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor {
                name: TOOL_ROLL_DICE.to_string(),
                description: "Roll dice and report each roll and the total.".to_string(),
                input_hint: Some(json!({"sides": 20, "count": 1})),
            },
            ToolDescriptor {
                name: TOOL_GENERATE_EVENT.to_string(),
                description: "Draw a random encounter: creature, disposition, and complication."
                    .to_string(),
                input_hint: None,
            },
        ]
    }

    async fn invoke(&self, tool: &str, arguments: Value) -> Result<ToolOutput, ToolInvokeError> {
        if tool.eq_ignore_ascii_case(TOOL_ROLL_DICE) {
            self.roll_dice(arguments)
        } else if tool.eq_ignore_ascii_case(TOOL_GENERATE_EVENT) {
            Ok(self.generate_event())
        } else {
            Err(ToolInvokeError::NotRegistered(tool.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roll_dice_defaults_to_one_d20() {
        let toolkit = GameToolkit::new();
        let output = toolkit
            .invoke(TOOL_ROLL_DICE, Value::Null)
            .await
            .expect("roll succeeds");

        assert_eq!(output.value["sides"], 20);
        assert_eq!(output.value["rolls"].as_array().unwrap().len(), 1);
        let total = output.value["total"].as_u64().unwrap();
        assert!((1..=20).contains(&total));
        assert!(output.message.is_some());
    }

    #[tokio::test]
    async fn roll_dice_honours_explicit_arguments() {
        let toolkit = GameToolkit::new();
        let output = toolkit
            .invoke("ROLL_DICE", json!({"sides": 6, "count": 3}))
            .await
            .expect("roll succeeds");

        assert_eq!(output.value["sides"], 6);
        assert_eq!(output.value["rolls"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn roll_dice_rejects_out_of_range_arguments() {
        let toolkit = GameToolkit::new();
        let err = toolkit
            .invoke(TOOL_ROLL_DICE, json!({"sides": 1}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolInvokeError::InvalidArguments { .. }));

        let err = toolkit
            .invoke(TOOL_ROLL_DICE, json!({"count": "three"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolInvokeError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn generate_event_reports_all_fields() {
        let toolkit = GameToolkit::new();
        let output = toolkit
            .invoke(TOOL_GENERATE_EVENT, Value::Null)
            .await
            .expect("event succeeds");

        assert!(output.value["creature"].is_string());
        assert!(output.value["disposition"].is_string());
        assert!(output.value["complication"].is_string());
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let toolkit = GameToolkit::new();
        let err = toolkit.invoke("cast_spell", Value::Null).await.unwrap_err();
        assert!(matches!(err, ToolInvokeError::NotRegistered(_)));
    }

    #[test]
    fn descriptors_cover_every_builtin_tool() {
        let names: Vec<String> = GameToolkit::new()
            .descriptors()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, super::super::TOOL_NAMES.to_vec());
    }
}
