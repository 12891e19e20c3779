//! Agent role configuration.
//!
//! The game runs three fixed roles. Each role can be re-instructed from
//! the `[agents.*]` tables; tool lists only matter for the encounter role.

use serde::Deserialize;

use super::defaults;
use crate::game;

/// One named role: a persona prompt plus the tools it may call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
    pub instructions: String,
    pub tools: Vec<String>,
}

/// The three roles the adventure dispatches to, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRoles {
    pub narrator: AgentConfig,
    pub encounter: AgentConfig,
    pub reward: AgentConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawAgents {
    pub(super) narrator: Option<RawAgent>,
    pub(super) encounter: Option<RawAgent>,
    pub(super) reward: Option<RawAgent>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawAgent {
    pub(super) instructions: Option<String>,
    #[serde(default)]
    pub(super) tools: Option<Vec<String>>,
}

fn build_role(
    name: &str,
    raw: Option<RawAgent>,
    default_instructions: &str,
    default_tools: &[&str],
) -> AgentConfig {
    let raw = raw.unwrap_or(RawAgent {
        instructions: None,
        tools: None,
    });
    AgentConfig {
        name: name.to_string(),
        instructions: raw
            .instructions
            .unwrap_or_else(|| default_instructions.to_string()),
        tools: raw
            .tools
            .unwrap_or_else(|| default_tools.iter().map(|t| t.to_string()).collect()),
    }
}

impl AgentRoles {
    pub(super) fn from_raw(raw: RawAgents) -> Self {
        Self {
            narrator: build_role(
                "narrator",
                raw.narrator,
                defaults::DEFAULT_NARRATOR_INSTRUCTIONS,
                &[],
            ),
            encounter: build_role(
                "encounter",
                raw.encounter,
                defaults::DEFAULT_ENCOUNTER_INSTRUCTIONS,
                game::TOOL_NAMES,
            ),
            reward: build_role(
                "reward",
                raw.reward,
                defaults::DEFAULT_REWARD_INSTRUCTIONS,
                &[],
            ),
        }
    }
}

impl Default for AgentRoles {
    fn default() -> Self {
        Self::from_raw(RawAgents::default())
    }
}
