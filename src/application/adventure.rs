//! The three-stage adventure: narration, encounter, reward.
//!
//! The stages always run in that order, each as an independent dispatch.
//! Nothing is carried between them and nothing branches on their content;
//! a failed stage ends the run before any later stage is attempted.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::agent::{AgentError, AgentRunner, RoleProfile};
use super::client::{ChatClient, ChatError, ChatRequest};
use crate::config::AgentRoles;
use crate::game::GameToolkit;
use crate::infrastructure::model::ModelProvider;

pub const ENCOUNTER_PROMPT: &str = "Start encounter";
pub const REWARD_PROMPT: &str = "Give reward to player";

/// The three stages, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Story,
    Encounter,
    Reward,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Story => "Story",
            Stage::Encounter => "Encounter",
            Stage::Reward => "Reward",
        }
    }
}

#[derive(Debug, Error)]
pub enum AdventureError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl AdventureError {
    pub fn user_message(&self) -> String {
        match self {
            AdventureError::Chat(err) => err.user_message(),
            AdventureError::Agent(err) => err.user_message(),
        }
    }
}

/// Runs the scripted adventure against a chat client and the local
/// game toolkit.
pub struct Adventure<P: ModelProvider> {
    client: Arc<ChatClient<P>>,
    roles: AgentRoles,
    runner: AgentRunner<P>,
}

impl<P: ModelProvider> Adventure<P> {
    pub fn new(client: Arc<ChatClient<P>>, roles: AgentRoles, toolkit: Arc<GameToolkit>) -> Self {
        let runner = AgentRunner::new(client.clone(), toolkit);
        Self {
            client,
            roles,
            runner,
        }
    }

    /// Stage 1: forward the player's choice to the narrator role and
    /// return the text unmodified.
    pub async fn narrate(&self, choice: &str) -> Result<String, AdventureError> {
        info!(stage = Stage::Story.label(), "Dispatching narration");
        let result = self
            .client
            .chat(ChatRequest {
                prompt: choice.to_string(),
                provider: None,
                model: None,
                system_prompt: Some(self.roles.narrator.instructions.clone()),
                session_id: None,
            })
            .await?;
        Ok(result.content)
    }

    /// Stage 2: run the encounter role through the agent runtime so the
    /// model may call the dice and event tools.
    pub async fn encounter(&self) -> Result<String, AdventureError> {
        info!(stage = Stage::Encounter.label(), "Dispatching encounter");
        let profile = RoleProfile::from(&self.roles.encounter);
        let outcome = self.runner.run(&profile, ENCOUNTER_PROMPT).await?;
        Ok(outcome.response)
    }

    /// Stage 3: ask the reward role for the player's prize.
    pub async fn reward(&self) -> Result<String, AdventureError> {
        info!(stage = Stage::Reward.label(), "Dispatching reward");
        let result = self
            .client
            .chat(ChatRequest {
                prompt: REWARD_PROMPT.to_string(),
                provider: None,
                model: None,
                system_prompt: Some(self.roles.reward.instructions.clone()),
                session_id: None,
            })
            .await?;
        Ok(result.content)
    }

    /// Play all three stages in order, printing each labeled line as its
    /// dispatch completes. The first failure halts the run, so no line is
    /// printed for a stage that never succeeded.
    pub async fn play(&self, choice: &str) -> Result<(), AdventureError> {
        let story = self.narrate(choice).await?;
        println!("\n{}: {story}", Stage::Story.label());

        let encounter = self.encounter().await?;
        println!("\n{}: {encounter}", Stage::Encounter.label());

        let reward = self.reward().await?;
        println!("\n{}: {reward}", Stage::Reward.label());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels_match_the_console_contract() {
        assert_eq!(Stage::Story.label(), "Story");
        assert_eq!(Stage::Encounter.label(), "Encounter");
        assert_eq!(Stage::Reward.label(), "Reward");
    }
}
