//! Agent runtime: role profiles, the JSON directive protocol, and the
//! tool execution loop.

mod directive;
mod errors;
mod models;
mod runner;
pub mod runtime;

#[cfg(test)]
mod tests;

pub use directive::AgentDirective;
pub use errors::{AgentError, ToolError};
pub use models::{AgentOutcome, AgentStep, RoleProfile};
pub use runner::AgentRunner;
