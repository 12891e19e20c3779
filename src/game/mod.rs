//! Local game capabilities the encounter role may call.
//!
//! The model decides whether and when these run; this module only
//! implements the mechanics.

pub mod dice;
pub mod events;
mod toolkit;

pub use dice::DiceRoll;
pub use events::EncounterEvent;
pub use toolkit::GameToolkit;

pub const TOOL_ROLL_DICE: &str = "roll_dice";
pub const TOOL_GENERATE_EVENT: &str = "generate_event";

/// Names of all built-in tools, in catalogue order
pub const TOOL_NAMES: &[&str] = &[TOOL_ROLL_DICE, TOOL_GENERATE_EVENT];

pub fn is_known_tool(name: &str) -> bool {
    TOOL_NAMES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}
