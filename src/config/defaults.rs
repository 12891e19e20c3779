//! Built-in defaults used when the configuration file omits a value
//! (or is absent entirely at the default path).

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_PROVIDER_ID: &str = "gemini";
pub const DEFAULT_PROVIDER_TYPE: &str = "gemini";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_NARRATOR_INSTRUCTIONS: &str =
    "You narrate the fantasy adventure and ask the player for choices.";
pub const DEFAULT_ENCOUNTER_INSTRUCTIONS: &str =
    "You handle monster encounters using roll_dice and generate_event tools.";
pub const DEFAULT_REWARD_INSTRUCTIONS: &str =
    "You provide rewards or items to the player after successful events.";
