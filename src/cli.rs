use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "forest-fable",
    version,
    about = "Fantasy adventure toy narrated by configurable LLM providers"
)]
pub struct Cli {
    /// Path to client.toml (defaults to config/client.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Provider id overriding the configured default
    #[arg(long)]
    pub provider: Option<String>,
    /// Model name overriding the configured default
    #[arg(long)]
    pub model: Option<String>,
    /// Player choice; skips the interactive prompt
    #[arg(long)]
    pub choice: Option<String>,
}
