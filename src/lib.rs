pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod game;
pub mod infrastructure;

pub use application::{adventure, agent, client, tooling};
pub use cli::Cli;
pub use config::{AppConfig, ModelProviderConfig};
pub use domain::types;
pub use infrastructure::model;

use application::adventure::Adventure;
use application::client::{ChatClient, ClientConfig};
use game::GameToolkit;
use infrastructure::model::DynamicModelProvider;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting forest-fable");
    debug!(
        config = ?cli.config,
        provider = ?cli.provider,
        model = ?cli.model,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration using default path or defaults");
    }

    if let Some(provider) = cli.provider {
        file_config.default_provider = provider;
    }
    if let Some(model) = cli.model {
        file_config.model = model;
    }

    let provider = DynamicModelProvider::from_configs(&file_config.providers);
    let client = Arc::new(ChatClient::new(
        provider,
        ClientConfig::new(file_config.default_provider.clone(), file_config.model.clone()),
    ));
    let adventure = Adventure::new(client, file_config.agents.clone(), Arc::new(GameToolkit::new()));

    println!("Welcome to the Fantasy Adventure Game!");
    let choice = match cli.choice {
        Some(choice) => normalize_choice(&choice),
        None => prompt_for_choice()?,
    };
    debug!(choice = choice.as_str(), "Player choice captured");

    if let Err(err) = adventure.play(&choice).await {
        eprintln!("\n{}", err.user_message());
        return Err(Box::new(err));
    }
    info!("Adventure finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

/// Read the single interactive choice from stdin
fn prompt_for_choice() -> Result<String, io::Error> {
    print!("Do you enter the forest or turn back? -> ");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(normalize_choice(&buffer))
}

/// The only input processing the game performs: whitespace trimming
pub fn normalize_choice(choice: &str) -> String {
    choice.trim().to_string()
}
