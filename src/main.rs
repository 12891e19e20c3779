use clap::Parser;
use forest_fable::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    forest_fable::run(cli).await
}
