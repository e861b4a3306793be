use anyhow::Result;
use clap::Parser;
use repolens::config::{Environment, Settings};
use repolens::github::GitHubClient;
use repolens::server::{self, AppState};
use repolens::{Catalogs, constants};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "An HTTP service surfacing GitHub repository insights")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = constants::server::DEFAULT_PORT)]
    port: u16,

    /// Credentials file used outside production
    #[arg(short, long, default_value_t = constants::config::DEFAULT_CREDENTIALS_FILE.to_string())]
    credentials: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let environment = Environment::from_env();
    let settings = Settings::load(environment, &cli.credentials, cli.port)?;

    let state = Arc::new(AppState {
        host: GitHubClient::new(settings.credentials.clone()),
        catalogs: Catalogs::standard()?,
        environment: settings.environment,
    });

    log::info!("listening on port: {}", settings.port);
    server::run(state, settings.port).await;

    Ok(())
}
