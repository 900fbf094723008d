use dotenvy::dotenv;
use tokio::io::BufReader;

mod commands;
mod config;
mod setup;

use config::{app_config::AppConfig, logging_config, seed_config};
use setup::{console::Console, dependency_injection::DependencyContainer};

/// Admin console entry point
///
/// Reads one JSON command per line on stdin and answers with one JSON reply
/// per line on stdout. Logs go to stderr.
///
/// - config/: environment configuration (locale, seed file, logging)
/// - setup/: dependency wiring and the command loop
/// - commands/: command and reply DTOs, error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    logging_config::init_tracing();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);
    let mut console = Console::new(container);

    // 5. Seed the catalog
    if let Some(path) = &config.seed_file {
        let products = seed_config::load_seed(path).await?;
        let created = console.seed(products).await;
        tracing::info!(created, path = %path.display(), "catalog seeded");
    }

    // 6. Serve commands until stdin closes
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
