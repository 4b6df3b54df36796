use std::path::PathBuf;

use clap::Parser;
use di_web::bootstrap::tracing::init_tracing_subscriber;
use di_web::bootstrap::{load_config, run_app};

#[derive(Parser)]
#[command(name = "device-inventory")]
#[command(about = "Network device inventory service", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "CONFIG_PATH")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    init_tracing_subscriber(&config)?;
    tracing::info!("Config loaded successfully");

    run_app(config).await
}
