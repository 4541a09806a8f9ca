use applymate::cli::{self, Cli, Command};
use applymate::config::AppConfig;
use applymate::infrastructure::logging;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    match cli.command {
        Command::CoverLetter(args) => cli::generate::run_cover_letter(args, &config).await,
        Command::OptimizeCv(args) => cli::generate::run_optimize_cv(args, &config).await,
        Command::Settings { command } => cli::settings::run(command).await,
    }
}
