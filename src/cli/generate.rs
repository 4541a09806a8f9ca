//! `cover-letter` and `optimize-cv` subcommands

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::assistant::AssistantService;
use crate::infrastructure::llm::{GeminiProvider, HttpClient};
use crate::infrastructure::settings::FileSettingsStore;

#[derive(Args)]
pub struct GenerateArgs {
    /// Job description text
    #[arg(long, conflicts_with = "job_file")]
    pub job: Option<String>,

    /// Read the job description from a file ("-" reads stdin)
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Use this CV file instead of the stored CV
    #[arg(long)]
    pub cv_file: Option<PathBuf>,

    /// Use this API key instead of the stored one
    #[arg(long)]
    pub api_key: Option<String>,
}

pub async fn run_cover_letter(args: GenerateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let (service, job, cv) = prepare(args, config).await?;
    let result = service.generate_cover_letter(&job, cv.as_deref()).await;
    render(result)
}

pub async fn run_optimize_cv(args: GenerateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let (service, job, cv) = prepare(args, config).await?;
    let result = service.optimize_cv(&job, cv.as_deref()).await;
    render(result)
}

async fn prepare(
    args: GenerateArgs,
    config: &AppConfig,
) -> anyhow::Result<(
    AssistantService<GeminiProvider<HttpClient>, FileSettingsStore>,
    String,
    Option<String>,
)> {
    let job = read_job(&args)?;
    let cv = match &args.cv_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read CV file {}", path.display()))?,
        ),
        None => None,
    };

    let provider = GeminiProvider::new(HttpClient::new())
        .with_model(&config.gemini.model)
        .with_base_url(&config.gemini.base_url);
    let settings = FileSettingsStore::new(FileSettingsStore::default_path()?);

    let mut service = AssistantService::new(Arc::new(provider), Arc::new(settings))
        .with_timeout(Duration::from_millis(config.gemini.timeout_ms));

    let api_key = args
        .api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok());
    if let Some(key) = api_key {
        service = service.with_api_key(key);
    }

    Ok((service, job, cv))
}

fn read_job(args: &GenerateArgs) -> anyhow::Result<String> {
    if let Some(job) = &args.job {
        return Ok(job.clone());
    }

    match &args.job_file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read the job description from stdin")?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display())),
        None => anyhow::bail!("Provide a job description with --job or --job-file"),
    }
}

fn render(result: crate::domain::GenerationResult) -> anyhow::Result<()> {
    match result {
        crate::domain::GenerationResult::Success { content } => {
            println!("{}", content);
            Ok(())
        }
        crate::domain::GenerationResult::Failure { message } => anyhow::bail!(message),
    }
}
