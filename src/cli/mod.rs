//! CLI module for the applymate assistant
//!
//! Subcommands:
//! - `cover-letter`: generate a cover letter for a job description
//! - `optimize-cv`: rewrite the stored CV for a target job description
//! - `settings`: manage the stored API key and CV

pub mod generate;
pub mod settings;

use clap::{Parser, Subcommand};

/// Applymate - cover letter generation and CV optimization via Gemini
#[derive(Parser)]
#[command(name = "applymate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a cover letter for a job description
    CoverLetter(generate::GenerateArgs),

    /// Optimize the stored CV for a target job description
    OptimizeCv(generate::GenerateArgs),

    /// Manage the stored API key and CV
    Settings {
        #[command(subcommand)]
        command: settings::SettingsCommand,
    },
}
