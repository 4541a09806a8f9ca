//! `settings` subcommand - the options-page analog

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;

use crate::domain::SettingsStore;
use crate::domain::settings::{API_KEY, USER_CV};
use crate::infrastructure::settings::FileSettingsStore;

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Store the Gemini API key
    SetApiKey { key: String },

    /// Store the CV text from a file
    SetCv { file: PathBuf },

    /// Print the stored settings (the API key is masked)
    Show,

    /// Remove all stored settings
    Clear,
}

pub async fn run(command: SettingsCommand) -> anyhow::Result<()> {
    let store = FileSettingsStore::new(FileSettingsStore::default_path()?);

    match command {
        SettingsCommand::SetApiKey { key } => {
            store
                .set(HashMap::from([(API_KEY.to_string(), key)]))
                .await?;
            println!("API key saved to {}", store.path().display());
        }
        SettingsCommand::SetCv { file } => {
            let cv = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read CV file {}", file.display()))?;
            store
                .set(HashMap::from([(USER_CV.to_string(), cv)]))
                .await?;
            println!("CV saved to {}", store.path().display());
        }
        SettingsCommand::Show => {
            let values = store.get(&[API_KEY, USER_CV]).await?;
            match values.get(API_KEY) {
                Some(key) => println!("{}: {}", API_KEY, mask(key)),
                None => println!("{}: (not set)", API_KEY),
            }
            match values.get(USER_CV) {
                Some(cv) => println!("{}: {} characters stored", USER_CV, cv.len()),
                None => println!("{}: (not set)", USER_CV),
            }
        }
        SettingsCommand::Clear => {
            store.clear().await?;
            println!("All settings removed");
        }
    }

    Ok(())
}

fn mask(key: &str) -> String {
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{}****", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask("abc"), "****");
    }

    #[test]
    fn test_mask_long_key() {
        assert_eq!(mask("AIzaSyExample"), "AIza****");
    }

    #[test]
    fn test_mask_multibyte_key() {
        assert_eq!(mask("日本語キー"), "日本語キ****");
        assert_eq!(mask("日本語"), "****");
    }
}
