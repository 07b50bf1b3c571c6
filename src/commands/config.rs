//! `crudgen config` implementation
//!
//! Inspect or remove the single saved configuration snapshot.

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;

use crudgen::store::ConfigStore;

/// Manage the saved configuration snapshot.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the saved configuration
    Show,
    /// Print the snapshot file location
    Path,
    /// Delete the saved snapshot
    Clear,
}

impl ConfigCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error when no snapshot exists (`show`) or the snapshot
    /// cannot be removed (`clear`).
    pub fn execute(&self) -> Result<()> {
        let store = ConfigStore::open_default()?;

        match self {
            Self::Show => {
                let config = store.load().context("Failed to load saved configuration")?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Self::Path => {
                println!("{}", store.path().display());
            }
            Self::Clear => {
                if store.exists() {
                    store.clear().context("Failed to clear saved configuration")?;
                    println!(
                        "{} {}",
                        style("✓").green(),
                        style("Saved configuration removed").dim()
                    );
                } else {
                    println!("{}", style("No saved configuration found").dim());
                }
            }
        }

        Ok(())
    }
}
