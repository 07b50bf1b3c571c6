//! CLI command implementations

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub mod config;
pub mod generate;
pub mod map;
pub mod parse;

pub use config::ConfigCommand;
pub use generate::GenerateCommand;
pub use map::MapCommand;
pub use parse::ParseCommand;

/// Read class source from a file path, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read class source from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read class source: {}", path.display()))
    }
}
