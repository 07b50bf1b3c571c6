//! `crudgen parse` implementation
//!
//! Runs the extractor over pasted class source and reports the class name
//! and fields, as a table or as JSON.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use serde_json::json;

use crudgen::extract::{extract_class_name, extract_properties};

use super::read_source;

/// Extract the class name and properties from pasted DTO source.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Path to the class source (`-` reads stdin)
    input: PathBuf,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

impl ParseCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error when the input cannot be read, has no class
    /// declaration, or has no extractable properties.
    pub fn execute(&self) -> Result<()> {
        let source = read_source(&self.input)?;

        let Some(class_name) = extract_class_name(&source) else {
            bail!("Invalid DTO format. Must be a C# class.");
        };
        let fields = extract_properties(&source);
        if fields.is_empty() {
            bail!("No valid properties found in the DTO.");
        }

        if self.json {
            let document = json!({
                "className": class_name,
                "fields": fields,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
            return Ok(());
        }

        println!(
            "{} {}",
            style("Class:").cyan().bold(),
            style(&class_name).green().bold()
        );
        println!();
        let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        for field in &fields {
            println!(
                "  {:width$}  {}",
                style(&field.name).bold(),
                style(&field.field_type).dim()
            );
        }
        println!();
        println!(
            "{} {} field(s) found",
            style("✓").green(),
            style(fields.len()).bold()
        );

        Ok(())
    }
}
