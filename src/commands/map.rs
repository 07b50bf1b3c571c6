//! `crudgen map` implementation
//!
//! Extracts two classes, builds the field pair list (suggestions, explicit
//! `--map` overrides, or an interactive selector), and renders the
//! AutoMapper profile.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use dialoguer::Select;

use crudgen::mapping::{suggest_mappings, FieldMapping, MappedClass, MappingProfile};
use crudgen::templates::TemplateRegistry;

use super::read_source;

/// Generate an AutoMapper profile between two classes.
#[derive(Debug, Args)]
pub struct MapCommand {
    /// Path to the source class (`-` reads stdin)
    source: PathBuf,

    /// Path to the target class
    target: PathBuf,

    /// Explicit field pair as `Source=Target` (repeatable; accepted verbatim)
    #[arg(long = "map", value_name = "SOURCE=TARGET")]
    maps: Vec<String>,

    /// Choose the target field for each source field interactively
    #[arg(short, long)]
    interactive: bool,

    /// Write the profile to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl MapCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error when either class fails extraction or the resulting
    /// pair list is empty.
    pub fn execute(&self) -> Result<()> {
        let source_text = read_source(&self.source)?;
        let target_text = read_source(&self.target)?;

        let source = MappedClass::from_source(&source_text, "source")?;
        let target = MappedClass::from_source(&target_text, "target")?;

        let mappings = if self.maps.is_empty() {
            if self.interactive {
                select_mappings(&source, &target)?
            } else {
                suggest_mappings(&source.properties, &target.properties)
            }
        } else {
            self.maps
                .iter()
                .map(|pair| parse_map_override(pair))
                .collect::<Result<Vec<_>>>()?
        };

        if mappings.is_empty() {
            bail!("Please configure at least one mapping.");
        }

        let profile = MappingProfile {
            source_name: source.name,
            target_name: target.name,
            mappings,
        };
        let templates = TemplateRegistry::new()?;
        let code = profile.render(&templates)?;

        if let Some(path) = &self.output {
            fs::write(path, &code)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            eprintln!(
                "{} {}",
                style("✓").green(),
                style(format!("Wrote {}", path.display())).dim()
            );
        } else {
            println!("{code}");
        }

        Ok(())
    }
}

/// Parse an explicit `Source=Target` pair; both sides are taken verbatim.
fn parse_map_override(pair: &str) -> Result<FieldMapping> {
    match pair.split_once('=') {
        Some((source, target)) if !source.is_empty() && !target.is_empty() => Ok(FieldMapping {
            source: source.to_string(),
            target: target.to_string(),
        }),
        _ => bail!("Invalid mapping: '{pair}'. Expected 'Source=Target'"),
    }
}

/// Per-field selector: each source field picks a target field or none, with
/// the case-insensitive name match pre-selected as the default.
fn select_mappings(source: &MappedClass, target: &MappedClass) -> Result<Vec<FieldMapping>> {
    let mut labels = vec!["-- None --".to_string()];
    labels.extend(
        target
            .properties
            .iter()
            .map(|p| format!("{} ({})", p.name, p.field_type)),
    );

    let mut mappings = Vec::new();
    for property in &source.properties {
        let default = target
            .properties
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(&property.name))
            .map_or(0, |index| index + 1);

        let selected = Select::new()
            .with_prompt(format!("{} ({}) ->", property.name, property.field_type))
            .items(&labels)
            .default(default)
            .interact()?;

        if selected > 0 {
            mappings.push(FieldMapping {
                source: property.name.clone(),
                target: target.properties[selected - 1].name.clone(),
            });
        }
    }

    Ok(mappings)
}
