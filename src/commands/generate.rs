//! `crudgen generate` implementation
//!
//! Builds a [`GenerationConfig`] from flags, a parsed class file, the saved
//! snapshot, or the interactive form, then renders the selected pattern and
//! prints the result with a one-line endpoint summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input, Select};

use crudgen::config::{
    Dependency, GenerationConfig, HttpMethod, Pattern, PropertyDescriptor, DTO_FIELD_TYPES,
};
use crudgen::endpoints::EndpointSummary;
use crudgen::extract::{extract_class_name, extract_properties};
use crudgen::generator::CodeGenerator;
use crudgen::store::ConfigStore;

use super::read_source;

/// Generate boilerplate for an entity.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)] // one flag per independent switch
pub struct GenerateCommand {
    /// Entity name (`PascalCase`, e.g. `Order`)
    entity: Option<String>,

    /// DTO fields as `Name:type` specs (e.g. `Id:int`, `Name:string`)
    #[arg(value_name = "NAME:TYPE")]
    fields: Vec<String>,

    /// Generation pattern (default: cqrs)
    #[arg(long, value_enum)]
    pattern: Option<Pattern>,

    /// HTTP verb for the generated route (default: GET)
    #[arg(long, value_enum, ignore_case = true)]
    method: Option<HttpMethod>,

    /// Namespace for the generated code
    #[arg(long)]
    namespace: Option<String>,

    /// Guard the controller with `[Authorize]`
    #[arg(long)]
    authorization: bool,

    /// Mark every DTO field `[Required]`
    #[arg(long)]
    validation: bool,

    /// Constructor-injected dependency as `<Type> <name>` (repeatable)
    #[arg(long = "dependency", value_name = "TYPE NAME")]
    dependencies: Vec<String>,

    /// Extract entity name and fields from a C# class file (`-` reads stdin)
    #[arg(long, value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Start from the saved configuration snapshot
    #[arg(long)]
    from_saved: bool,

    /// Save the effective configuration after generating
    #[arg(long)]
    save: bool,

    /// Write generated code to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Build the configuration through an interactive form
    #[arg(short, long)]
    interactive: bool,
}

impl GenerateCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error for missing required input, unparseable class
    /// source, or filesystem failures.
    pub fn execute(&self) -> Result<()> {
        let store = ConfigStore::open_default()?;
        let mut config = self.build_config(&store)?;

        if self.interactive {
            config = interactive_form(config)?;
        }

        let generator = CodeGenerator::new()?;
        let code = generator.generate(&config)?;
        let summary = EndpointSummary::from_config(&config);

        if let Some(path) = &self.output {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
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

        eprintln!(
            "{} {}",
            style("Endpoint:").cyan().bold(),
            style(&summary).dim()
        );

        if self.save {
            store.save(&config).context("Failed to save configuration")?;
            eprintln!(
                "{} {}",
                style("✓").green(),
                style(format!("Configuration saved to {}", store.path().display())).dim()
            );
        }

        Ok(())
    }

    /// Assemble the configuration: saved snapshot first, then parsed class
    /// source, then explicit flags on top.
    fn build_config(&self, store: &ConfigStore) -> Result<GenerationConfig> {
        let mut config = if self.from_saved {
            store.load().context("Failed to load saved configuration")?
        } else {
            GenerationConfig::default()
        };

        if let Some(path) = &self.from_file {
            let source = read_source(path)?;
            let Some(class_name) = extract_class_name(&source) else {
                bail!("Invalid DTO format. Must be a C# class.");
            };
            let fields = extract_properties(&source);
            if fields.is_empty() {
                bail!("No valid properties found in the DTO.");
            }
            config.entity_name = class_name;
            config.dto_fields = fields;
        }

        if let Some(entity) = &self.entity {
            config.entity_name.clone_from(entity);
        }
        if !self.fields.is_empty() {
            config.dto_fields = self
                .fields
                .iter()
                .map(|spec| parse_field_spec(spec))
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(method) = self.method {
            config.http_method = method;
        }
        if let Some(namespace) = &self.namespace {
            config.namespace.clone_from(namespace);
        }
        if self.authorization {
            config.use_authorization = true;
        }
        if self.validation {
            config.use_validation = true;
        }
        if !self.dependencies.is_empty() {
            config.dependencies = self
                .dependencies
                .iter()
                .filter_map(|line| Dependency::parse(line))
                .collect();
        }

        Ok(config)
    }
}

/// Parse a positional `Name:type` field spec.
fn parse_field_spec(spec: &str) -> Result<PropertyDescriptor> {
    match spec.split_once(':') {
        Some((name, field_type)) if !name.trim().is_empty() && !field_type.trim().is_empty() => {
            Ok(PropertyDescriptor::new(field_type.trim(), name.trim()))
        }
        _ => bail!("Invalid field format: '{spec}'. Expected 'Name:type'"),
    }
}

/// Drive the full form through dialoguer, seeded with the current
/// configuration.
fn interactive_form(mut config: GenerationConfig) -> Result<GenerationConfig> {
    let patterns = [Pattern::Cqrs, Pattern::Service, Pattern::Simple];
    let pattern_labels: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
    let pattern_default = patterns
        .iter()
        .position(|p| *p == config.pattern)
        .unwrap_or(0);
    let selected = Select::new()
        .with_prompt("Pattern")
        .items(&pattern_labels)
        .default(pattern_default)
        .interact()?;
    config.pattern = patterns[selected];

    let methods = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];
    let method_labels: Vec<&str> = methods.iter().map(|m| m.as_str()).collect();
    let method_default = methods
        .iter()
        .position(|m| *m == config.http_method)
        .unwrap_or(0);
    let selected = Select::new()
        .with_prompt("HTTP method")
        .items(&method_labels)
        .default(method_default)
        .interact()?;
    config.http_method = methods[selected];

    config.entity_name = Input::new()
        .with_prompt("Entity name")
        .with_initial_text(config.entity_name.clone())
        .interact_text()?;

    config.namespace = Input::new()
        .with_prompt("Namespace (empty for default)")
        .with_initial_text(config.namespace.clone())
        .allow_empty(true)
        .interact_text()?;

    config.use_authorization = Confirm::new()
        .with_prompt("Guard the controller with [Authorize]?")
        .default(config.use_authorization)
        .interact()?;

    config.use_validation = Confirm::new()
        .with_prompt("Mark fields [Required]?")
        .default(config.use_validation)
        .interact()?;

    if !config.dto_fields.is_empty() {
        let count = config.dto_fields.len();
        let keep = Confirm::new()
            .with_prompt(format!("Keep {count} existing field(s)?"))
            .default(true)
            .interact()?;
        if !keep {
            config.dto_fields.clear();
        }
    }
    loop {
        let name: String = Input::new()
            .with_prompt("Field name (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if name.trim().is_empty() {
            break;
        }
        let type_index = Select::new()
            .with_prompt("Field type")
            .items(&DTO_FIELD_TYPES)
            .default(0)
            .interact()?;
        config
            .dto_fields
            .push(PropertyDescriptor::new(DTO_FIELD_TYPES[type_index], name.trim()));
    }

    loop {
        let line: String = Input::new()
            .with_prompt("Dependency '<Type> <name>' (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            break;
        }
        if let Some(dependency) = Dependency::parse(&line) {
            config.dependencies.push(dependency);
        }
    }

    Ok(config)
}
