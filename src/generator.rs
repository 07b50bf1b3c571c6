//! Config validation, template context assembly, and pattern dispatch
//!
//! [`CodeGenerator::generate`] is a pure function from configuration to
//! rendered text: no I/O, no partial output. The invariant (non-empty entity
//! name, at least one field) is checked before any rendering starts.

use serde_json::json;
use thiserror::Error;

use crate::config::{GenerationConfig, Pattern};
use crate::naming::{dependency_field, NameSet};
use crate::templates::TemplateRegistry;

/// Errors produced while generating code from a configuration.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The entity name was empty after trimming.
    #[error("entity name is required")]
    MissingEntityName,
    /// The field list was empty.
    #[error("at least one DTO field is required")]
    NoFields,
    /// A built-in template failed to compile.
    #[error("failed to compile built-in templates: {0}")]
    Registry(#[from] handlebars::TemplateError),
    /// Rendering failed.
    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders one of the three pattern templates from a [`GenerationConfig`].
pub struct CodeGenerator {
    templates: TemplateRegistry,
}

impl CodeGenerator {
    /// Build a generator with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Registry`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, GenerateError> {
        Ok(Self {
            templates: TemplateRegistry::new()?,
        })
    }

    /// Shared registry, also used for the mapping profile.
    #[must_use]
    pub const fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Render the template selected by `config.pattern`.
    ///
    /// All-or-nothing: a violated invariant or a render failure yields an
    /// error and no output.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingEntityName`] or
    /// [`GenerateError::NoFields`] when the configuration invariant is
    /// violated, and [`GenerateError::Render`] when rendering fails.
    pub fn generate(&self, config: &GenerationConfig) -> Result<String, GenerateError> {
        if config.entity_name.trim().is_empty() {
            return Err(GenerateError::MissingEntityName);
        }
        if config.dto_fields.is_empty() {
            return Err(GenerateError::NoFields);
        }

        let context = template_context(config);
        let template = match config.pattern {
            Pattern::Cqrs => "cqrs",
            Pattern::Service => "service",
            Pattern::Simple => "simple",
        };

        Ok(self.templates.render(template, &context)?)
    }
}

/// Precompute every value the templates interpolate.
fn template_context(config: &GenerationConfig) -> serde_json::Value {
    let names = NameSet::derive(&config.entity_name, config.http_method);

    let fields: Vec<serde_json::Value> = config
        .dto_fields
        .iter()
        .map(|field| {
            json!({
                "type": field.field_type,
                "name": field.name,
                "required": config.use_validation,
            })
        })
        .collect();

    let dependencies: Vec<serde_json::Value> = config
        .dependencies
        .iter()
        .map(|dep| {
            json!({
                "type": dep.dep_type,
                "name": dep.name,
                "field": dependency_field(dep),
            })
        })
        .collect();

    let dependency_params = config
        .dependencies
        .iter()
        .map(|dep| format!("{} {}", dep.dep_type, dep.name))
        .collect::<Vec<_>>()
        .join(", ");

    json!({
        "namespace": config.effective_namespace(),
        "entity_name": config.entity_name.trim(),
        "dto_name": names.dto,
        "command_name": names.command,
        "handler_name": names.handler,
        "controller_name": names.controller,
        "service_interface": names.service_interface,
        "service_name": names.service,
        "repository_interface": names.repository_interface,
        "service_method": names.service_method,
        "repository_method": names.repository_method,
        "action": names.action,
        "http_attribute": names.http_attribute,
        "verb": names.verb,
        "verb_upper": names.verb_upper,
        "authorization": config.use_authorization,
        "validation": config.use_validation,
        "fields": fields,
        "dependencies": dependencies,
        "has_dependencies": !config.dependencies.is_empty(),
        "dependency_params": dependency_params,
    })
}
