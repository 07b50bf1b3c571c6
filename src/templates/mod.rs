//! Handlebars templates for the generation patterns
//!
//! One template per pattern plus the AutoMapper profile, registered by name
//! in a single [`TemplateRegistry`]. HTML escaping is disabled because the
//! rendered output is C# source, not markup.

use handlebars::Handlebars;

pub mod cqrs;
pub mod mapping;
pub mod service;
pub mod simple;

pub use cqrs::CQRS_TEMPLATE;
pub use mapping::MAPPING_TEMPLATE;
pub use service::SERVICE_TEMPLATE;
pub use simple::SIMPLE_TEMPLATE;

/// Registry wrapping a `Handlebars` instance with every built-in template
/// registered at construction.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Build the registry and register the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_template_string("cqrs", CQRS_TEMPLATE)?;
        handlebars.register_template_string("service", SERVICE_TEMPLATE)?;
        handlebars.register_template_string("simple", SIMPLE_TEMPLATE)?;
        handlebars.register_template_string("mapping", MAPPING_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, handlebars::RenderError> {
        self.handlebars.render(name, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_templates_compile() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn generated_code_is_not_html_escaped() {
        let registry = TemplateRegistry::new().unwrap();
        let context = serde_json::json!({
            "source_name": "A<B>",
            "target_name": "C",
            "mappings": [{"source": "X", "target": "Y"}],
        });
        let rendered = registry.render("mapping", &context).unwrap();
        assert!(rendered.contains("A<B>"));
        assert!(!rendered.contains("&lt;"));
    }
}
