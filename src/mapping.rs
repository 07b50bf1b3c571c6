//! AutoMapper profile generation and mapping suggestions
//!
//! The profile renderer accepts any confirmed pair list verbatim; the
//! case-insensitive name matching in [`suggest_mappings`] is only a default
//! used to seed the pair list, never a constraint. Class-level validation
//! (class name present, at least one property, non-empty pair list) happens
//! here so the callers reject bad input before rendering.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::PropertyDescriptor;
use crate::extract::{extract_class_name, extract_properties};
use crate::templates::TemplateRegistry;

/// Errors produced while building or rendering a mapping profile.
#[derive(Debug, Error)]
pub enum MappingError {
    /// No `public class` declaration in one of the inputs.
    #[error("no class declaration found in the {0} input")]
    MissingClassName(&'static str),
    /// A class matched but had no extractable properties.
    #[error("no properties found in class '{0}'")]
    NoProperties(String),
    /// The confirmed pair list was empty.
    #[error("at least one field mapping is required")]
    EmptyMappings,
    /// Rendering failed.
    #[error("failed to render mapping template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// One confirmed source-to-target field pair.
///
/// Many-to-one pairs are not prevented; unmapped source fields are simply
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Field on the source class.
    pub source: String,
    /// Field on the target class.
    pub target: String,
}

/// A class extracted for mapping: its name and properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedClass {
    /// Extracted class name.
    pub name: String,
    /// Extracted properties, in source order.
    pub properties: Vec<PropertyDescriptor>,
}

impl MappedClass {
    /// Extract and validate one side of a mapping from pasted class source.
    ///
    /// `side` names the input in error messages (`"source"` or `"target"`).
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingClassName`] when no class declaration
    /// matches and [`MappingError::NoProperties`] when the class has no
    /// extractable properties.
    pub fn from_source(text: &str, side: &'static str) -> Result<Self, MappingError> {
        let name = extract_class_name(text).ok_or(MappingError::MissingClassName(side))?;
        let properties = extract_properties(text);
        if properties.is_empty() {
            return Err(MappingError::NoProperties(name));
        }
        Ok(Self { name, properties })
    }
}

/// A mapping profile ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingProfile {
    /// Source class name.
    pub source_name: String,
    /// Target class name.
    pub target_name: String,
    /// Confirmed pairs, rendered in this exact order.
    pub mappings: Vec<FieldMapping>,
}

impl MappingProfile {
    /// Render the AutoMapper profile block.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::EmptyMappings`] for an empty pair list and
    /// [`MappingError::Render`] when rendering fails.
    pub fn render(&self, templates: &TemplateRegistry) -> Result<String, MappingError> {
        if self.mappings.is_empty() {
            return Err(MappingError::EmptyMappings);
        }
        let context = json!({
            "source_name": self.source_name,
            "target_name": self.target_name,
            "mappings": self.mappings,
        });
        Ok(templates.render("mapping", &context)?)
    }
}

/// Pair each source field with the target field whose name matches under
/// ASCII case-insensitive comparison. Unmatched source fields are omitted.
#[must_use]
pub fn suggest_mappings(
    source: &[PropertyDescriptor],
    target: &[PropertyDescriptor],
) -> Vec<FieldMapping> {
    source
        .iter()
        .filter_map(|src| {
            target
                .iter()
                .find(|tgt| tgt.name.eq_ignore_ascii_case(&src.name))
                .map(|tgt| FieldMapping {
                    source: src.name.clone(),
                    target: tgt.name.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(names: &[&str]) -> Vec<PropertyDescriptor> {
        names
            .iter()
            .map(|name| PropertyDescriptor::new("string", *name))
            .collect()
    }

    #[test]
    fn suggestions_match_names_case_insensitively() {
        let source = props(&["Id", "firstName", "Extra"]);
        let target = props(&["ID", "FirstName", "Other"]);
        let suggested = suggest_mappings(&source, &target);
        assert_eq!(
            suggested,
            vec![
                FieldMapping {
                    source: "Id".to_string(),
                    target: "ID".to_string(),
                },
                FieldMapping {
                    source: "firstName".to_string(),
                    target: "FirstName".to_string(),
                },
            ]
        );
    }

    #[test]
    fn profile_renders_pairs_in_order_with_reverse_map_last() {
        let templates = TemplateRegistry::new().unwrap();
        let profile = MappingProfile {
            source_name: "PersonDto".to_string(),
            target_name: "Person".to_string(),
            mappings: vec![
                FieldMapping {
                    source: "Id".to_string(),
                    target: "Id".to_string(),
                },
                FieldMapping {
                    source: "Name".to_string(),
                    target: "FullName".to_string(),
                },
            ],
        };

        let code = profile.render(&templates).unwrap();
        assert!(code.contains("public class PersonDtoProfile : Profile"));
        assert!(code.contains("CreateMap<PersonDto, Person>()"));
        let first = code
            .find(".ForMember(dest => dest.Id, opt => opt.MapFrom(src => src.Id))")
            .unwrap();
        let second = code
            .find(".ForMember(dest => dest.FullName, opt => opt.MapFrom(src => src.Name))")
            .unwrap();
        let reverse = code.find(".ReverseMap();").unwrap();
        assert!(first < second);
        assert!(second < reverse);
    }

    #[test]
    fn empty_pair_list_is_rejected_before_rendering() {
        let templates = TemplateRegistry::new().unwrap();
        let profile = MappingProfile {
            source_name: "A".to_string(),
            target_name: "B".to_string(),
            mappings: Vec::new(),
        };
        assert!(matches!(
            profile.render(&templates),
            Err(MappingError::EmptyMappings)
        ));
    }

    #[test]
    fn mapped_class_requires_declaration_and_properties() {
        let err = MappedClass::from_source("int x;", "source").unwrap_err();
        assert!(matches!(err, MappingError::MissingClassName("source")));

        let err = MappedClass::from_source("public class Empty { }", "target").unwrap_err();
        assert!(matches!(err, MappingError::NoProperties(name) if name == "Empty"));

        let class = MappedClass::from_source(
            "public class Person { public int Id { get; set; } }",
            "source",
        )
        .unwrap();
        assert_eq!(class.name, "Person");
        assert_eq!(class.properties.len(), 1);
    }
}
