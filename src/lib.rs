//! crudgen library
//!
//! Pure, UI-free building blocks behind the `crudgen` CLI: regex-based
//! property extraction over pasted C# classes, a template dispatcher that
//! renders one of three boilerplate patterns from a [`GenerationConfig`],
//! an AutoMapper profile generator, and a single-snapshot configuration
//! store.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod endpoints;
pub mod extract;
pub mod generator;
pub mod mapping;
pub mod naming;
pub mod store;
pub mod templates;

pub use config::{
    Dependency, GenerationConfig, HttpMethod, Pattern, PropertyDescriptor, UnknownMethod,
    UnknownPattern, DEFAULT_NAMESPACE, DTO_FIELD_TYPES,
};
pub use endpoints::EndpointSummary;
pub use extract::{extract_class_name, extract_properties};
pub use generator::{CodeGenerator, GenerateError};
pub use mapping::{suggest_mappings, FieldMapping, MappedClass, MappingError, MappingProfile};
pub use naming::NameSet;
pub use store::{ConfigStore, StoreError};
pub use templates::TemplateRegistry;
