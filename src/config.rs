//! Generation configuration and the value types it is built from
//!
//! Everything here is transient: a [`GenerationConfig`] is rebuilt from
//! arguments (or the interactive form) on every invocation. The serde layout
//! deliberately matches the snapshot document produced by earlier releases
//! (`entityName`, `httpMethod`, `dtoFields` with `{type, name}` entries), so
//! an old snapshot loads unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace used when the configuration leaves the namespace blank.
pub const DEFAULT_NAMESPACE: &str = "DefaultNamespace";

/// Field types offered by the interactive form selector.
///
/// Free-typed values (from extraction or `Name:type` specs) are passed
/// through verbatim; this set only seeds the selector.
pub const DTO_FIELD_TYPES: [&str; 6] = ["int", "string", "decimal", "DateTime", "bool", "Guid"];

/// A single `(type, name)` property of a DTO class.
///
/// Produced by the extractor in source order. The type token is carried
/// verbatim; no semantic validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// C# type token (supports generics, qualified names, arrays, `?`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Property name.
    pub name: String,
}

impl PropertyDescriptor {
    /// Create a descriptor from a type token and a name.
    pub fn new(field_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            name: name.into(),
        }
    }
}

/// A constructor-injected dependency for generated handlers and controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependency type (e.g. `IEmailService`).
    #[serde(rename = "type")]
    pub dep_type: String,
    /// Parameter name as supplied (e.g. `emailService`).
    pub name: String,
}

impl Dependency {
    /// Parse a free-text dependency line of the form `<Type> <name>`.
    ///
    /// The last whitespace-separated token is the name; everything before it
    /// is the type. Blank lines yield `None`. A single-token line parses as a
    /// name with an empty type, matching the historical behavior.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (name, dep_type) = tokens.split_last()?;
        Some(Self {
            dep_type: dep_type.join(" "),
            name: (*name).to_string(),
        })
    }
}

/// Error for a pattern selector outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern '{0}' (expected one of: cqrs, service, simple)")]
pub struct UnknownPattern(pub String);

/// One of the three supported code-generation styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Command, handler, and mediator-dispatching controller.
    #[default]
    Cqrs,
    /// Service interface/implementation pair over an abstract repository.
    Service,
    /// Single controller with no service or handler layer.
    Simple,
}

impl Pattern {
    /// Canonical selector string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cqrs => "cqrs",
            Self::Service => "service",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cqrs" => Ok(Self::Cqrs),
            "service" => Ok(Self::Service),
            "simple" => Ok(Self::Simple),
            other => Err(UnknownPattern(other.to_string())),
        }
    }
}

/// Error for an HTTP verb outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method '{0}' (expected one of: GET, POST, PUT, DELETE, PATCH)")]
pub struct UnknownMethod(pub String);

/// HTTP verb for the generated route.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum HttpMethod {
    /// GET
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
}

impl HttpMethod {
    /// Canonical uppercase wire form (`GET`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Capitalization-normalized identifier form (`Get`), used in every
    /// generated identifier.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Delete => "Delete",
            Self::Patch => "Patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Everything the dispatcher needs to render one output block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Selected generation pattern.
    pub pattern: Pattern,
    /// HTTP verb for the generated route.
    pub http_method: HttpMethod,
    /// Entity name; must be non-empty before generation.
    pub entity_name: String,
    /// DTO fields, rendered in this exact order.
    pub dto_fields: Vec<PropertyDescriptor>,
    /// Namespace for generated code; empty falls back to
    /// [`DEFAULT_NAMESPACE`].
    pub namespace: String,
    /// Guard the generated controller with `[Authorize]`.
    #[serde(rename = "authorization")]
    pub use_authorization: bool,
    /// Mark every rendered field declaration `[Required]`.
    #[serde(rename = "validation")]
    pub use_validation: bool,
    /// Constructor-injected dependencies, rendered in this exact order.
    pub dependencies: Vec<Dependency>,
}

impl GenerationConfig {
    /// Namespace with the empty-string fallback applied.
    #[must_use]
    pub fn effective_namespace(&self) -> &str {
        let trimmed = self.namespace.trim();
        if trimmed.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            trimmed
        }
    }
}
