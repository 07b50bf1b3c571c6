//! Shared identifier derivation
//!
//! Every generated identifier is a deterministic concatenation of the entity
//! name, the capitalization-normalized HTTP verb, and a fixed affix. All
//! three templates pull their names from one [`NameSet`] so they name-match
//! when referencing the same conceptual construct.

use convert_case::{Case, Casing};

use crate::config::{Dependency, HttpMethod};

/// The full set of identifiers for one entity/verb combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    /// `OrderDto`
    pub dto: String,
    /// `OrderGetCommand`
    pub command: String,
    /// `OrderGetHandler`
    pub handler: String,
    /// `OrderController`
    pub controller: String,
    /// `IOrderService`
    pub service_interface: String,
    /// `OrderService`
    pub service: String,
    /// `IOrderRepository`
    pub repository_interface: String,
    /// `HandleGet`
    pub service_method: String,
    /// `PerformGet`
    pub repository_method: String,
    /// `GetOrder` (controller action)
    pub action: String,
    /// `HttpGet` (route attribute)
    pub http_attribute: String,
    /// `Get`
    pub verb: &'static str,
    /// `GET`, used in human-readable strings inside generated code
    pub verb_upper: &'static str,
}

impl NameSet {
    /// Derive all identifiers for an entity name and HTTP verb.
    #[must_use]
    pub fn derive(entity_name: &str, method: HttpMethod) -> Self {
        let entity = entity_name.trim();
        let verb = method.verb();
        Self {
            dto: format!("{entity}Dto"),
            command: format!("{entity}{verb}Command"),
            handler: format!("{entity}{verb}Handler"),
            controller: format!("{entity}Controller"),
            service_interface: format!("I{entity}Service"),
            service: format!("{entity}Service"),
            repository_interface: format!("I{entity}Repository"),
            service_method: format!("Handle{verb}"),
            repository_method: format!("Perform{verb}"),
            action: format!("{verb}{entity}"),
            http_attribute: format!("Http{verb}"),
            verb,
            verb_upper: method.as_str(),
        }
    }
}

/// Backing-field name for a constructor-injected dependency: the supplied
/// name camel-cased and prefixed with an underscore (`_emailService`).
#[must_use]
pub fn dependency_field(dependency: &Dependency) -> String {
    format!("_{}", dependency.name.to_case(Case::Camel))
}
