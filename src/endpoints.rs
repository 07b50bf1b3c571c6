//! Endpoint summary printed after each generation
//!
//! One record per generated controller route: verb, conventional route,
//! return type, and whether the route is `[Authorize]`-guarded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, HttpMethod};

/// Summary of the route exposed by the generated controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSummary {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Conventional route, `/api/{entity lowercased}`.
    pub route: String,
    /// `List<{Entity}Dto>` for GET, `{Entity}Dto` otherwise.
    pub return_type: String,
    /// Whether the controller carries `[Authorize]`.
    pub authorized: bool,
}

impl EndpointSummary {
    /// Derive the summary from a generation configuration.
    #[must_use]
    pub fn from_config(config: &GenerationConfig) -> Self {
        let entity = config.entity_name.trim();
        let return_type = if config.http_method == HttpMethod::Get {
            format!("List<{entity}Dto>")
        } else {
            format!("{entity}Dto")
        };
        Self {
            method: config.http_method,
            route: format!("/api/{}", entity.to_lowercase()),
            return_type,
            authorized: config.use_authorization,
        }
    }
}

impl fmt::Display for EndpointSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.method, self.route, self.return_type)?;
        if self.authorized {
            write!(f, " [Authorize]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyDescriptor;

    fn config(method: HttpMethod, authorized: bool) -> GenerationConfig {
        GenerationConfig {
            http_method: method,
            entity_name: "Order".to_string(),
            dto_fields: vec![PropertyDescriptor::new("int", "Id")],
            use_authorization: authorized,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn get_routes_return_a_list() {
        let summary = EndpointSummary::from_config(&config(HttpMethod::Get, false));
        assert_eq!(summary.route, "/api/order");
        assert_eq!(summary.return_type, "List<OrderDto>");
        assert_eq!(summary.to_string(), "GET /api/order -> List<OrderDto>");
    }

    #[test]
    fn non_get_routes_return_the_dto() {
        let summary = EndpointSummary::from_config(&config(HttpMethod::Post, true));
        assert_eq!(summary.return_type, "OrderDto");
        assert_eq!(
            summary.to_string(),
            "POST /api/order -> OrderDto [Authorize]"
        );
    }
}
