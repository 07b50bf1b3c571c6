//! Simple controller pattern template
//!
//! The minimal pattern: DTO plus a single controller whose route body is an
//! unconditional success response. Dependencies, when supplied, are still
//! constructor-injected; the constructor is omitted entirely when the list
//! is empty.

/// Template for the simple controller pattern.
pub const SIMPLE_TEMPLATE: &str = r#"using System;
using Microsoft.AspNetCore.Mvc;
{{#if validation}}
using System.ComponentModel.DataAnnotations;
{{/if}}
{{#if authorization}}
using Microsoft.AspNetCore.Authorization;
{{/if}}

namespace {{namespace}}
{
    /// <summary>
    /// DTO for {{entity_name}}
    /// </summary>
    public class {{dto_name}}
    {
{{#each fields}}
{{#if required}}
        [Required]
{{/if}}
        public {{type}} {{name}} { get; set; }
{{/each}}
    }

    /// <summary>
    /// A simple controller for {{entity_name}}
    /// </summary>
    [ApiController]
    [Route("api/[controller]")]
{{#if authorization}}
    [Authorize]
{{/if}}
    public class {{controller_name}} : ControllerBase
    {
{{#each dependencies}}
        private readonly {{type}} {{field}};
{{/each}}
{{#if has_dependencies}}

        public {{controller_name}}({{dependency_params}})
        {
{{#each dependencies}}
            {{field}} = {{name}};
{{/each}}
        }

{{/if}}
        [{{http_attribute}}]
        public IActionResult {{action}}([FromBody] {{dto_name}} dto)
        {
            // Simple direct logic here
            return Ok("Success");
        }
    }
}
"#;
