//! Service/repository pattern template
//!
//! Renders the DTO, a service interface/implementation pair, a repository
//! interface left intentionally abstract, and a controller that forwards the
//! DTO and maps the boolean service result to an HTTP response. The
//! `Handle`/`Perform` method pairing comes from the shared name derivation,
//! keeping interface and implementation consistent.

/// Template for the service/repository pattern.
pub const SERVICE_TEMPLATE: &str = r#"using System;
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
    /// Service interface for {{entity_name}}
    /// </summary>
    public interface {{service_interface}}
    {
        bool {{service_method}}({{dto_name}} dto);
    }

    /// <summary>
    /// Service implementation for {{entity_name}}
    /// </summary>
    public class {{service_name}} : {{service_interface}}
    {
        private readonly {{repository_interface}} _repository;
{{#each dependencies}}
        private readonly {{type}} {{field}};
{{/each}}

        public {{service_name}}({{repository_interface}} repository{{#if has_dependencies}}, {{dependency_params}}{{/if}})
        {
            _repository = repository;
{{#each dependencies}}
            {{field}} = {{name}};
{{/each}}
        }

        public bool {{service_method}}({{dto_name}} dto)
        {
            // Add your business logic here
            return _repository.{{repository_method}}(dto);
        }
    }

    /// <summary>
    /// Repository interface for {{entity_name}}
    /// </summary>
    public interface {{repository_interface}}
    {
        bool {{repository_method}}({{dto_name}} dto);
    }

    /// <summary>
    /// Controller for {{entity_name}}
    /// </summary>
    [ApiController]
    [Route("api/[controller]")]
{{#if authorization}}
    [Authorize]
{{/if}}
    public class {{controller_name}} : ControllerBase
    {
        private readonly {{service_interface}} _service;
{{#each dependencies}}
        private readonly {{type}} {{field}};
{{/each}}

        public {{controller_name}}({{service_interface}} service{{#if has_dependencies}}, {{dependency_params}}{{/if}})
        {
            _service = service;
{{#each dependencies}}
            {{field}} = {{name}};
{{/each}}
        }

        [{{http_attribute}}]
        public IActionResult {{action}}([FromBody] {{dto_name}} dto)
        {
            var result = _service.{{service_method}}(dto);
            if (result)
                return Ok("{{verb_upper}} operation succeeded");
            return BadRequest("{{verb_upper}} operation failed");
        }
    }
}
"#;
