//! CQRS pattern template
//!
//! Renders the DTO, a DTO-typed command, a handler with constructor-injected
//! dependencies and a placeholder body, and a controller that builds the
//! command field-by-field and dispatches it through `IMediator`.

/// Template for the CQRS pattern.
pub const CQRS_TEMPLATE: &str = r#"using System;
using System.Collections.Generic;
using System.Threading;
using System.Threading.Tasks;
using Microsoft.AspNetCore.Mvc;
{{#if validation}}
using System.ComponentModel.DataAnnotations;
{{/if}}
{{#if authorization}}
using Microsoft.AspNetCore.Authorization;
{{/if}}
using MediatR;

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
    /// Command for {{entity_name}} {{verb}}
    /// </summary>
    public class {{command_name}} : IRequest<{{dto_name}}>
    {
{{#each fields}}
{{#if required}}
        [Required]
{{/if}}
        public {{type}} {{name}} { get; set; }
{{/each}}
    }

    /// <summary>
    /// Handler for {{command_name}}
    /// </summary>
    public class {{handler_name}} : IRequestHandler<{{command_name}}, {{dto_name}}>
    {
{{#each dependencies}}
        private readonly {{type}} {{field}};
{{/each}}
{{#if has_dependencies}}

        public {{handler_name}}({{dependency_params}})
        {
{{#each dependencies}}
            {{field}} = {{name}};
{{/each}}
        }

{{/if}}
        public async Task<{{dto_name}}> Handle({{command_name}} request, CancellationToken cancellationToken)
        {
            // TODO: Implement your business logic here
            throw new NotImplementedException();
        }
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
        private readonly IMediator _mediator;
{{#each dependencies}}
        private readonly {{type}} {{field}};
{{/each}}

        public {{controller_name}}(IMediator mediator{{#if has_dependencies}}, {{dependency_params}}{{/if}})
        {
            _mediator = mediator;
{{#each dependencies}}
            {{field}} = {{name}};
{{/each}}
        }

        [{{http_attribute}}]
        public async Task<IActionResult> {{action}}([FromBody] {{dto_name}} dto)
        {
            var command = new {{command_name}}
            {
{{#each fields}}
                {{name}} = dto.{{name}},
{{/each}}
            };

            var result = await _mediator.Send(command);
            if (result == null)
                return BadRequest("{{verb_upper}} operation failed");
            return Ok(result);
        }
    }
}
"#;
