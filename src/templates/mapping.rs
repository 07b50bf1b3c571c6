//! AutoMapper profile template
//!
//! One `.ForMember` statement per confirmed pair, in the order supplied,
//! with `.ReverseMap()` appended unconditionally after all explicit
//! mappings.

/// Template for the AutoMapper mapping profile.
pub const MAPPING_TEMPLATE: &str = r"using AutoMapper;

public class {{source_name}}Profile : Profile
{
    public {{source_name}}Profile()
    {
        CreateMap<{{source_name}}, {{target_name}}>()
{{#each mappings}}
            .ForMember(dest => dest.{{target}}, opt => opt.MapFrom(src => src.{{source}}))
{{/each}}
            .ReverseMap();
    }
}
";
