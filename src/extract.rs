//! Property extraction over pasted C# class source
//!
//! This is pattern matching, not parsing: two regular expressions pick out
//! the class name and the auto-property declarations. Malformed input never
//! fails extraction, it only fails to match, and callers decide whether an
//! empty result is a user-facing error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PropertyDescriptor;

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+class\s+(\w+)").expect("class-name pattern compiles"));

// Type token allows generics, qualified names, arrays, and nullable markers,
// but no embedded spaces.
static PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+([A-Za-z0-9<>,.?\[\]]+)\s+([A-Za-z0-9]+)\s*\{\s*get;\s*set;\s*\}")
        .expect("property pattern compiles")
});

/// Class name from the first `public class <Name>` declaration, or `None`
/// when the source has no recognizable class.
#[must_use]
pub fn extract_class_name(source: &str) -> Option<String> {
    CLASS_NAME
        .captures(source)
        .map(|captures| captures[1].to_string())
}

/// Every `public <Type> <Name> { get; set; }` declaration, in source order.
///
/// Type and name substrings are preserved exactly. Zero matches returns an
/// empty vector, never an error.
#[must_use]
pub fn extract_properties(source: &str) -> Vec<PropertyDescriptor> {
    PROPERTY
        .captures_iter(source)
        .map(|captures| PropertyDescriptor::new(&captures[1], &captures[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn extracts_name_and_fields_from_single_line_class() {
        let source =
            "public class Person { public int Id { get; set; } public string Name { get; set; } }";
        assert_eq!(extract_class_name(source), Some("Person".to_string()));
        assert_eq!(
            extract_properties(source),
            vec![
                PropertyDescriptor::new("int", "Id"),
                PropertyDescriptor::new("string", "Name"),
            ]
        );
    }

    #[test]
    fn supports_generics_arrays_and_nullable_types() {
        let source = r"
            public class Report
            {
                public List<string> Lines { get; set; }
                public int[] Totals { get; set; }
                public DateTime? RunAt { get; set; }
                public System.Guid Key { get; set; }
            }";
        let properties = extract_properties(source);
        let types: Vec<&str> = properties.iter().map(|p| p.field_type.as_str()).collect();
        assert_eq!(types, vec!["List<string>", "int[]", "DateTime?", "System.Guid"]);
    }

    #[test]
    fn matches_declarations_split_across_lines() {
        let source = "public class Wrapped {\n    public bool Active\n    { get; set; }\n}";
        assert_eq!(
            extract_properties(source),
            vec![PropertyDescriptor::new("bool", "Active")]
        );
    }

    #[test]
    fn missing_class_yields_none_not_an_error() {
        assert_eq!(extract_class_name("struct Point { }"), None);
    }

    #[test]
    fn garbage_input_yields_empty_sequence() {
        assert!(extract_properties("not a class at all").is_empty());
        assert!(extract_properties("").is_empty());
    }

    #[test]
    fn read_only_properties_do_not_match() {
        let source = "public class Row { public int Id { get; } }";
        assert!(extract_properties(source).is_empty());
    }

    proptest! {
        #[test]
        fn finds_every_declaration_in_order(
            pairs in prop::collection::vec(
                ("[A-Za-z][A-Za-z0-9]{0,8}", "[A-Za-z][A-Za-z0-9]{0,8}"),
                1..8,
            )
        ) {
            let mut source = String::from("public class Sample\n{\n");
            for (field_type, name) in &pairs {
                source.push_str(&format!(
                    "    public {field_type} {name} {{ get; set; }}\n"
                ));
            }
            source.push('}');

            let properties = extract_properties(&source);
            prop_assert_eq!(properties.len(), pairs.len());
            for (descriptor, (field_type, name)) in properties.iter().zip(&pairs) {
                prop_assert_eq!(&descriptor.field_type, field_type);
                prop_assert_eq!(&descriptor.name, name);
            }
        }

        #[test]
        fn extraction_is_idempotent(source in ".{0,200}") {
            prop_assert_eq!(extract_properties(&source), extract_properties(&source));
            prop_assert_eq!(extract_class_name(&source), extract_class_name(&source));
        }
    }
}
