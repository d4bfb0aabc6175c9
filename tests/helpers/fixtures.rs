//! The `Example` attribute used across the integration tests.
//!
//! ```text
//! [Example<Type>(new[] { 0, 1, 1, 2 }, name: "Fib", Answer = 42)]
//! ```

use attribute_parser::base::{
    ArgumentValue, AttributeArgumentSyntax, AttributeClass, AttributeConstructor, AttributeData,
    AttributeSyntax, ExpressionSyntax, InitializerSyntax, NamedArgument, Parameter,
    TextRange, TypeParameter, TypeRef,
};

pub const EXAMPLE: &str = r#"[Example<Type>(new[] { 0, 1, 1, 2 }, name: "Fib", Answer = 42)]"#;

/// Range of the first occurrence of `needle` in `source`.
pub fn range_of(source: &str, needle: &str) -> TextRange {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not in `{source}`"));
    TextRange::at((start as u32).into(), (needle.len() as u32).into())
}

/// Ranges of the single-character elements between `{` and `}`.
pub fn element_ranges(source: &str) -> Vec<TextRange> {
    let open = source.find('{').unwrap();
    let close = source.find('}').unwrap();
    source[open..close]
        .char_indices()
        .filter(|(_, c)| c.is_ascii_digit() || c.is_ascii_alphabetic())
        .map(|(i, _)| TextRange::at(((open + i) as u32).into(), 1.into()))
        .collect()
}

pub fn initializer_range(source: &str) -> TextRange {
    let open = source.find('{').unwrap();
    let close = source.find('}').unwrap();
    TextRange::new((open as u32).into(), ((close + 1) as u32).into())
}

pub fn example_data() -> AttributeData {
    AttributeData {
        attribute_class: Some(AttributeClass {
            name: TypeRef::new("Example"),
            type_parameters: vec![TypeParameter::new("T", 0)],
            type_arguments: vec![TypeRef::new("Type")],
        }),
        constructor: Some(AttributeConstructor {
            parameters: vec![Parameter::new("sequence", 0), Parameter::new("name", 1)],
        }),
        constructor_arguments: vec![
            ArgumentValue::Array([0, 1, 1, 2].into_iter().map(ArgumentValue::I32).collect()),
            ArgumentValue::String("Fib".into()),
        ],
        named_arguments: vec![NamedArgument::new("Answer", ArgumentValue::I32(42))],
    }
}

pub fn example_syntax() -> AttributeSyntax {
    let array_start = EXAMPLE.find("new[]").unwrap() as u32;
    let array = ExpressionSyntax::array_creation(
        Some(InitializerSyntax::new(
            element_ranges(EXAMPLE)
                .into_iter()
                .map(ExpressionSyntax::literal)
                .collect(),
            initializer_range(EXAMPLE),
        )),
        TextRange::new(array_start.into(), initializer_range(EXAMPLE).end()),
    );

    AttributeSyntax {
        type_arguments: vec![ExpressionSyntax::type_of(range_of(EXAMPLE, "Type"))],
        arguments: vec![
            AttributeArgumentSyntax::positional(array),
            AttributeArgumentSyntax::labelled(
                "name",
                ExpressionSyntax::literal(range_of(EXAMPLE, "\"Fib\"")),
            ),
            AttributeArgumentSyntax::named(
                "Answer",
                ExpressionSyntax::literal(range_of(EXAMPLE, "42")),
            ),
        ],
        range: TextRange::up_to((EXAMPLE.len() as u32).into()),
    }
}

/// `[Tags(..)]` with `Tags(params string[] tags)`; `values` are the bound
/// strings, `syntax` the argument expressions as written.
pub fn tags_attribute(
    values: Vec<ArgumentValue>,
    syntax: Vec<ExpressionSyntax>,
    source_len: u32,
) -> (AttributeData, AttributeSyntax) {
    let data = AttributeData {
        attribute_class: Some(AttributeClass {
            name: TypeRef::new("Tags"),
            type_parameters: vec![],
            type_arguments: vec![],
        }),
        constructor: Some(AttributeConstructor {
            parameters: vec![Parameter::params("tags", 0)],
        }),
        constructor_arguments: vec![ArgumentValue::Array(values)],
        named_arguments: vec![],
    };
    let syntax = AttributeSyntax {
        type_arguments: vec![],
        arguments: syntax
            .into_iter()
            .map(AttributeArgumentSyntax::positional)
            .collect(),
        range: TextRange::up_to(source_len.into()),
    };
    (data, syntax)
}
