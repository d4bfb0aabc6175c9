//! Split records for a `params` argument written element-wise, as an
//! explicit array, or not at all.

use std::sync::Arc;

use attribute_parser::base::{ArgumentValue, ExpressionSyntax, InitializerSyntax, TextRange};
use attribute_parser::location::{CollectionLocation, Location};
use attribute_parser::mappers::{Mappings, SplitMapper};
use attribute_parser::parsing::{SemanticParser, SemanticPass, SyntacticParser, SyntacticPass};
use attribute_parser::pattern;
use attribute_parser::repositories::{RepositoryError, Split, SplitMappingRepository};

use crate::helpers::fixtures::{initializer_range, range_of, tags_attribute};

#[derive(Debug, Default)]
struct Tags {
    values: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct TagLocations {
    tags: Option<Arc<CollectionLocation>>,
}

fn tags_mapper() -> SplitMapper<Tags, TagLocations, impl Mappings<Split<Tags, TagLocations>>> {
    SplitMapper::new(
        |repository: &mut SplitMappingRepository<Tags, TagLocations>| -> Result<(), RepositoryError> {
            repository
                .constructor_parameters
                .add_named_mapping_with("tags", |recorders| {
                    recorders.pair(
                        recorders.semantic().assign(
                            pattern::array(pattern::string()),
                            |record: &mut Tags, values| record.values = Some(values),
                        ),
                        recorders.syntactic().assign_collection_location(
                            |record: &mut TagLocations, location| record.tags = Some(location),
                        ),
                    )
                })
        },
    )
}

fn strings(values: &[&str]) -> Vec<ArgumentValue> {
    values
        .iter()
        .map(|v| ArgumentValue::String((*v).into()))
        .collect()
}

fn parse(
    values: Vec<ArgumentValue>,
    syntax: Vec<ExpressionSyntax>,
    source: &str,
) -> (Tags, TagLocations) {
    let (data, syntax) = tags_attribute(values, syntax, source.len() as u32);
    let mapper = tags_mapper();
    let mut tags = Tags::default();
    let mut locations = TagLocations::default();

    assert!(SemanticParser::new().try_parse(&mut mapper.semantic_recorder(&mut tags).unwrap(), &data));
    assert!(SyntacticParser::new().try_parse(
        &mut mapper.syntactic_recorder(&mut locations).unwrap(),
        &data,
        &syntax
    ));
    (tags, locations)
}

#[test]
fn test_elementwise_params() {
    let source = r#"[Tags("a", "b")]"#;
    let a = range_of(source, "\"a\"");
    let b = range_of(source, "\"b\"");

    let (tags, locations) = parse(
        strings(&["a", "b"]),
        vec![ExpressionSyntax::literal(a), ExpressionSyntax::literal(b)],
        source,
    );

    assert_eq!(tags.values, Some(vec!["a".to_string(), "b".to_string()]));
    let location = locations.tags.unwrap();
    assert_eq!(location.collection(), Location::None);
    assert_eq!(location.elements(), &[Location::Source(a), Location::Source(b)]);
}

#[test]
fn test_explicit_array_params() {
    let source = r#"[Tags(new[] { "a", "b" })]"#;
    let a = range_of(source, "\"a\"");
    let b = range_of(source, "\"b\"");
    let array_start = source.find("new[]").unwrap() as u32;
    let array = ExpressionSyntax::array_creation(
        Some(InitializerSyntax::new(
            vec![ExpressionSyntax::literal(a), ExpressionSyntax::literal(b)],
            initializer_range(source),
        )),
        TextRange::new(array_start.into(), initializer_range(source).end()),
    );

    let (tags, locations) = parse(strings(&["a", "b"]), vec![array], source);

    assert_eq!(tags.values, Some(vec!["a".to_string(), "b".to_string()]));
    let location = locations.tags.unwrap();
    assert_eq!(
        location.collection(),
        Location::Source(initializer_range(source))
    );
    assert_eq!(location.elements(), &[Location::Source(a), Location::Source(b)]);
}

#[test]
fn test_omitted_params_share_empty_location() {
    let (tags, locations) = parse(vec![], vec![], "[Tags]");

    assert_eq!(tags.values, Some(vec![]));
    let location = locations.tags.unwrap();
    assert!(location.is_none());
    assert!(Arc::ptr_eq(&location, &CollectionLocation::none()));
}

#[test]
fn test_semantic_mismatch_leaves_syntactic_record_alone() {
    let (data, _) = tags_attribute(vec![ArgumentValue::I32(1)], vec![], 10);
    let mapper = tags_mapper();
    let mut tags = Tags::default();

    assert!(!SemanticParser::new().try_parse(&mut mapper.semantic_recorder(&mut tags).unwrap(), &data));
    assert_eq!(tags.values, None);
}
